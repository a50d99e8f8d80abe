//! Planet data model.
//!
//! Planets are classified by a coarse type tag decided from mass and the
//! thermal zone they formed in, carry simple mass-radius-density relations,
//! and ride a circular orbit around their parent star.

pub mod formation_zone;
pub mod ids;
pub mod planet;
pub mod planet_type;
pub mod structure;

#[cfg(test)]
mod formation_zone_test;
#[cfg(test)]
mod structure_test;

pub use formation_zone::FormationZone;
pub use ids::{PlanetId, StarId};
pub use planet::{Composition, Planet, hill_radius};
pub use planet_type::PlanetType;
pub use structure::PlanetStructure;
