//! Orbital kinematics for the galaxy map.
//!
//! Planets ride circular orbits around their star. Each tick advances the
//! orbital phase, converts the orbit to world units and rebuilds the
//! per-zoom-level coordinate cache that renderers read.

pub mod orbit;
pub mod scale;
pub mod zoom;

#[cfg(test)]
mod orbit_test;
#[cfg(test)]
mod zoom_test;

pub use orbit::{CircularOrbit, KinematicsConfig, orbital_period_years, wrap_phase};
pub use scale::WorldScale;
pub use zoom::{Projections, ZoomTable};
