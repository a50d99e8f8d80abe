//! Procedural galaxy generation.
//!
//! A [`GalaxyDirectory`] owns a session's stars. On the first tick it sizes
//! the galaxy from the target star count, then for every star samples mass,
//! metallicity and age, places it with the [`PlacementSampler`], and builds
//! its disk chemistry and planets. Later ticks only move planets along their
//! orbits.
//!
//! ```no_run
//! use galaxy::{GalaxyConfig, GalaxyDirectory};
//!
//! let mut galaxy = GalaxyDirectory::named("andromeda", GalaxyConfig::with_star_count(50));
//! galaxy.advance(0.0);
//! for body in galaxy.bodies() {
//!     println!("{} {} {:?}", body.kind(), body.name(), body.position());
//! }
//! ```

pub mod body;
pub mod config;
pub mod directory;
pub mod error;
pub mod lock;
pub mod names;
pub mod placement;
pub mod star;

#[cfg(test)]
mod directory_test;
#[cfg(test)]
mod lock_test;
#[cfg(test)]
mod names_test;

pub use body::{BodyId, BodyKind, BodyRef, BodySnapshot};
pub use config::{DEFAULT_STAR_COUNT, GalaxyConfig};
pub use directory::GalaxyDirectory;
pub use error::{ConfigError, ConfigResult};
pub use lock::{CameraLock, LockConfig, LockEvent, LockState};
pub use names::NameGenerator;
pub use planetary::{PlanetId, StarId};
pub use placement::{
    Placement, PlacementConfig, PlacementSampler, SpacingAnchor, expected_spacing, galaxy_radius,
};
pub use star::{Star, StarContext};
