//! Typed physical quantities used throughout the galaxy generator.
//!
//! Each quantity wraps an `f64` in a natural astronomical base unit
//! (solar masses, AU, years, Kelvin) and serializes transparently as a number.

pub mod length;
pub mod mass;
pub mod temperature;
pub mod time;

#[cfg(test)]
mod time_test;

pub use length::Length;
pub use mass::{EARTH_MASSES_PER_SOLAR_MASS, Mass};
pub use temperature::Temperature;
pub use time::Time;
