//! Chemistry-driven planetary system generation
//!
//! Turns a star and its disk chemistry into an ordered list of planets:
//! a solids budget sets the planet count, semi-major axes are laid out in
//! spaced bands and tidied by spacing passes, masses are drawn against the
//! remaining budget, and each planet is typed, sized and possibly migrated.

pub mod axes;
pub mod generation;
pub mod sampling;

#[cfg(test)]
mod axes_test;

pub use axes::{
    cap_inner_orbits, enforce_inner_absolute_spacing, enforce_min_ratio, enforce_regional_spacing,
    layout_semi_major_axes, sample_semi_major_axes, spaced_band,
};
pub use generation::{HostContext, MAX_PLANETS, generate_planets, generate_planets_with_names};
pub use sampling::{
    sample_eccentricity, sample_inclination, sample_log_uniform, sample_planet_count,
    solids_budget,
};
