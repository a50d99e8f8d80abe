//! Stellar evolution model and stellar population samplers.
//!
//! A star is described by three inputs (initial mass, metallicity, age); every
//! other property is a deterministic function of them. The samplers draw those
//! inputs for a Milky Way-like field population.

pub mod composition;
pub mod evolution;
pub mod properties;
pub mod sampling;
pub mod spectral;
pub mod zones;


pub use composition::BulkComposition;
pub use evolution::{StellarPhase, main_sequence_lifetime};
pub use properties::{SOLAR_METALLICITY, StellarProperties};
pub use sampling::{
    sample_age, sample_gaussian, sample_initial_mass, sample_metallicity, sample_standard_normal,
};
pub use spectral::SpectralClass;
pub use zones::{HabitableZone, gravitational_lock_radius, snow_line};
