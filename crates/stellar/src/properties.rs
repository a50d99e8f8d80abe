use serde::{Deserialize, Serialize};
use units::{Length, Mass, Temperature, Time};

use crate::composition::BulkComposition;
use crate::evolution::{StellarPhase, evolve, main_sequence_lifetime};
use crate::spectral::SpectralClass;
use crate::zones::{HabitableZone, gravitational_lock_radius, snow_line};

/// Solar metal mass fraction
pub const SOLAR_METALLICITY: f64 = 0.014;
pub const MIN_METALLICITY: f64 = 1.0e-5;
pub const MAX_METALLICITY: f64 = 0.05;

/// Mass substituted for non-positive or non-finite input
pub const MIN_STELLAR_MASS: f64 = 0.08;

/// Every derived property of a star.
///
/// Built once from (initial mass, metallicity, age) and never mutated; two
/// calls with the same inputs yield identical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarProperties {
    pub initial_mass: Mass,
    /// Metal mass fraction Z
    pub metallicity: f64,
    pub age: Time,
    pub phase: StellarPhase,
    pub current_mass: Mass,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Radius in solar radii (R☉)
    pub radius: f64,
    pub temperature: Temperature,
    pub spectral_class: SpectralClass,
    pub main_sequence_lifetime: Time,
    pub habitable_zone: HabitableZone,
    pub snow_line: Length,
    pub gravitational_lock_radius: Length,
    pub composition: BulkComposition,
}

impl StellarProperties {
    /// Derive a star from its fundamental inputs.
    ///
    /// Inputs are normalized rather than rejected: non-finite or non-positive
    /// masses become 0.08 M☉, Z is clamped to [1e-5, 0.05] and negative or
    /// non-finite ages become zero.
    pub fn derive(initial_mass: Mass, metallicity: f64, age: Time) -> Self {
        let initial_mass = normalize_mass(initial_mass);
        let metallicity = normalize_metallicity(metallicity);
        let age = normalize_age(age);

        let (phase, state) = evolve(initial_mass, age);
        let habitable_zone = HabitableZone::from_luminosity(state.luminosity);

        Self {
            initial_mass,
            metallicity,
            age,
            phase,
            current_mass: state.current_mass,
            luminosity: state.luminosity,
            radius: state.radius,
            temperature: state.temperature,
            spectral_class: SpectralClass::from_temperature(state.temperature),
            main_sequence_lifetime: main_sequence_lifetime(initial_mass),
            habitable_zone,
            snow_line: snow_line(state.luminosity),
            gravitational_lock_radius: gravitational_lock_radius(state.current_mass),
            composition: BulkComposition::from_metallicity(metallicity),
        }
    }

    /// The Sun: 1 M☉, Z = 0.014, 4.57 Gyr
    pub fn solar_analog() -> Self {
        Self::derive(
            Mass::from_solar_masses(1.0),
            SOLAR_METALLICITY,
            Time::from_gyr(4.57),
        )
    }

    /// Radius as a length, for comparisons against orbital distances
    pub fn radius_length(&self) -> Length {
        Length::from_solar_radii(self.radius)
    }
}

fn normalize_mass(mass: Mass) -> Mass {
    let m = mass.to_solar_masses();
    if m.is_finite() && m > 0.0 {
        mass
    } else {
        Mass::from_solar_masses(MIN_STELLAR_MASS)
    }
}

fn normalize_metallicity(z: f64) -> f64 {
    if z.is_finite() {
        z.clamp(MIN_METALLICITY, MAX_METALLICITY)
    } else {
        SOLAR_METALLICITY
    }
}

fn normalize_age(age: Time) -> Time {
    let years = age.to_years();
    if years.is_finite() && years > 0.0 {
        age
    } else {
        Time::zero()
    }
}
