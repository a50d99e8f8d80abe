//! Phase selection and the luminosity/radius relations for each phase.
//!
//! Giant branches are skipped: a star goes straight from the main sequence to
//! its remnant once its age passes the main-sequence lifetime.

use std::fmt;

use serde::{Deserialize, Serialize};
use units::{Mass, Temperature, Time};

/// Stars younger than this are still contracting protostars
pub const PROTOSTAR_AGE_YEARS: f64 = 1.0e6;

/// Solar effective temperature used to anchor Stefan-Boltzmann scaling
pub const SOLAR_TEMPERATURE_K: f64 = 5772.0;

const WHITE_DWARF_MAX_INITIAL_MASS: f64 = 8.0;
const NEUTRON_STAR_MAX_INITIAL_MASS: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StellarPhase {
    Protostar,
    MainSequence,
    WhiteDwarf,
    NeutronStar,
    BlackHole,
}

impl StellarPhase {
    /// Phase reached by a star of `initial_mass` at `age`.
    pub fn from_mass_and_age(initial_mass: Mass, age: Time) -> Self {
        let age = age.to_years();
        if age < PROTOSTAR_AGE_YEARS {
            StellarPhase::Protostar
        } else if age <= main_sequence_lifetime(initial_mass).to_years() {
            StellarPhase::MainSequence
        } else {
            Self::remnant_for(initial_mass)
        }
    }

    /// Remnant left behind once the main sequence is exhausted.
    pub fn remnant_for(initial_mass: Mass) -> Self {
        let m = initial_mass.to_solar_masses();
        if m < WHITE_DWARF_MAX_INITIAL_MASS {
            StellarPhase::WhiteDwarf
        } else if m < NEUTRON_STAR_MAX_INITIAL_MASS {
            StellarPhase::NeutronStar
        } else {
            StellarPhase::BlackHole
        }
    }

    pub fn is_remnant(&self) -> bool {
        matches!(
            self,
            StellarPhase::WhiteDwarf | StellarPhase::NeutronStar | StellarPhase::BlackHole
        )
    }
}

impl fmt::Display for StellarPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            StellarPhase::Protostar => "protostar",
            StellarPhase::MainSequence => "main_sequence",
            StellarPhase::WhiteDwarf => "white_dwarf",
            StellarPhase::NeutronStar => "neutron_star",
            StellarPhase::BlackHole => "black_hole",
        };
        write!(f, "{}", str)
    }
}

/// Main-sequence lifetime, 10 Gyr · M^-2.5
pub fn main_sequence_lifetime(mass: Mass) -> Time {
    Time::from_years(1.0e10 * mass.powf(-2.5))
}

/// Piecewise mass-luminosity relation on the main sequence, in L☉
pub fn main_sequence_luminosity(mass: Mass) -> f64 {
    let m = mass.to_solar_masses();
    if m < 0.43 {
        0.23 * m.powf(2.3)
    } else if m < 2.0 {
        m.powf(4.0)
    } else if m < 20.0 {
        1.5 * m.powf(3.5)
    } else {
        32_000.0 * m
    }
}

/// Zero-age main-sequence radius, in R☉
pub fn main_sequence_radius(mass: Mass) -> f64 {
    let m = mass.to_solar_masses();
    if m < 1.0 { m.powf(0.8) } else { m.powf(0.57) }
}

/// Effective temperature from L ∝ R² T⁴, anchored on the Sun
pub fn effective_temperature(luminosity: f64, radius: f64) -> Temperature {
    Temperature::from_kelvin(SOLAR_TEMPERATURE_K * (luminosity / (radius * radius)).powf(0.25))
}

/// Crude initial-final mass relation for white dwarfs
pub fn white_dwarf_mass(initial_mass: Mass) -> Mass {
    let m = initial_mass.to_solar_masses();
    Mass::from_solar_masses((0.45 + 0.1 * (m - 1.0)).clamp(0.17, 1.35))
}

pub fn neutron_star_mass() -> Mass {
    Mass::from_solar_masses(1.4)
}

pub fn black_hole_mass(initial_mass: Mass) -> Mass {
    let m = initial_mass.to_solar_masses();
    Mass::from_solar_masses((0.1 * m + 3.0).clamp(3.0, 30.0))
}

/// Physical state of a star in a given phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseState {
    pub current_mass: Mass,
    /// L☉
    pub luminosity: f64,
    /// R☉
    pub radius: f64,
    pub temperature: Temperature,
}

/// Evaluate mass, luminosity, radius and temperature for a star.
pub fn evolve(initial_mass: Mass, age: Time) -> (StellarPhase, PhaseState) {
    let phase = StellarPhase::from_mass_and_age(initial_mass, age);
    let l_ms = main_sequence_luminosity(initial_mass);
    let r_ms = main_sequence_radius(initial_mass);

    let state = match phase {
        StellarPhase::Protostar => {
            let luminosity = l_ms * 0.3;
            let radius = r_ms * 2.0;
            PhaseState {
                current_mass: initial_mass,
                luminosity,
                radius,
                temperature: effective_temperature(luminosity, radius),
            }
        }
        StellarPhase::MainSequence => {
            let f = age / main_sequence_lifetime(initial_mass);
            let luminosity = l_ms * (1.0 + 0.4 * f);
            let radius = r_ms * (1.0 + 0.15 * f);
            PhaseState {
                current_mass: initial_mass,
                luminosity,
                radius,
                temperature: effective_temperature(luminosity, radius),
            }
        }
        StellarPhase::WhiteDwarf => PhaseState {
            current_mass: white_dwarf_mass(initial_mass),
            luminosity: 0.001,
            radius: 0.012,
            temperature: Temperature::from_kelvin(8_000.0),
        },
        StellarPhase::NeutronStar => PhaseState {
            current_mass: neutron_star_mass(),
            luminosity: 1.0e-5,
            radius: 2.0e-5,
            temperature: Temperature::from_kelvin(1.0e6),
        },
        StellarPhase::BlackHole => PhaseState {
            current_mass: black_hole_mass(initial_mass),
            luminosity: 0.0,
            radius: 0.0,
            temperature: Temperature::zero(),
        },
    };

    (phase, state)
}
