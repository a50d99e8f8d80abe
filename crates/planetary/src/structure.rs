//! Game-friendly mass-radius-density relations.
//!
//! These are heuristics, not an equation of state: a rocky power law, a puffy
//! sub-Neptune law with scatter, and roughly Jupiter-sized giants.

use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::sample_gaussian;
use units::Length;
use units::length::JUPITER_TO_EARTH_RADII;

use crate::planet_type::PlanetType;

/// Physical size and bulk properties derived from type, mass and composition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetStructure {
    pub radius: Length,
    /// Radius in Jupiter radii, gas giants only
    pub jupiter_radius: Option<f64>,
    /// g/cm³
    pub density: f64,
    pub atmosphere_fraction: f64,
}

impl PlanetStructure {
    /// Roll radius, density and atmosphere for a planet.
    ///
    /// `water` and `core` are the final mass fractions.
    pub fn sample(
        planet_type: PlanetType,
        mass_earth: f64,
        water: f64,
        core: f64,
        rng: &mut impl Rng,
    ) -> Self {
        let (radius_earth, jupiter_radius) = match planet_type {
            PlanetType::GasGiant => {
                let rj = gas_giant_radius_jupiter(rng);
                (rj * JUPITER_TO_EARTH_RADII, Some(rj))
            }
            PlanetType::IceGiant => (sub_neptune_radius(mass_earth, rng).clamp(2.2, 6.0), None),
            PlanetType::DwarfGas | PlanetType::WaterWorld => {
                (sub_neptune_radius(mass_earth, rng).clamp(1.6, 5.0), None)
            }
            PlanetType::Rocky | PlanetType::IronRich | PlanetType::Ice => {
                (rocky_radius(mass_earth).clamp(0.3, 2.3), None)
            }
        };

        let density = density(planet_type, water, core, rng);
        let atmosphere_fraction = atmosphere_fraction(planet_type, rng);

        Self {
            radius: Length::from_earth_radii(radius_earth),
            jupiter_radius,
            density,
            atmosphere_fraction,
        }
    }
}

/// R ∝ M^0.27, in Earth radii
pub fn rocky_radius(mass_earth: f64) -> f64 {
    mass_earth.max(0.05).powf(0.27)
}

/// Envelope-inflated radius for 2-20 M⊕, in Earth radii
pub fn sub_neptune_radius(mass_earth: f64, rng: &mut impl Rng) -> f64 {
    let base = 1.6 * mass_earth.max(0.5).powf(0.22);
    sample_gaussian(rng, base, 0.3).clamp(1.6, 5.0)
}

/// Giants sit near 1 R_J across a wide mass range
pub fn gas_giant_radius_jupiter(rng: &mut impl Rng) -> f64 {
    sample_gaussian(rng, 0.9, 0.15).clamp(0.7, 1.3)
}

/// Density in g/cm³: water lowers it, an oversized core raises it
pub fn density(planet_type: PlanetType, water: f64, core: f64, rng: &mut impl Rng) -> f64 {
    let mut rho = planet_type.base_density();
    rho *= 1.0 - 0.5 * water.clamp(0.0, 0.9);
    rho *= 1.0 + 0.35 * (core - 0.3).clamp(-0.2, 0.5);
    rho *= sample_gaussian(rng, 1.0, 0.07);
    rho.clamp(0.5, 12.0)
}

/// Mass fraction held in the gaseous envelope
pub fn atmosphere_fraction(planet_type: PlanetType, rng: &mut impl Rng) -> f64 {
    match planet_type {
        PlanetType::DwarfGas => rng.random_range(0.01..0.05),
        PlanetType::IceGiant => rng.random_range(0.08..0.18),
        PlanetType::GasGiant => rng.random_range(0.70..0.90),
        _ => 0.0,
    }
}
