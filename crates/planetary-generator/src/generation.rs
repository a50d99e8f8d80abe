//! Planetary system generation pipeline
//!
//! One pass over the formation axes, innermost first:
//! 1. Draw a mass against the remaining solids budget (stop when it runs dry)
//! 2. Roll core and water fractions from the formation zone and Fe/Mg
//! 3. Classify, migrate, and size the planet
//! 4. Attach orbit shape, a name and a starting phase
//!
//! Planets keep formation order even when migration reorders their final
//! axes. Positions start at the origin; the owning star places them with a
//! zero-length [`Planet::advance`] once its own position is known.

use std::f64::consts::TAU;

use log::debug;
use nalgebra::Point2;
use orbits::{CircularOrbit, KinematicsConfig};
use planetary::{
    Composition, FormationZone, Planet, PlanetId, PlanetStructure, PlanetType, StarId, hill_radius,
};
use protodisk::{DiskChemistryProfile, ElementRatios};
use rand::Rng;
use stellar::{StellarProperties, sample_gaussian};
use units::{Length, Mass};

use crate::axes::layout_semi_major_axes;
use crate::sampling::{
    sample_eccentricity, sample_inclination, sample_planet_count, sample_uniform, solids_budget,
};

/// Upper bound on planets per star
pub const MAX_PLANETS: usize = 12;

/// Smallest mass a planet is drawn with (Earth masses)
const MIN_PLANET_MASS: f64 = 0.05;
/// Largest single-planet mass guess (Earth masses)
const MAX_PLANET_MASS: f64 = 700.0;
/// A draw at or below this mass means the budget is spent
const HALT_MASS: f64 = 0.04;
/// Stop once less than this fraction of the budget remains
const HALT_FRACTION: f64 = 0.08;

/// The parts of a star the generator needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostContext {
    pub id: StarId,
    /// Current (post-evolution) stellar mass
    pub mass: Mass,
    /// Outer limit for planetary orbits
    pub lock_radius: Length,
}

impl HostContext {
    pub fn new(id: StarId, star: &StellarProperties) -> Self {
        Self {
            id,
            mass: star.current_mass,
            lock_radius: star.gravitational_lock_radius,
        }
    }
}

/// Generate planets named after their id (`"<star>-p<n>"`).
pub fn generate_planets<R: Rng>(
    host: &HostContext,
    chemistry: &DiskChemistryProfile,
    kinematics: &KinematicsConfig,
    rng: &mut R,
) -> Vec<Planet> {
    generate_planets_with_names(host, chemistry, kinematics, rng, |id, _| id.to_string())
}

/// Generate the planets of one star.
///
/// `name` is called once per instantiated planet, in order, with the same RNG
/// so a seeded generator reproduces names too.
pub fn generate_planets_with_names<R: Rng>(
    host: &HostContext,
    chemistry: &DiskChemistryProfile,
    kinematics: &KinematicsConfig,
    rng: &mut R,
    mut name: impl FnMut(PlanetId, &mut R) -> String,
) -> Vec<Planet> {
    let budget = solids_budget(rng, chemistry.disk.dust);
    let count = sample_planet_count(rng, budget);
    let axes = layout_semi_major_axes(rng, count, host.lock_radius.to_au());

    debug!(
        "star {}: lock radius {:.2} AU, solids budget {:.2} M⊕, {} axes {:?}",
        host.id,
        host.lock_radius.to_au(),
        budget,
        axes.len(),
        axes
    );

    let ratios = chemistry.element_ratios;
    let mut remaining = budget;
    let mut planets = Vec::with_capacity(axes.len());

    for (i, &formation_axis) in axes.iter().take(MAX_PLANETS).enumerate() {
        let zone = FormationZone::classify(Length::from_au(formation_axis), &chemistry.zones);

        // Inner planets run small; beyond the lines cores can grow bigger
        let guess = (10f64.powf(sample_uniform(rng, -0.7, 1.3)) * zone.solids_boost())
            .clamp(MIN_PLANET_MASS, MAX_PLANET_MASS);
        let mass_earth = guess
            .min(remaining * sample_uniform(rng, 0.08, 0.28))
            .max(MIN_PLANET_MASS)
            .min(remaining);
        remaining = (remaining - mass_earth).max(0.0);
        if mass_earth <= HALT_MASS {
            break;
        }

        let (core, water) = sample_core_and_water(rng, &zone, &ratios);
        let planet_type = PlanetType::classify(mass_earth, &zone);
        let final_axis = migrate(rng, formation_axis, planet_type, chemistry, host.mass);

        // Volatiles are lost when a planet ends up inside the snow line
        let water = if final_axis < chemistry.zones.snow_line.to_au() {
            water * 0.35
        } else {
            water
        };

        let structure = PlanetStructure::sample(planet_type, mass_earth, water, core, rng);
        let eccentricity = sample_eccentricity(rng);
        let inclination = sample_inclination(rng);

        let id = PlanetId::new(host.id, i as u32 + 1);
        let planet_name = name(id, rng);
        let phase = rng.random::<f64>() * TAU;

        let mass = Mass::from_earth_masses(mass_earth);
        let semi_major_axis = Length::from_au(final_axis);

        planets.push(Planet {
            id,
            star_id: host.id,
            name: planet_name,
            planet_type,
            mass,
            structure,
            composition: Composition {
                core,
                water: water.clamp(0.0, 0.95),
                atmosphere: structure.atmosphere_fraction,
            },
            orbit: CircularOrbit::new(semi_major_axis, host.mass, phase, kinematics),
            initial_semi_major_axis: Length::from_au(formation_axis),
            eccentricity,
            inclination,
            formation_zone: zone,
            migrated: final_axis != formation_axis,
            element_ratios: ratios,
            lock_radius: hill_radius(semi_major_axis, mass, host.mass),
            position: Point2::origin(),
            projections: Vec::new(),
        });

        if remaining < budget * HALT_FRACTION {
            break;
        }
    }

    debug!("star {}: {} planets generated", host.id, planets.len());
    planets
}

/// Core fraction tracks Fe/Mg; water depends on where the planet formed.
fn sample_core_and_water(
    rng: &mut impl Rng,
    zone: &FormationZone,
    ratios: &ElementRatios,
) -> (f64, f64) {
    let fe_mg = ratios.fe_mg.clamp(0.5, 1.4);
    let mut core = sample_gaussian(rng, 0.28 + 0.18 * (fe_mg - 0.9), 0.05).clamp(0.15, 0.65);

    let water = if zone.inside_snow {
        0.0
    } else if zone.beyond_snow {
        (0.2 + 0.25 * rng.random::<f64>() + 0.08 * sample_gaussian(rng, 0.0, 1.0))
            .clamp(0.05, 0.75)
    } else {
        (0.4 + 0.35 * rng.random::<f64>() + 0.1 * sample_gaussian(rng, 0.0, 1.0)).clamp(0.15, 0.9)
    };

    // Reduced chemistry in carbon-rich disks favours metal inside the snow line
    if ratios.is_carbon_rich() && zone.inside_snow {
        core = (core + 0.03).clamp(0.15, 0.7);
    }

    (core, water)
}

/// Inward migration in a gas disk.
///
/// Giants migrate strongly (2-30×) with a probability that grows with disk gas
/// mass, and drift mildly otherwise. Sub-Neptunes sometimes drift. Gas disks are
/// normalized around 5% of the stellar mass.
fn migrate(
    rng: &mut impl Rng,
    axis: f64,
    planet_type: PlanetType,
    chemistry: &DiskChemistryProfile,
    star_mass: Mass,
) -> f64 {
    let gas_norm = (chemistry.disk.gas / (star_mass * 0.05)).clamp(0.0, 2.0);
    let p_strong = sample_gaussian(rng, 0.15 + 0.25 * gas_norm, 0.05).clamp(0.0, 0.8);

    if planet_type.is_giant() {
        if rng.random::<f64>() < p_strong {
            (axis / sample_uniform(rng, 2.0, 30.0)).max(0.03)
        } else {
            (axis / sample_uniform(rng, 1.1, 2.5)).max(0.05)
        }
    } else if planet_type.is_sub_neptune() && rng.random::<f64>() < 0.35 * gas_norm {
        (axis / sample_uniform(rng, 1.1, 3.0)).max(0.05)
    } else {
        axis
    }
}
