//! A star and the planets it owns.

use log::debug;
use nalgebra::Point2;
use orbits::{KinematicsConfig, Projections, WorldScale, ZoomTable};
use planetary::{Planet, StarId};
use planetary_generator::{HostContext, generate_planets_with_names};
use protodisk::DiskChemistryProfile;
use rand::Rng;
use serde::Serialize;
use stellar::{StellarPhase, StellarProperties};
use units::Length;

use crate::names::NameGenerator;

/// A generated star system.
///
/// Stellar properties, disk chemistry and planets are produced once by
/// [`Star::generate`]. Afterwards only the planets' orbital phases and
/// coordinate caches change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub id: StarId,
    pub name: String,
    pub properties: StellarProperties,
    pub chemistry: DiskChemistryProfile,
    /// Canonical world position
    pub position: Point2<f64>,
    /// Cached coordinates, one per zoom level
    pub projections: Projections,
    /// Planets in formation order
    pub planets: Vec<Planet>,
}

/// Everything a star needs from its galaxy at construction time
#[derive(Debug, Clone, Copy)]
pub struct StarContext<'a> {
    pub scale: &'a WorldScale,
    pub zoom: &'a ZoomTable,
    pub kinematics: &'a KinematicsConfig,
    pub names: &'a NameGenerator,
}

impl Star {
    /// Build a star at `position`: roll its disk chemistry, generate its
    /// planets and place them on their orbits.
    pub fn generate<R: Rng>(
        id: StarId,
        name: String,
        properties: StellarProperties,
        position: Point2<f64>,
        ctx: &StarContext<'_>,
        rng: &mut R,
    ) -> Self {
        let chemistry = DiskChemistryProfile::generate(&properties, rng);
        let host = HostContext::new(id, &properties);
        let names = ctx.names;
        let planets =
            generate_planets_with_names(&host, &chemistry, ctx.kinematics, rng, |_, rng| {
                names.generate(rng)
            });

        debug!(
            "star {} '{}': {} {} M☉, {} planets",
            id,
            name,
            properties.phase,
            properties.current_mass.to_solar_masses(),
            planets.len()
        );

        let mut star = Self {
            id,
            name,
            properties,
            chemistry,
            position,
            projections: ctx.zoom.project(position),
            planets,
        };
        star.advance(0.0, ctx.scale, ctx.zoom);
        star
    }

    pub fn phase(&self) -> StellarPhase {
        self.properties.phase
    }

    pub fn lock_radius(&self) -> Length {
        self.properties.gravitational_lock_radius
    }

    /// Advance every planet by `dt` game seconds.
    pub fn advance(&mut self, dt: f64, scale: &WorldScale, zoom: &ZoomTable) {
        let center = self.position;
        for planet in &mut self.planets {
            planet.advance(dt, center, scale, zoom);
        }
    }
}
