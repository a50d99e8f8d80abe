use nalgebra::Point2;
use orbits::{CircularOrbit, Projections, WorldScale, ZoomTable};
use protodisk::ElementRatios;
use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::formation_zone::FormationZone;
use crate::ids::{PlanetId, StarId};
use crate::planet_type::PlanetType;
use crate::structure::PlanetStructure;

/// Bulk mass fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub core: f64,
    pub water: f64,
    pub atmosphere: f64,
}

/// A generated planet.
///
/// Everything except the orbital phase and the coordinate caches is fixed at
/// generation. The parent is referenced by id only; the star owns its planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: PlanetId,
    pub star_id: StarId,
    pub name: String,
    pub planet_type: PlanetType,
    pub mass: Mass,
    pub structure: PlanetStructure,
    pub composition: Composition,
    /// Orbit after migration; `orbit.semi_major_axis` is the final axis
    pub orbit: CircularOrbit,
    /// Semi-major axis where the planet formed
    pub initial_semi_major_axis: Length,
    pub eccentricity: f64,
    /// Orbital inclination in degrees
    pub inclination: f64,
    pub formation_zone: FormationZone,
    pub migrated: bool,
    /// Disk element ratios at formation
    pub element_ratios: ElementRatios,
    /// Hill radius, used as the gravitational-lock radius
    pub lock_radius: Length,
    /// Canonical world position
    pub position: Point2<f64>,
    /// Cached coordinates, one per zoom level
    pub projections: Projections,
}

impl Planet {
    pub fn semi_major_axis(&self) -> Length {
        self.orbit.semi_major_axis
    }

    pub fn radius(&self) -> Length {
        self.structure.radius
    }

    /// Advance the orbit by `dt` game seconds and refresh the coordinate caches.
    ///
    /// The projection cache is rebuilt in full and swapped in with a single
    /// assignment, so readers never see a half-updated set of layers.
    pub fn advance(
        &mut self,
        dt: f64,
        center: Point2<f64>,
        scale: &WorldScale,
        zoom: &ZoomTable,
    ) {
        self.orbit.advance(dt);
        self.position = self.orbit.position_around(center, scale);
        self.projections = zoom.project(self.position);
    }
}

/// Radius of a planet's gravitational sphere of influence, a · ∛(m / 3M)
pub fn hill_radius(semi_major_axis: Length, planet_mass: Mass, star_mass: Mass) -> Length {
    let ratio = planet_mass / (star_mass * 3.0);
    semi_major_axis * ratio.max(0.0).cbrt()
}
