//! Flat, read-only view over every body in a galaxy.

use std::fmt;

use nalgebra::Point2;
use planetary::{Planet, PlanetId, StarId};
use serde::Serialize;
use units::Length;

use crate::star::Star;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyKind {
    Star,
    Planet,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
        };
        write!(f, "{}", str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyId {
    Star(StarId),
    Planet(PlanetId),
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BodyId::Star(id) => write!(f, "{}", id),
            BodyId::Planet(id) => write!(f, "{}", id),
        }
    }
}

/// A borrowed star or planet.
#[derive(Debug, Clone, Copy)]
pub enum BodyRef<'a> {
    Star(&'a Star),
    Planet(&'a Planet),
}

impl<'a> BodyRef<'a> {
    pub fn kind(&self) -> BodyKind {
        match self {
            BodyRef::Star(_) => BodyKind::Star,
            BodyRef::Planet(_) => BodyKind::Planet,
        }
    }

    pub fn id(&self) -> BodyId {
        match self {
            BodyRef::Star(s) => BodyId::Star(s.id),
            BodyRef::Planet(p) => BodyId::Planet(p.id),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            BodyRef::Star(s) => &s.name,
            BodyRef::Planet(p) => &p.name,
        }
    }

    /// Canonical world position
    pub fn position(&self) -> Point2<f64> {
        match self {
            BodyRef::Star(s) => s.position,
            BodyRef::Planet(p) => p.position,
        }
    }

    /// Cached coordinates, one per zoom level
    pub fn projections(&self) -> &'a [Point2<f64>] {
        match self {
            BodyRef::Star(s) => &s.projections,
            BodyRef::Planet(p) => &p.projections,
        }
    }

    /// Physical radius: R☉ for stars, R⊕ for planets
    pub fn radius(&self) -> f64 {
        match self {
            BodyRef::Star(s) => s.properties.radius,
            BodyRef::Planet(p) => p.radius().to_earth_radii(),
        }
    }

    /// Stars: gravitational-lock radius. Planets: Hill radius.
    pub fn lock_radius(&self) -> Length {
        match self {
            BodyRef::Star(s) => s.lock_radius(),
            BodyRef::Planet(p) => p.lock_radius,
        }
    }

    /// Owning star for planets
    pub fn star_id(&self) -> Option<StarId> {
        match self {
            BodyRef::Star(_) => None,
            BodyRef::Planet(p) => Some(p.star_id),
        }
    }

    /// Spectral class for stars, type tag for planets
    pub fn class_label(&self) -> String {
        match self {
            BodyRef::Star(s) => s.properties.spectral_class.to_string(),
            BodyRef::Planet(p) => p.planet_type.to_string(),
        }
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            kind: self.kind(),
            id: self.id().to_string(),
            name: self.name().to_string(),
            class: self.class_label(),
            position: [self.position().x, self.position().y],
            projections: self.projections().iter().map(|p| [p.x, p.y]).collect(),
            radius: self.radius(),
            lock_radius_au: self.lock_radius().to_au(),
            star_id: self.star_id().map(|id| id.0),
        }
    }
}

/// Owned, serializable copy of a [`BodyRef`] for renderers and JS callers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub kind: BodyKind,
    /// `"7"` for stars, `"7-p2"` for planets
    pub id: String,
    pub name: String,
    pub class: String,
    /// Canonical [x, y] in world units
    pub position: [f64; 2],
    /// [x, y] per zoom level
    pub projections: Vec<[f64; 2]>,
    /// R☉ for stars, R⊕ for planets
    pub radius: f64,
    pub lock_radius_au: f64,
    pub star_id: Option<u32>,
}
