use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use units::{Length, Mass};

use crate::scale::WorldScale;

/// Game-clock settings for orbital motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KinematicsConfig {
    /// Game seconds that pass per simulated year
    pub seconds_per_year: f64,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            seconds_per_year: 30.0,
        }
    }
}

/// Kepler's third law in solar units: P² = a³ / M
///
/// Axis is floored at 0.01 AU and mass at 0.1 M☉ so that remnants and
/// degenerate inputs still produce a finite period.
pub fn orbital_period_years(semi_major_axis: Length, star_mass: Mass) -> f64 {
    let a = semi_major_axis.to_au().max(0.01);
    let m = star_mass.to_solar_masses().max(0.1);
    (a * a * a / m).sqrt()
}

/// Reduce an angle into [0, 2π).
///
/// `rem_euclid` rounds tiny negative angles up to exactly 2π; those wrap to 0.
pub fn wrap_phase(theta: f64) -> f64 {
    let phase = theta.rem_euclid(TAU);
    if phase >= TAU { 0.0 } else { phase }
}

/// A circular orbit tracked by its phase angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularOrbit {
    pub semi_major_axis: Length,
    /// Phase angle θ in radians, kept in [0, 2π)
    pub phase: f64,
    /// Orbital period in game seconds
    pub period: f64,
}

impl CircularOrbit {
    pub fn new(
        semi_major_axis: Length,
        star_mass: Mass,
        phase: f64,
        kinematics: &KinematicsConfig,
    ) -> Self {
        let period = orbital_period_years(semi_major_axis, star_mass) * kinematics.seconds_per_year;
        Self {
            semi_major_axis,
            phase: wrap_phase(phase),
            period,
        }
    }

    /// ω = 2π / P, or zero for a non-positive period
    pub fn angular_velocity(&self) -> f64 {
        if self.period > 0.0 {
            TAU / self.period
        } else {
            0.0
        }
    }

    /// Advance the phase by `dt` game seconds.
    pub fn advance(&mut self, dt: f64) {
        self.phase = wrap_phase(self.phase + self.angular_velocity() * dt);
    }

    /// Offset from the star in world units
    pub fn offset(&self, scale: &WorldScale) -> Vector2<f64> {
        let r = scale.length_to_world(self.semi_major_axis);
        Vector2::new(self.phase.cos(), self.phase.sin()) * r
    }

    /// Canonical world position given the star's canonical position
    pub fn position_around(&self, center: Point2<f64>, scale: &WorldScale) -> Point2<f64> {
        center + self.offset(scale)
    }
}
