use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use nalgebra::Point2;
use units::{Length, Mass};

use crate::orbit::{CircularOrbit, KinematicsConfig, orbital_period_years, wrap_phase};
use crate::scale::WorldScale;

fn earth_orbit(phase: f64) -> CircularOrbit {
    CircularOrbit::new(
        Length::from_au(1.0),
        Mass::from_solar_masses(1.0),
        phase,
        &KinematicsConfig::default(),
    )
}

#[test]
fn test_period_follows_kepler() {
    assert_relative_eq!(
        orbital_period_years(Length::from_au(1.0), Mass::from_solar_masses(1.0)),
        1.0
    );
    assert_relative_eq!(
        orbital_period_years(Length::from_au(4.0), Mass::from_solar_masses(1.0)),
        8.0
    );
    // Floors keep degenerate inputs finite
    assert_relative_eq!(
        orbital_period_years(Length::zero(), Mass::zero()),
        (1.0e-6f64 / 0.1).sqrt(),
        max_relative = 1e-12
    );
}

#[test]
fn test_period_uses_game_seconds_per_year() {
    let orbit = earth_orbit(0.0);
    assert_relative_eq!(orbit.period, 30.0);
    assert_relative_eq!(orbit.angular_velocity(), TAU / 30.0);
}

#[test]
fn test_zero_dt_leaves_phase_unchanged() {
    let mut orbit = earth_orbit(1.25);
    let before = orbit;
    orbit.advance(0.0);
    assert_eq!(orbit, before);
}

#[test]
fn test_full_period_returns_to_start() {
    let mut orbit = earth_orbit(1.0);
    orbit.advance(orbit.period);
    assert_relative_eq!(orbit.phase, 1.0, epsilon = 1e-9);

    let mut stepped = earth_orbit(1.0);
    for _ in 0..300 {
        stepped.advance(stepped.period / 300.0);
    }
    assert_relative_eq!(stepped.phase, 1.0, epsilon = 1e-9);
}

#[test]
fn test_phase_wraps_into_range() {
    let mut orbit = earth_orbit(TAU - 0.1);
    orbit.advance(orbit.period / 4.0);
    assert!(orbit.phase >= 0.0 && orbit.phase < TAU);
    assert_relative_eq!(orbit.phase, PI / 2.0 - 0.1, epsilon = 1e-9);

    let negative = earth_orbit(-PI / 2.0);
    assert_relative_eq!(negative.phase, 1.5 * PI, max_relative = 1e-12);
}

#[test]
fn test_tiny_negative_phase_stays_below_tau() {
    // -1e-17 + 2π rounds to exactly 2π
    assert_eq!((-1.0e-17f64).rem_euclid(TAU), TAU);
    assert_eq!(wrap_phase(-1.0e-17), 0.0);

    let orbit = earth_orbit(-1.0e-17);
    assert!(orbit.phase < TAU);

    let mut backwards = earth_orbit(0.0);
    backwards.advance(-1.0e-15);
    assert!(backwards.phase >= 0.0 && backwards.phase < TAU);
}

#[test]
fn test_position_is_offset_from_star() {
    let scale = WorldScale::default();
    let orbit = earth_orbit(0.0);
    let star = Point2::new(1000.0, -500.0);

    let p = orbit.position_around(star, &scale);
    assert_relative_eq!(p.x, 1000.0 + scale.au_to_world());
    assert_relative_eq!(p.y, -500.0);

    let quarter = earth_orbit(PI / 2.0);
    let q = quarter.position_around(star, &scale);
    assert_relative_eq!(q.x, 1000.0, epsilon = 1e-9);
    assert_relative_eq!(q.y, -500.0 + scale.au_to_world(), max_relative = 1e-12);
}
