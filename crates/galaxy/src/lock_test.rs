use nalgebra::Point2;
use orbits::{KinematicsConfig, WorldScale, ZoomTable};
use planetary::StarId;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::StellarProperties;

use crate::lock::{CameraLock, LockConfig, LockEvent, LockState};
use crate::names::NameGenerator;
use crate::star::{Star, StarContext};

fn lock() -> CameraLock {
    CameraLock::new(LockConfig::default())
}

#[test]
fn test_starts_free() {
    let lock = lock();
    assert_eq!(lock.state(), LockState::Free);
    assert_eq!(lock.zoom_level(), 0);
}

#[test]
fn test_locks_inside_lock_distance() {
    let mut lock = lock();
    assert_eq!(lock.step(0.1, Some((StarId(4), 150.0)), None), None);
    assert_eq!(
        lock.step(0.1, Some((StarId(4), 80.0)), None),
        Some(LockEvent::Locked(StarId(4)))
    );
    assert_eq!(lock.locked_star(), Some(StarId(4)));
    assert_eq!(lock.zoom_level(), 1);
}

#[test]
fn test_release_needs_sustained_distance() {
    let mut lock = lock();
    lock.step(0.0, Some((StarId(1), 10.0)), None);

    // 4 s outside, then back inside: timer resets
    for _ in 0..4 {
        assert_eq!(lock.step(1.0, None, Some(2000.0)), None);
    }
    assert_eq!(lock.step(1.0, None, Some(500.0)), None);
    assert_eq!(
        lock.state(),
        LockState::Locked {
            star: StarId(1),
            outside_for: 0.0
        }
    );

    for _ in 0..4 {
        assert_eq!(lock.step(1.0, None, Some(2000.0)), None);
    }
    assert_eq!(
        lock.step(1.0, None, Some(2000.0)),
        Some(LockEvent::Released(StarId(1)))
    );
    assert_eq!(lock.state(), LockState::Free);
}

#[test]
fn test_between_lock_and_release_distance_stays_locked() {
    let mut lock = lock();
    lock.step(0.0, Some((StarId(2), 50.0)), None);
    for _ in 0..100 {
        assert_eq!(lock.step(1.0, None, Some(900.0)), None);
    }
    assert_eq!(lock.locked_star(), Some(StarId(2)));
}

#[test]
fn test_missing_locked_star_releases() {
    let mut lock = lock();
    lock.step(0.0, Some((StarId(3), 50.0)), None);
    assert_eq!(
        lock.step(0.1, None, None),
        Some(LockEvent::Released(StarId(3)))
    );
}

// =============================================================================
// Distances from star positions
// =============================================================================

fn star_at(id: u32, position: Point2<f64>) -> Star {
    let scale = WorldScale::default();
    let zoom = ZoomTable::default();
    let kinematics = KinematicsConfig::default();
    let names = NameGenerator::new();
    let ctx = StarContext {
        scale: &scale,
        zoom: &zoom,
        kinematics: &kinematics,
        names: &names,
    };
    let mut rng = ChaChaRng::seed_from_u64(u64::from(id));
    Star::generate(
        StarId(id),
        format!("Star {id}"),
        StellarProperties::solar_analog(),
        position,
        &ctx,
        &mut rng,
    )
}

#[test]
fn test_update_locks_onto_nearest_star_in_base_layer() {
    let stars = [
        star_at(1, Point2::new(0.0, 0.0)),
        star_at(2, Point2::new(5000.0, 0.0)),
    ];
    let zoom = ZoomTable::default();
    let mut lock = lock();

    assert_eq!(lock.update(0.1, Point2::new(4850.0, 0.0), &stars, &zoom), None);
    assert_eq!(
        lock.update(0.1, Point2::new(4950.0, 0.0), &stars, &zoom),
        Some(LockEvent::Locked(StarId(2)))
    );
}

#[test]
fn test_release_is_measured_in_the_magnified_layer() {
    let stars = [star_at(1, Point2::origin())];
    let zoom = ZoomTable::default();
    let mut lock = lock();
    lock.update(0.0, Point2::new(50.0, 0.0), &stars, &zoom);
    assert_eq!(lock.layer_factor(&zoom), 10.0);

    // 90 canonical units is 900 in the locked layer: still inside
    for _ in 0..10 {
        assert_eq!(lock.update(1.0, Point2::new(90.0, 0.0), &stars, &zoom), None);
    }
    assert_eq!(lock.locked_star(), Some(StarId(1)));

    // 150 canonical units is 1500 in the locked layer: outside
    for _ in 0..4 {
        assert_eq!(lock.update(1.0, Point2::new(150.0, 0.0), &stars, &zoom), None);
    }
    assert_eq!(
        lock.update(1.0, Point2::new(150.0, 0.0), &stars, &zoom),
        Some(LockEvent::Released(StarId(1)))
    );
    assert_eq!(lock.layer_factor(&zoom), 1.0);
}
