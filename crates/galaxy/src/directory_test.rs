use planetary::StarId;

use crate::body::{BodyKind, BodyRef};
use crate::config::GalaxyConfig;
use crate::directory::GalaxyDirectory;
use crate::placement::galaxy_radius;

fn small(seed: u64) -> GalaxyDirectory {
    GalaxyDirectory::with_seed(seed, GalaxyConfig::with_star_count(12))
}

#[test]
fn test_directory_is_empty_until_first_advance() {
    let mut galaxy = small(1);
    assert!(!galaxy.is_populated());
    assert_eq!(galaxy.body_count(), 0);
    assert_eq!(galaxy.galaxy_radius(), None);

    galaxy.advance(0.0);
    assert!(galaxy.is_populated());
    assert_eq!(galaxy.stars().len(), 12);
    assert!(galaxy.galaxy_radius().is_some());
}

#[test]
fn test_star_ids_count_from_one() {
    let mut galaxy = small(2);
    galaxy.advance(0.0);

    for (i, star) in galaxy.stars().iter().enumerate() {
        assert_eq!(star.id, StarId(i as u32 + 1));
    }
    assert!(galaxy.star(StarId(0)).is_none());
    assert!(galaxy.star(StarId(13)).is_none());
    assert_eq!(galaxy.star(StarId(5)).map(|s| s.id), Some(StarId(5)));
}

#[test]
fn test_bodies_list_each_star_before_its_planets() {
    let mut galaxy = small(3);
    galaxy.advance(0.0);

    let bodies: Vec<BodyRef<'_>> = galaxy.bodies().collect();
    assert_eq!(bodies.len(), galaxy.body_count());

    let mut current = None;
    let mut next_index = 1;
    for body in &bodies {
        match body {
            BodyRef::Star(star) => {
                current = Some(star.id);
                next_index = 1;
                assert_eq!(body.star_id(), None);
            }
            BodyRef::Planet(planet) => {
                assert_eq!(Some(planet.star_id), current);
                assert_eq!(planet.id.index, next_index);
                assert_eq!(body.kind(), BodyKind::Planet);
                next_index += 1;
            }
        }
    }
}

#[test]
fn test_zero_star_target_uses_minimum_radius() {
    let mut galaxy = GalaxyDirectory::with_seed(4, GalaxyConfig::with_star_count(0));
    galaxy.advance(0.0);
    assert_eq!(galaxy.body_count(), 0);
    assert_eq!(galaxy.galaxy_radius(), Some(12.0));

    for _ in 0..5 {
        galaxy.spawn_star();
    }
    assert_eq!(galaxy.stars()[0].id, StarId(1));
    assert_eq!(galaxy.stars().len(), 5);
    assert_eq!(galaxy.galaxy_radius(), Some(12.0));
}

#[test]
fn test_spawning_before_populate_fixes_radius_from_target() {
    let mut galaxy = GalaxyDirectory::with_seed(6, GalaxyConfig::with_star_count(2000));
    let (id, _) = galaxy.spawn_star();
    assert_eq!(id, StarId(1));

    let expected = galaxy_radius(2000, &galaxy.config().placement);
    assert_eq!(galaxy.galaxy_radius(), Some(expected));
    assert!(expected > 12.0);
}

#[test]
fn test_named_sessions_match() {
    let a = GalaxyDirectory::named("kepler", GalaxyConfig::default());
    let b = GalaxyDirectory::named("kepler", GalaxyConfig::default());
    let c = GalaxyDirectory::named("tycho", GalaxyConfig::default());

    assert_eq!(a.session_id(), b.session_id());
    assert_eq!(a.seed(), b.seed());
    assert_ne!(a.session_id(), c.session_id());
}

#[test]
fn test_with_seed_reports_its_seed() {
    let galaxy = GalaxyDirectory::with_seed(0xDEAD_BEEF, GalaxyConfig::default());
    assert_eq!(galaxy.seed(), 0xDEAD_BEEF);
}

#[test]
fn test_zoom_factors_come_from_config() {
    let galaxy = small(5);
    assert_eq!(galaxy.zoom_factors(), &[1.0, 10.0, 50.0]);
}
