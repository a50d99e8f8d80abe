use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::planet_type::PlanetType;
use crate::structure::{PlanetStructure, density, rocky_radius};

const ALL_TYPES: [PlanetType; 7] = [
    PlanetType::Rocky,
    PlanetType::IronRich,
    PlanetType::Ice,
    PlanetType::WaterWorld,
    PlanetType::DwarfGas,
    PlanetType::IceGiant,
    PlanetType::GasGiant,
];

#[test]
fn test_rocky_radius_power_law() {
    assert_relative_eq!(rocky_radius(1.0), 1.0);
    assert_relative_eq!(rocky_radius(0.0), 0.05f64.powf(0.27));
}

#[test]
fn test_radii_stay_in_type_ranges() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..200 {
        for (planet_type, mass) in [
            (PlanetType::Rocky, 0.8),
            (PlanetType::IronRich, 1.5),
            (PlanetType::Ice, 1.0),
            (PlanetType::WaterWorld, 6.0),
            (PlanetType::DwarfGas, 4.0),
            (PlanetType::IceGiant, 20.0),
            (PlanetType::GasGiant, 300.0),
        ] {
            let s = PlanetStructure::sample(planet_type, mass, 0.1, 0.3, &mut rng);
            let r = s.radius.to_earth_radii();
            let (lo, hi) = match planet_type {
                PlanetType::GasGiant => (0.7 * 11.21, 1.3 * 11.21),
                PlanetType::IceGiant => (2.2, 5.0),
                PlanetType::DwarfGas | PlanetType::WaterWorld => (1.6, 5.0),
                _ => (0.3, 2.3),
            };
            assert!(
                r >= lo - 1e-9 && r <= hi + 1e-9,
                "{} radius {} outside [{}, {}]",
                planet_type,
                r,
                lo,
                hi
            );
            assert_eq!(s.jupiter_radius.is_some(), planet_type == PlanetType::GasGiant);
        }
    }
}

#[test]
fn test_density_is_clamped_for_all_types() {
    let mut rng = ChaChaRng::seed_from_u64(7);

    for planet_type in ALL_TYPES {
        for _ in 0..200 {
            let rho = density(planet_type, 0.9, 0.65, &mut rng);
            assert!((0.5..=12.0).contains(&rho));
        }
    }
}

#[test]
fn test_water_lowers_density() {
    let mut dry_rng = ChaChaRng::seed_from_u64(11);
    let mut wet_rng = ChaChaRng::seed_from_u64(11);

    let dry = density(PlanetType::Rocky, 0.0, 0.3, &mut dry_rng);
    let wet = density(PlanetType::Rocky, 0.6, 0.3, &mut wet_rng);
    assert_relative_eq!(wet / dry, 0.7, max_relative = 1e-12);
}

#[test]
fn test_only_gaseous_types_have_atmospheres() {
    let mut rng = ChaChaRng::seed_from_u64(5);

    for planet_type in ALL_TYPES {
        let s = PlanetStructure::sample(planet_type, 20.0, 0.1, 0.3, &mut rng);
        let atm = s.atmosphere_fraction;
        match planet_type {
            PlanetType::DwarfGas => assert!((0.01..0.05).contains(&atm)),
            PlanetType::IceGiant => assert!((0.08..0.18).contains(&atm)),
            PlanetType::GasGiant => assert!((0.70..0.90).contains(&atm)),
            _ => assert_eq!(atm, 0.0),
        }
    }
}
