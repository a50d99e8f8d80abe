use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::element_ratios::{ElementRatios, metallicity_dex};

#[test]
fn test_metallicity_dex_is_zero_at_solar() {
    assert_relative_eq!(metallicity_dex(0.014), 0.0);
    assert_relative_eq!(metallicity_dex(0.14), 1.0, max_relative = 1e-12);
}

#[test]
fn test_sampled_ratios_stay_in_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for z in [1.0e-5, 0.001, 0.014, 0.03, 0.05] {
        for _ in 0..500 {
            let r = ElementRatios::sample(&mut rng, z);
            assert!((0.3..=1.2).contains(&r.c_o), "C/O {} out of range", r.c_o);
            assert!((0.7..=1.8).contains(&r.mg_si), "Mg/Si {} out of range", r.mg_si);
            assert!((0.5..=1.4).contains(&r.fe_mg), "Fe/Mg {} out of range", r.fe_mg);
        }
    }
}

#[test]
fn test_metal_poor_disks_are_alpha_enhanced_and_iron_poor() {
    let mean = |z: f64, seed: u64| {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let n = 2000;
        let (mut mg_si, mut fe_mg) = (0.0, 0.0);
        for _ in 0..n {
            let r = ElementRatios::sample(&mut rng, z);
            mg_si += r.mg_si;
            fe_mg += r.fe_mg;
        }
        (mg_si / n as f64, fe_mg / n as f64)
    };

    let (poor_mg_si, poor_fe_mg) = mean(0.0014, 1);
    let (solar_mg_si, solar_fe_mg) = mean(0.014, 2);

    assert!(poor_mg_si > solar_mg_si + 0.15);
    assert!(poor_fe_mg < solar_fe_mg - 0.15);
}

#[test]
fn test_carbon_rich_threshold() {
    let mut ratios = ElementRatios::solar();
    assert!(!ratios.is_carbon_rich());
    ratios.c_o = 0.85;
    assert!(ratios.is_carbon_rich());
}
