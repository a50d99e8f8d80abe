use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::axes::{
    INNER_EDGE_AU, cap_inner_orbits, enforce_inner_absolute_spacing, enforce_min_ratio,
    enforce_regional_spacing, layout_semi_major_axes, sample_semi_major_axes, spaced_band,
};

const TOLERANCE: f64 = 1e-9;

/// Checks the spacing guarantees of a finished axis list
fn assert_well_spaced(axes: &[f64], a_max: f64) {
    let inner = axes.iter().filter(|&&a| a < 1.0).count();
    assert!(inner <= 2, "{} planets inside 1 AU: {:?}", inner, axes);

    for pair in axes.windows(2) {
        let (prev, next) = (pair[0], pair[1]);
        assert!(next > prev, "Axes not strictly ascending: {:?}", axes);
        if prev < 1.0 {
            assert!(next - prev >= 0.3 - TOLERANCE, "Inner gap too small: {:?}", axes);
        } else {
            assert!(next / prev >= 1.25 - TOLERANCE, "Outer ratio too small: {:?}", axes);
        }
    }

    for &a in axes {
        assert!(a <= a_max + TOLERANCE, "Axis {} beyond outer edge {}", a, a_max);
    }
}

#[test]
fn test_spaced_band_stays_inside_band() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for n in 0..8 {
        let band = spaced_band(&mut rng, 0.8, 8.0, n, 1.35, 2.0);
        assert_eq!(band.len(), n);
        for pair in band.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for a in band {
            assert!((0.8..=8.0).contains(&a), "Axis {} outside band", a);
        }
    }
}

#[test]
fn test_band_sampling_respects_outer_edge() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for edge in [0.5, 2.0, 5.0, 23.2, 50.0, 150.0] {
        for count in 3..=12 {
            let axes = sample_semi_major_axes(&mut rng, count, edge);
            assert!(axes.len() <= count);
            for &a in &axes {
                assert!(a >= INNER_EDGE_AU - TOLERANCE && a <= edge + TOLERANCE);
            }
        }
    }
}

#[test]
fn test_wide_systems_populate_the_outer_band() {
    let mut rng = ChaChaRng::seed_from_u64(7);

    for _ in 0..50 {
        let axes = sample_semi_major_axes(&mut rng, 8, 50.0);
        let outer = axes.iter().filter(|&&a| a >= 8.0).count();
        assert!(outer >= 1, "No outer planets in {:?}", axes);
    }
}

#[test]
fn test_layout_is_ordered_and_spaced() {
    for seed in 0..200 {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        for edge in [23.2, 50.0, 68.4, 100.0] {
            let count = 3 + (seed as usize % 10);
            let axes = layout_semi_major_axes(&mut rng, count, edge);
            assert!(!axes.is_empty());
            assert_well_spaced(&axes, edge);
        }
    }
}

#[test]
fn test_spacing_passes_are_idempotent_on_valid_lists() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let valid = vec![0.2, 0.6, 1.2, 2.0, 3.5, 9.0, 30.0];

    assert_eq!(enforce_min_ratio(&valid, 1.22, 50.0), valid);
    assert_eq!(enforce_regional_spacing(&valid, 50.0), valid);
    assert_eq!(enforce_inner_absolute_spacing(&valid, 50.0), valid);
    assert_eq!(cap_inner_orbits(&mut rng, &valid, 50.0), valid);
}

#[test]
fn test_spacing_passes_sort_and_clip() {
    let axes = vec![5.0, 0.2, 0.25, 48.0];

    let spaced = enforce_inner_absolute_spacing(&axes, 40.0);
    assert_eq!(spaced.len(), 3);
    assert!((spaced[1] - 0.5).abs() < TOLERANCE);
    assert_eq!(spaced[2], 5.0);

    let regional = enforce_regional_spacing(&[0.5, 0.6, 1.0], 0.7);
    assert_eq!(regional, vec![0.5]);
}

#[test]
fn test_inner_cap_keeps_two_innermost() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let axes = vec![0.2, 0.4, 0.6, 0.8, 3.0];

    let capped = cap_inner_orbits(&mut rng, &axes, 50.0);
    assert_eq!(capped[0], 0.2);
    assert_eq!(capped[1], 0.4);
    assert!(capped.iter().filter(|&&a| a < 1.0).count() <= 2);
}
