//! Scalar draws used by the generation pipeline.

use rand::Rng;
use stellar::sample_gaussian;
use units::Mass;

/// Smallest solids budget any disk is granted (Earth masses)
pub const MIN_SOLIDS_BUDGET: f64 = 0.5;

/// Sample log-uniformly between `lo` and `hi`
///
/// Works for `lo > hi` as well, returning a value between the two.
pub fn sample_log_uniform(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    let log_lo = lo.log10();
    let log_hi = hi.log10();
    10f64.powf(log_lo + rng.random::<f64>() * (log_hi - log_lo))
}

/// Sorted batch of log-uniform samples
pub fn sample_log_uniform_sorted(rng: &mut impl Rng, lo: f64, hi: f64, n: usize) -> Vec<f64> {
    let mut out: Vec<f64> = (0..n).map(|_| sample_log_uniform(rng, lo, hi)).collect();
    out.sort_by(f64::total_cmp);
    out
}

/// Uniform draw on [lo, hi)
pub fn sample_uniform(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    lo + rng.random::<f64>() * (hi - lo)
}

/// Solids available for planet building, in Earth masses
///
/// Only a fraction of the dust ends up in planets. The efficiency rises
/// gently with dust mass (0.05 per dex above 1e-4 M☉) and scatters by 0.06.
pub fn solids_budget(rng: &mut impl Rng, dust: Mass) -> f64 {
    let dust_solar = dust.to_solar_masses().max(0.0);
    let solids = dust.max(Mass::zero()).to_earth_masses();

    let efficiency = (sample_gaussian(rng, 0.10, 0.06)
        + 0.05 * (dust_solar.max(1.0e-6) / 1.0e-4).log10())
    .clamp(0.05, 0.35);

    (solids * efficiency).max(MIN_SOLIDS_BUDGET)
}

/// Number of planets to lay out, 3-12, growing with the solids budget
pub fn sample_planet_count(rng: &mut impl Rng, budget: f64) -> usize {
    let raw = (3.0 + rng.random::<f64>() * 7.0 + (budget + 1.0).log10()).floor();
    raw.clamp(3.0, 12.0) as usize
}

/// Orbital eccentricity: half-normal with σ = 0.08, capped at 0.35
pub fn sample_eccentricity(rng: &mut impl Rng) -> f64 {
    (sample_gaussian(rng, 0.0, 1.0).abs() * 0.08).clamp(0.0, 0.35)
}

/// Orbital inclination in degrees: half-normal with σ = 1.5°, capped at 8°
pub fn sample_inclination(rng: &mut impl Rng) -> f64 {
    (sample_gaussian(rng, 0.0, 1.0).abs() * 1.5).clamp(0.0, 8.0)
}
