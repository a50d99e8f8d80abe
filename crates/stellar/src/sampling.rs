use std::f64::consts::PI;

use rand::Rng;
use units::time::UNIVERSE_AGE_YEARS;
use units::{Mass, Time};

use crate::properties::{MAX_METALLICITY, MIN_METALLICITY, SOLAR_METALLICITY};

/// Hydrogen-burning limit, lower edge of the IMF
pub const IMF_MIN_MASS: f64 = 0.08;
/// Break between the two Kroupa segments
pub const IMF_BREAK_MASS: f64 = 0.5;
/// Default upper mass limit for field stars
pub const IMF_DEFAULT_MAX_MASS: f64 = 50.0;

const KROUPA_LOW_ALPHA: f64 = 1.3;
const KROUPA_HIGH_ALPHA: f64 = 2.3;

/// Spread of the metallicity distribution, in dex
const METALLICITY_SPREAD_DEX: f64 = 0.3;

/// Draw a standard normal deviate N(0, 1) with the Box-Muller transform
pub fn sample_standard_normal(rng: &mut impl Rng) -> f64 {
    // 1 - U keeps the logarithm finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Sample from a Gaussian (normal) distribution using Box-Muller transform
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    mean + std_dev * sample_standard_normal(rng)
}

/// ∫ M^-α dM over [lo, hi], for α ≠ 1
fn power_law_integral(lo: f64, hi: f64, alpha: f64) -> f64 {
    (hi.powf(1.0 - alpha) - lo.powf(1.0 - alpha)) / (1.0 - alpha)
}

/// Invert the cumulative integral of M^-α starting at `lo`
fn invert_power_law(lo: f64, integral: f64, alpha: f64) -> f64 {
    let base = lo.powf(1.0 - alpha) + integral * (1.0 - alpha);
    base.powf(1.0 / (1.0 - alpha))
}

/// Sample an initial stellar mass from the Kroupa (2001) IMF
///
/// dN/dM ∝ M^-α with α = 1.3 on 0.08-0.5 M☉ and α = 2.3 on 0.5-`max_mass`.
/// The segment is chosen by its exact integral weight and the mass is then
/// recovered by inverting that segment's cumulative distribution, so the draw
/// is continuous across the break.
///
/// `max_mass` below the break collapses the distribution onto the low-mass
/// segment.
pub fn sample_initial_mass(rng: &mut impl Rng, max_mass: f64) -> Mass {
    let m_max = max_mass.max(IMF_MIN_MASS);
    let m_break = IMF_BREAK_MASS.min(m_max);

    let w1 = power_law_integral(IMF_MIN_MASS, m_break, KROUPA_LOW_ALPHA);
    let w2 = power_law_integral(m_break, m_max, KROUPA_HIGH_ALPHA);
    let u = rng.random::<f64>() * (w1 + w2);

    let mass = if u < w1 {
        invert_power_law(IMF_MIN_MASS, u, KROUPA_LOW_ALPHA)
    } else {
        invert_power_law(m_break, u - w1, KROUPA_HIGH_ALPHA)
    };

    Mass::from_solar_masses(mass.clamp(IMF_MIN_MASS, m_max))
}

/// Sample the metal mass fraction Z of a field star
///
/// Log-normal around the solar value: Z = 0.014 · 10^(0.3 N), clamped to
/// [1e-5, 0.05].
pub fn sample_metallicity(rng: &mut impl Rng) -> f64 {
    let dex = METALLICITY_SPREAD_DEX * sample_standard_normal(rng);
    (SOLAR_METALLICITY * 10f64.powf(dex)).clamp(MIN_METALLICITY, MAX_METALLICITY)
}

/// Sample a stellar age uniformly over the age of the universe, [0, 13.8 Gyr)
pub fn sample_age(rng: &mut impl Rng) -> Time {
    Time::from_years(rng.random::<f64>() * UNIVERSE_AGE_YEARS)
}
