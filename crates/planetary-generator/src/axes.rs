//! Semi-major axis layout.
//!
//! Axes are first drawn in up to three radial bands with band-specific
//! spacing ratios, then pushed through a series of spacing passes. Every pass
//! sorts its input, only ever moves an axis outward, and drops axes that end up
//! beyond the outer edge, so each pass leaves an already valid list untouched.

use rand::Rng;

use crate::sampling::{sample_log_uniform, sample_log_uniform_sorted, sample_uniform};

/// Innermost formation distance (AU)
pub const INNER_EDGE_AU: f64 = 0.15;
/// Outer edge is never smaller than this (AU)
pub const MIN_OUTER_EDGE_AU: f64 = 0.5;
/// Systems with a smaller outer edge use a single band
pub const SINGLE_BAND_EDGE_AU: f64 = 2.5;
/// Boundary of the crowded inner system (AU)
pub const INNER_SYSTEM_AU: f64 = 1.0;
/// At most this many planets inside `INNER_SYSTEM_AU`
pub const MAX_INNER_PLANETS: usize = 2;
/// Minimum gap between neighbours while inside the inner system (AU)
pub const MIN_INNER_GAP_AU: f64 = 0.3;
/// Minimum period-ratio-like spacing once outside the inner system
pub const MIN_OUTER_RATIO: f64 = 1.25;
/// Ratio enforced across band boundaries and after resampling
pub const GLOBAL_RATIO: f64 = 1.22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BandKind {
    Inner,
    Mid,
    Outer,
}

#[derive(Debug, Clone, Copy)]
struct Band {
    kind: BandKind,
    lo: f64,
    hi: f64,
}

impl Band {
    fn new(kind: BandKind, lo: f64, hi: f64) -> Self {
        Self { kind, lo, hi }
    }

    /// Multiplicative spacing range between neighbours
    fn ratios(&self) -> (f64, f64) {
        match self.kind {
            BandKind::Inner => (1.25, 1.7),
            BandKind::Mid => (1.35, 2.0),
            BandKind::Outer => (1.6, 2.6),
        }
    }
}

fn sort_axes(axes: &mut [f64]) {
    axes.sort_by(f64::total_cmp);
}

/// Lay out `n` axes in [lo, hi] with multiplicative spacing.
///
/// Starts log-uniform near the bottom of the band and grows by a random ratio
/// in `[ratio_min, ratio_max)`. When the chain overshoots the band, the
/// remaining axes are scattered log-uniformly above the last one.
pub fn spaced_band(
    rng: &mut impl Rng,
    lo: f64,
    hi: f64,
    n: usize,
    ratio_min: f64,
    ratio_max: f64,
) -> Vec<f64> {
    match n {
        0 => return Vec::new(),
        1 => return vec![sample_log_uniform(rng, lo, hi)],
        _ => {}
    }

    let mut a = sample_log_uniform(rng, lo, hi.min(lo * 3.0));
    let mut out = vec![a];

    for i in 1..n {
        a *= sample_uniform(rng, ratio_min, ratio_max);

        if a >= hi {
            let last = out[out.len() - 1];
            out.extend(sample_log_uniform_sorted(rng, last * 1.15, hi, n - i));
            break;
        }

        out.push(a);
    }

    let mut out: Vec<f64> = out.into_iter().map(|x| x.max(lo).min(hi)).collect();
    sort_axes(&mut out);
    out
}

/// Sample `count` formation axes out to `outer_edge`.
///
/// Wide systems split into inner, mid and outer bands holding roughly 45%,
/// 35% and the remainder of the planets; wide systems are guaranteed some
/// outer planets. The merged list gets a global 1.22 spacing pass.
pub fn sample_semi_major_axes(rng: &mut impl Rng, count: usize, outer_edge: f64) -> Vec<f64> {
    let a_max = outer_edge.max(MIN_OUTER_EDGE_AU);

    if a_max < SINGLE_BAND_EDGE_AU {
        return spaced_band(rng, INNER_EDGE_AU, a_max, count, 1.35, 1.9);
    }

    let inner_max = (a_max * 0.22).min(0.8);
    let mid_max = (a_max * 0.65).min(8.0);

    let bands: Vec<Band> = [
        Band::new(BandKind::Inner, INNER_EDGE_AU, inner_max),
        Band::new(BandKind::Mid, inner_max, mid_max),
        Band::new(BandKind::Outer, mid_max, a_max),
    ]
    .into_iter()
    .filter(|b| b.hi > b.lo * 1.05)
    .collect();

    let (n_inner, n_mid, n_outer) = band_counts(count, a_max);

    let mut out = Vec::with_capacity(count);
    for band in &bands {
        let n = match band.kind {
            BandKind::Inner => n_inner,
            BandKind::Mid => n_mid,
            BandKind::Outer => n_outer,
        };
        let (ratio_min, ratio_max) = band.ratios();
        out.extend(spaced_band(rng, band.lo, band.hi, n, ratio_min, ratio_max));
    }

    sort_axes(&mut out);
    enforce_min_ratio(&out, GLOBAL_RATIO, a_max)
}

/// Split `count` planets across the inner, mid and outer bands.
fn band_counts(count: usize, a_max: f64) -> (usize, usize, usize) {
    let total = count as i64;
    let mut n_inner = (count as f64 * 0.45).round() as i64;
    let mut n_mid = (count as f64 * 0.35).round() as i64;
    let mut n_outer = total - n_inner - n_mid;

    if a_max >= 8.0 {
        n_outer = n_outer.max(2);
    }
    if a_max >= 20.0 {
        n_outer = n_outer.max(3);
    }

    while n_inner + n_mid + n_outer > total {
        if n_inner > 1 {
            n_inner -= 1;
        } else if n_mid > 1 {
            n_mid -= 1;
        } else {
            n_outer -= 1;
        }
    }
    while n_inner + n_mid + n_outer < total {
        n_mid += 1;
    }

    (
        n_inner.max(0) as usize,
        n_mid.max(0) as usize,
        n_outer.max(0) as usize,
    )
}

/// Push each axis out to at least `min_ratio` × its predecessor, dropping any
/// that land beyond `a_max`.
pub fn enforce_min_ratio(axes: &[f64], min_ratio: f64, a_max: f64) -> Vec<f64> {
    enforce_spacing(axes, a_max, |prev| prev * min_ratio)
}

/// Keep at most two planets inside 1 AU.
///
/// The innermost two stay; any other axis below 1 AU is redrawn log-uniformly
/// in [1, a_max] and the list gets a global spacing pass.
pub fn cap_inner_orbits(rng: &mut impl Rng, axes: &[f64], a_max: f64) -> Vec<f64> {
    let mut sorted = axes.to_vec();
    sort_axes(&mut sorted);

    let inner = sorted.iter().take_while(|&&a| a < INNER_SYSTEM_AU).count();
    if inner <= MAX_INNER_PLANETS {
        return sorted;
    }

    let mut out: Vec<f64> = sorted
        .iter()
        .enumerate()
        .map(|(i, &a)| {
            if i >= MAX_INNER_PLANETS && a < INNER_SYSTEM_AU {
                sample_log_uniform(rng, INNER_SYSTEM_AU, a_max)
            } else {
                a
            }
        })
        .collect();
    sort_axes(&mut out);

    enforce_min_ratio(&out, GLOBAL_RATIO, a_max)
}

/// Regional ratio pass: 1.6 while the previous axis is inside 1 AU, 1.25 beyond.
pub fn enforce_regional_spacing(axes: &[f64], a_max: f64) -> Vec<f64> {
    enforce_spacing(axes, a_max, |prev| {
        let ratio = if prev < INNER_SYSTEM_AU { 1.6 } else { MIN_OUTER_RATIO };
        prev * ratio
    })
}

/// Absolute pass: a 0.3 AU gap while the previous axis is inside 1 AU, a 1.25
/// ratio beyond.
pub fn enforce_inner_absolute_spacing(axes: &[f64], a_max: f64) -> Vec<f64> {
    enforce_spacing(axes, a_max, |prev| {
        if prev < INNER_SYSTEM_AU {
            prev + MIN_INNER_GAP_AU
        } else {
            prev * MIN_OUTER_RATIO
        }
    })
}

/// Shared shape of the spacing passes: `min_next(prev)` is the smallest
/// allowed successor of `prev`.
fn enforce_spacing(axes: &[f64], a_max: f64, min_next: impl Fn(f64) -> f64) -> Vec<f64> {
    let mut sorted = axes.to_vec();
    sort_axes(&mut sorted);

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut out = vec![first];
    for a in iter {
        let prev = out[out.len() - 1];
        let a = a.max(min_next(prev));
        if a <= a_max {
            out.push(a);
        }
    }
    out
}

/// Full axis pipeline: band sampling, inner cap, regional and absolute passes.
pub fn layout_semi_major_axes(rng: &mut impl Rng, count: usize, outer_edge: f64) -> Vec<f64> {
    let a_max = outer_edge.max(MIN_OUTER_EDGE_AU);

    let axes = sample_semi_major_axes(rng, count, a_max);
    let axes = cap_inner_orbits(rng, &axes, a_max);
    let axes = enforce_regional_spacing(&axes, a_max);
    enforce_inner_absolute_spacing(&axes, a_max)
}
