//! Galactic placement of stars.
//!
//! The galaxy is a disk whose radius follows the star count. Candidates are
//! drawn with a radial bias toward the center (r = R·U^k) and rejected when
//! they land too close to an already placed star. The allowed spacing grows
//! with distance from the center, so the core is dense and the rim sparse.
//! Long runs of rejections gradually relax the spacing; if the attempt cap is
//! reached the last candidate is used anyway.

use std::f64::consts::{PI, TAU};

use log::warn;
use nalgebra::Point2;
use orbits::WorldScale;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, is_positive};

/// Expected spacing (GU) at a given fractional distance from the center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingAnchor {
    pub fraction: f64,
    pub spacing: f64,
}

impl SpacingAnchor {
    pub const fn new(fraction: f64, spacing: f64) -> Self {
        Self { fraction, spacing }
    }
}

/// Tunables for [`PlacementSampler`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PlacementConfig {
    /// Multiplier on sqrt(N/π) when sizing the galaxy
    pub radius_loosen: f64,
    /// Smallest galaxy radius (GU)
    pub min_radius: f64,
    /// Radial bias k in r = R·U^k; larger values crowd the core
    pub density_exponent: f64,
    pub max_attempts: u32,
    /// Log-linear spacing curve, sorted by fraction
    pub spacing_anchors: Vec<SpacingAnchor>,
    /// Relative jitter on the expected spacing, ±
    pub spacing_jitter: f64,
    /// Minimum separation as a fraction of the (jittered) expected spacing
    pub min_spacing_factor: f64,
    /// Attempts after which the minimum separation is relaxed
    pub relax_after: u32,
    pub relax_factor: f64,
    /// Attempts after which a second relaxation stacks on the first
    pub hard_relax_after: u32,
    pub hard_relax_factor: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            radius_loosen: 1.35,
            min_radius: 12.0,
            density_exponent: 2.2,
            max_attempts: 5000,
            spacing_anchors: vec![
                SpacingAnchor::new(0.01, 0.1),
                SpacingAnchor::new(0.5, 1.0),
                SpacingAnchor::new(1.0, 10.0),
            ],
            spacing_jitter: 0.25,
            min_spacing_factor: 0.75,
            relax_after: 1500,
            relax_factor: 0.95,
            hard_relax_after: 3000,
            hard_relax_factor: 0.90,
        }
    }
}

impl PlacementConfig {
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if !is_positive(self.radius_loosen) {
            return Err(ConfigError::invalid(
                "placement.radiusLoosen",
                "must be positive",
            ));
        }
        if !self.min_radius.is_finite() || self.min_radius < 0.0 {
            return Err(ConfigError::invalid(
                "placement.minRadius",
                "must be zero or positive",
            ));
        }
        if !is_positive(self.density_exponent) {
            return Err(ConfigError::invalid(
                "placement.densityExponent",
                "must be positive",
            ));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::invalid(
                "placement.maxAttempts",
                "must be at least 1",
            ));
        }
        if self.spacing_anchors.is_empty() {
            return Err(ConfigError::invalid(
                "placement.spacingAnchors",
                "needs at least one anchor",
            ));
        }
        if self
            .spacing_anchors
            .iter()
            .any(|a| !is_positive(a.fraction) || !is_positive(a.spacing))
        {
            return Err(ConfigError::invalid(
                "placement.spacingAnchors",
                "fractions and spacings must be positive",
            ));
        }
        if self
            .spacing_anchors
            .windows(2)
            .any(|w| w[1].fraction <= w[0].fraction)
        {
            return Err(ConfigError::invalid(
                "placement.spacingAnchors",
                "fractions must be strictly increasing",
            ));
        }
        if !(0.0..1.0).contains(&self.spacing_jitter) {
            return Err(ConfigError::invalid(
                "placement.spacingJitter",
                format!("must be in [0, 1), got {}", self.spacing_jitter),
            ));
        }
        for (field, factor) in [
            ("placement.minSpacingFactor", self.min_spacing_factor),
            ("placement.relaxFactor", self.relax_factor),
            ("placement.hardRelaxFactor", self.hard_relax_factor),
        ] {
            if !is_positive(factor) || factor > 1.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be in (0, 1], got {}", factor),
                ));
            }
        }
        Ok(())
    }

    /// Multiplier on the minimum separation for a 0-based attempt index
    pub fn relaxation(&self, attempt: u32) -> f64 {
        let mut factor = 1.0;
        if attempt > self.relax_after {
            factor *= self.relax_factor;
        }
        if attempt > self.hard_relax_after {
            factor *= self.hard_relax_factor;
        }
        factor
    }
}

/// Galaxy radius in GU for `star_count` stars.
///
/// Non-decreasing in `star_count`; an empty galaxy is sized as if it held one
/// star.
pub fn galaxy_radius(star_count: usize, config: &PlacementConfig) -> f64 {
    let n = star_count.max(1) as f64;
    ((n / PI).sqrt() * config.radius_loosen).max(config.min_radius)
}

/// Expected spacing (GU) at `fraction` of the galaxy radius.
///
/// Interpolates linearly in log-spacing between anchors; the fraction is
/// clamped to the anchored range.
pub fn expected_spacing(fraction: f64, anchors: &[SpacingAnchor]) -> f64 {
    let (Some(first), Some(last)) = (anchors.first(), anchors.last()) else {
        return 0.0;
    };
    let f = fraction.clamp(first.fraction, last.fraction);

    for pair in anchors.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if f <= hi.fraction {
            let t = (f - lo.fraction) / (hi.fraction - lo.fraction);
            let log_spacing = lo.spacing.ln() + t * (hi.spacing.ln() - lo.spacing.ln());
            return log_spacing.exp();
        }
    }
    last.spacing
}

/// Outcome of placing one star
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Canonical position in world units
    pub position: Point2<f64>,
    /// Candidates drawn, including the accepted one
    pub attempts: u32,
    /// Separation the accepted candidate had to keep, in world units
    pub min_separation: f64,
    /// The separation had been relaxed when the candidate was accepted
    pub relaxed: bool,
    /// No candidate passed; `position` is the last one drawn
    pub exhausted: bool,
}

/// Rejection sampler for star positions in a galaxy of fixed radius.
#[derive(Debug, Clone, Copy)]
pub struct PlacementSampler<'a> {
    config: &'a PlacementConfig,
    scale: &'a WorldScale,
    radius: f64,
}

impl<'a> PlacementSampler<'a> {
    /// `radius` is the galaxy radius in GU.
    pub fn new(config: &'a PlacementConfig, scale: &'a WorldScale, radius: f64) -> Self {
        Self {
            config,
            scale,
            radius,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Draw a position that keeps its distance from every star in `placed`
    /// (world units).
    pub fn place(&self, rng: &mut impl Rng, placed: &[Point2<f64>]) -> Placement {
        let mut last = Placement {
            position: Point2::origin(),
            attempts: 0,
            min_separation: 0.0,
            relaxed: false,
            exhausted: true,
        };

        for attempt in 0..self.config.max_attempts {
            let r = self.radius * rng.random::<f64>().powf(self.config.density_exponent);
            let theta = rng.random::<f64>() * TAU;

            let fraction = if self.radius > 0.0 { r / self.radius } else { 0.0 };
            let jitter = 1.0 + (2.0 * rng.random::<f64>() - 1.0) * self.config.spacing_jitter;
            let expected = expected_spacing(fraction, &self.config.spacing_anchors) * jitter;
            let min_gu =
                expected * self.config.min_spacing_factor * self.config.relaxation(attempt);

            let position = Point2::new(
                self.scale.galaxy_units_to_world(r * theta.cos()),
                self.scale.galaxy_units_to_world(r * theta.sin()),
            );
            let min_separation = self.scale.galaxy_units_to_world(min_gu);

            let clear = placed
                .iter()
                .all(|p| nalgebra::distance(p, &position) >= min_separation);

            last = Placement {
                position,
                attempts: attempt + 1,
                min_separation,
                relaxed: attempt > self.config.relax_after,
                exhausted: !clear,
            };
            if clear {
                return last;
            }
        }

        warn!(
            "star placement exhausted after {} attempts; keeping last candidate at ({:.0}, {:.0})",
            last.attempts, last.position.x, last.position.y
        );
        last
    }
}
