//! Camera gravitational lock.
//!
//! The observer locks onto a star once within `lock_distance` of it. The lock
//! is only released after the observer has stayed beyond `release_distance`
//! for `release_delay` seconds without interruption; coming back inside
//! resets the timer.
//!
//! Distances are measured in the zoom layer the camera is showing: the base
//! layer while free, the magnified layer while locked. At the default zoom
//! table a release distance of 1000 is 100 canonical units from the star.

use nalgebra::Point2;
use orbits::ZoomTable;
use planetary::StarId;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, is_positive};
use crate::star::Star;

/// Distances in the camera's current zoom layer, delay in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LockConfig {
    pub lock_distance: f64,
    pub release_distance: f64,
    pub release_delay: f64,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            lock_distance: 100.0,
            release_distance: 1000.0,
            release_delay: 5.0,
        }
    }
}

impl LockConfig {
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if !is_positive(self.lock_distance) {
            return Err(ConfigError::invalid("lock.lockDistance", "must be positive"));
        }
        if !self.release_distance.is_finite() || self.release_distance < self.lock_distance {
            return Err(ConfigError::invalid(
                "lock.releaseDistance",
                "must be at least lockDistance",
            ));
        }
        if !self.release_delay.is_finite() || self.release_delay < 0.0 {
            return Err(ConfigError::invalid(
                "lock.releaseDelay",
                "must be zero or positive",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LockState {
    Free,
    Locked {
        star: StarId,
        /// Seconds spent continuously beyond the release distance
        outside_for: f64,
    },
}

/// Transitions reported by [`CameraLock::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockEvent {
    Locked(StarId),
    Released(StarId),
}

#[derive(Debug, Clone)]
pub struct CameraLock {
    config: LockConfig,
    state: LockState,
}

impl CameraLock {
    pub fn new(config: LockConfig) -> Self {
        Self {
            config,
            state: LockState::Free,
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn locked_star(&self) -> Option<StarId> {
        match self.state {
            LockState::Locked { star, .. } => Some(star),
            LockState::Free => None,
        }
    }

    /// Zoom layer the camera should use: the base layer when free, the first
    /// magnified layer while locked.
    pub fn zoom_level(&self) -> usize {
        match self.state {
            LockState::Free => 0,
            LockState::Locked { .. } => 1,
        }
    }

    /// Feed the state machine one frame.
    ///
    /// `nearest` is the closest star and its distance; `locked_distance` is
    /// the current distance to the locked star, `None` if it no longer exists.
    pub fn step(
        &mut self,
        dt: f64,
        nearest: Option<(StarId, f64)>,
        locked_distance: Option<f64>,
    ) -> Option<LockEvent> {
        match self.state {
            LockState::Free => {
                let (star, distance) = nearest?;
                if distance <= self.config.lock_distance {
                    self.state = LockState::Locked {
                        star,
                        outside_for: 0.0,
                    };
                    Some(LockEvent::Locked(star))
                } else {
                    None
                }
            }
            LockState::Locked { star, outside_for } => {
                let Some(distance) = locked_distance else {
                    self.state = LockState::Free;
                    return Some(LockEvent::Released(star));
                };

                if distance <= self.config.release_distance {
                    self.state = LockState::Locked {
                        star,
                        outside_for: 0.0,
                    };
                    return None;
                }

                let outside_for = outside_for + dt.max(0.0);
                if outside_for >= self.config.release_delay {
                    self.state = LockState::Free;
                    Some(LockEvent::Released(star))
                } else {
                    self.state = LockState::Locked { star, outside_for };
                    None
                }
            }
        }
    }

    /// Zoom factor of the layer distances are measured in
    pub fn layer_factor(&self, zoom: &ZoomTable) -> f64 {
        let factors = zoom.factors();
        factors
            .get(self.zoom_level())
            .or(factors.last())
            .copied()
            .unwrap_or(1.0)
    }

    /// Measure distances from `observer` to `stars` and step.
    ///
    /// `observer` and star positions are canonical world coordinates; both
    /// are scaled into the current zoom layer before comparing.
    pub fn update<'a>(
        &mut self,
        dt: f64,
        observer: Point2<f64>,
        stars: impl IntoIterator<Item = &'a Star>,
        zoom: &ZoomTable,
    ) -> Option<LockEvent> {
        let factor = self.layer_factor(zoom);
        let locked = self.locked_star();
        let mut nearest: Option<(StarId, f64)> = None;
        let mut locked_distance = None;

        for star in stars {
            let d = nalgebra::distance(&observer, &star.position) * factor;
            if Some(star.id) == locked {
                locked_distance = Some(d);
            }
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((star.id, d));
            }
        }

        self.step(dt, nearest, locked_distance)
    }
}
