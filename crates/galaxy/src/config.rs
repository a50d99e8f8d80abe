//! Galaxy configuration.
//!
//! Every tunable the generator reads lives here, with defaults that reproduce
//! the stock game. Files are TOML; missing keys fall back to the defaults so a
//! config only needs to name what it changes:
//!
//! ```toml
//! starCount = 400
//!
//! [placement]
//! maxAttempts = 8000
//!
//! [kinematics]
//! secondsPerYear = 60.0
//! ```

use std::path::Path;

use orbits::{KinematicsConfig, WorldScale, ZoomTable};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, is_positive};
use crate::lock::LockConfig;
use crate::placement::PlacementConfig;

/// Stars generated by a fresh directory
pub const DEFAULT_STAR_COUNT: usize = 200;

/// Top-level configuration for a [`crate::GalaxyDirectory`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GalaxyConfig {
    /// Target number of stars; 0 sizes the galaxy from stars already placed
    pub star_count: usize,
    /// Upper end of the initial mass function (M☉)
    pub max_stellar_mass: f64,
    pub placement: PlacementConfig,
    pub world_scale: WorldScale,
    pub kinematics: KinematicsConfig,
    pub zoom: ZoomTable,
    pub lock: LockConfig,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            max_stellar_mass: stellar::sampling::IMF_DEFAULT_MAX_MASS,
            placement: PlacementConfig::default(),
            world_scale: WorldScale::default(),
            kinematics: KinematicsConfig::default(),
            zoom: ZoomTable::default(),
            lock: LockConfig::default(),
        }
    }
}

impl GalaxyConfig {
    /// Defaults with a different star count
    pub fn with_star_count(star_count: usize) -> Self {
        Self {
            star_count,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: GalaxyConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Reject values the generator cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.max_stellar_mass.is_finite()
            || self.max_stellar_mass <= stellar::sampling::IMF_BREAK_MASS
        {
            return Err(ConfigError::invalid(
                "maxStellarMass",
                format!(
                    "must exceed {} M☉, got {}",
                    stellar::sampling::IMF_BREAK_MASS,
                    self.max_stellar_mass
                ),
            ));
        }
        if !is_positive(self.world_scale.units_per_galaxy_unit) {
            return Err(ConfigError::invalid(
                "worldScale.unitsPerGalaxyUnit",
                "must be positive",
            ));
        }
        if !is_positive(self.world_scale.au_per_galaxy_unit) {
            return Err(ConfigError::invalid(
                "worldScale.auPerGalaxyUnit",
                "must be positive",
            ));
        }
        if !is_positive(self.kinematics.seconds_per_year) {
            return Err(ConfigError::invalid(
                "kinematics.secondsPerYear",
                format!("must be positive, got {}", self.kinematics.seconds_per_year),
            ));
        }
        if self.zoom.is_empty() {
            return Err(ConfigError::invalid("zoom", "needs at least one factor"));
        }
        if let Some(z) = self.zoom.factors().iter().find(|z| !is_positive(**z)) {
            return Err(ConfigError::invalid(
                "zoom",
                format!("factors must be positive, got {}", z),
            ));
        }
        self.placement.validate()?;
        self.lock.validate()?;
        Ok(())
    }
}
