//! Errors at the crate's fallible boundaries.
//!
//! Generation itself never fails: numeric derivations clamp and placement
//! degrades to its last candidate. Only loading and validating configuration
//! can go wrong.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`crate::GalaxyConfig`].
    Parse(toml::de::Error),

    /// A value parsed but is outside its usable range.
    Invalid {
        /// Dotted path of the offending key, e.g. `placement.maxAttempts`
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config value '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Convenience alias: a `Result` using `ConfigError` as the error type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Finite and strictly greater than zero
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
