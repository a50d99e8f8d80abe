use serde::{Deserialize, Serialize};

/// A temperature with Kelvin as the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let photosphere = Temperature::from_kelvin(5772.0);
/// assert_eq!(photosphere.to_kelvin(), 5772.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }
}
