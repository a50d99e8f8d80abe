use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Earth masses per solar mass (M☉ / M⊕)
pub const EARTH_MASSES_PER_SOLAR_MASS: f64 = 332_946.0;

/// Earth masses per Jupiter mass (M_J / M⊕)
pub const EARTH_MASSES_PER_JUPITER_MASS: f64 = 317.8;

/// A mass quantity with solar masses as the base unit.
///
/// Stellar masses are stored directly; planetary masses are converted from
/// Earth masses so that star and planet masses can be compared without
/// juggling conversion factors at call sites.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let sun = Mass::from_solar_masses(1.0);
/// let earth = Mass::from_earth_masses(1.0);
///
/// assert!(earth < sun);
/// assert_eq!(sun.to_earth_masses(), 332_946.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// One solar mass is 332,946 Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR_MASS)
    }

    /// Creates a new `Mass` from a value in Jupiter masses.
    pub fn from_jupiter_masses(value: f64) -> Self {
        Self::from_earth_masses(value * EARTH_MASSES_PER_JUPITER_MASS)
    }

    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR_MASS
    }

    pub fn to_jupiter_masses(&self) -> f64 {
        self.to_earth_masses() / EARTH_MASSES_PER_JUPITER_MASS
    }

    /// Returns the larger of two masses
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }

    /// Returns the smaller of two masses
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    /// Cube root, in solar-mass units
    pub fn cbrt(&self) -> f64 {
        self.0.cbrt()
    }

    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

impl std::iter::Sum for Mass {
    fn sum<I: Iterator<Item = Mass>>(iter: I) -> Mass {
        Mass(iter.map(|m| m.0).sum())
    }
}
