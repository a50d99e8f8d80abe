use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// AU to Earth radii
pub const AU_TO_EARTH_RADIUS: f64 = 23_481.4;

/// Jupiter radius in Earth radii: 1 R_J = 11.21 R⊕
pub const JUPITER_TO_EARTH_RADII: f64 = 11.21;

/// Solar radius in AU: 1 R☉ = 0.00465047 AU
pub const SOLAR_RADIUS_AU: f64 = 1.0 / 215.032;

/// A length quantity with astronomical units (AU) as the base unit.
///
/// Orbital distances, zone radii and body radii all share this type; use the
/// unit-specific accessors to read a radius in R⊕, R_J or R☉.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let snow_line = Length::from_au(2.7);
/// let earth = Length::from_earth_radii(1.0);
///
/// assert!(earth < snow_line);
/// assert!((Length::from_jupiter_radii(1.0).to_earth_radii() - 11.21).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    pub fn from_earth_radii(value: f64) -> Self {
        Self(value / AU_TO_EARTH_RADIUS)
    }

    pub fn from_jupiter_radii(value: f64) -> Self {
        Self::from_earth_radii(value * JUPITER_TO_EARTH_RADII)
    }

    pub fn from_solar_radii(value: f64) -> Self {
        Self(value * SOLAR_RADIUS_AU)
    }

    pub fn to_au(&self) -> f64 {
        self.0
    }

    pub fn to_earth_radii(&self) -> f64 {
        self.0 * AU_TO_EARTH_RADIUS
    }

    pub fn to_jupiter_radii(&self) -> f64 {
        self.to_earth_radii() / JUPITER_TO_EARTH_RADII
    }

    pub fn to_solar_radii(&self) -> f64 {
        self.0 / SOLAR_RADIUS_AU
    }

    /// Returns the smaller of two lengths
    pub fn min(self, other: Self) -> Self {
        if self.0 <= other.0 { self } else { other }
    }

    /// Returns the larger of two lengths
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 { self } else { other }
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
