use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Sub};

const MYR_TO_YEARS: f64 = 1.0e6;
const GYR_TO_YEARS: f64 = 1.0e9;

/// Age of the universe in years
pub const UNIVERSE_AGE_YEARS: f64 = 13.8e9;

/// A duration with years as the base unit.
///
/// Stellar ages and lifetimes use this type. Gameplay clocks are expressed in
/// seconds separately, through the configurable game-seconds-per-year scale.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    pub fn from_myr(value: f64) -> Self {
        Self(value * MYR_TO_YEARS)
    }

    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_YEARS)
    }

    pub fn to_years(&self) -> f64 {
        self.0
    }

    pub fn to_myr(&self) -> f64 {
        self.0 / MYR_TO_YEARS
    }

    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_YEARS
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
