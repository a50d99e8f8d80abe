use std::fmt;

use serde::{Deserialize, Serialize};
use units::Temperature;

/// Harvard spectral class, assigned purely from effective temperature.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// Step function on effective temperature.
    ///
    /// Remnants go through the same mapping: an 8000 K white dwarf reads as A,
    /// a black hole (0 K) as M.
    pub fn from_temperature(temperature: Temperature) -> Self {
        let t = temperature.to_kelvin();
        match t {
            t if t >= 30_000.0 => SpectralClass::O,
            t if t >= 10_000.0 => SpectralClass::B,
            t if t >= 7_500.0 => SpectralClass::A,
            t if t >= 6_000.0 => SpectralClass::F,
            t if t >= 5_200.0 => SpectralClass::G,
            t if t >= 3_700.0 => SpectralClass::K,
            _ => SpectralClass::M,
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            SpectralClass::O => "O",
            SpectralClass::B => "B",
            SpectralClass::A => "A",
            SpectralClass::F => "F",
            SpectralClass::G => "G",
            SpectralClass::K => "K",
            SpectralClass::M => "M",
        };
        write!(f, "{}", str)
    }
}
