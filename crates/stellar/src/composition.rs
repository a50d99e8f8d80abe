use serde::{Deserialize, Serialize};

/// Primordial helium abundance
const PRIMORDIAL_HELIUM: f64 = 0.248;
/// Helium enrichment per unit metallicity, dY/dZ
const HELIUM_ENRICHMENT: f64 = 1.4;

/// Initial bulk composition as mass fractions (X, Y, Z)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkComposition {
    pub hydrogen: f64,
    pub helium: f64,
    pub metals: f64,
}

impl BulkComposition {
    pub fn from_metallicity(z: f64) -> Self {
        let helium = (PRIMORDIAL_HELIUM + HELIUM_ENRICHMENT * z).clamp(0.24, 0.40);
        let hydrogen = (1.0 - helium - z).clamp(0.55, 0.76);
        Self {
            hydrogen,
            helium,
            metals: z,
        }
    }
}
