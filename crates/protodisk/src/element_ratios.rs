use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::{SOLAR_METALLICITY, sample_gaussian};

/// Solar reference ratios
pub const SOLAR_C_O: f64 = 0.55;
pub const SOLAR_MG_SI: f64 = 1.05;
pub const SOLAR_FE_MG: f64 = 0.9;

/// Number ratios of the key rock- and ice-forming elements in the disk.
///
/// C/O above ~0.8 marks a carbon-rich disk; Fe/Mg drives core fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRatios {
    pub c_o: f64,
    pub mg_si: f64,
    pub fe_mg: f64,
}

impl ElementRatios {
    /// Ratios of the solar nebula
    pub fn solar() -> Self {
        Self {
            c_o: SOLAR_C_O,
            mg_si: SOLAR_MG_SI,
            fe_mg: SOLAR_FE_MG,
        }
    }

    /// Sample ratios for a disk of metallicity `z`.
    ///
    /// Metal-poor disks are α-enhanced (more Mg and Si) and iron-poor;
    /// metal-rich disks trend slightly toward lower C/O. Each ratio takes an
    /// independent Gaussian draw, in the order C/O, Mg/Si, Fe/Mg.
    pub fn sample(rng: &mut impl Rng, z: f64) -> Self {
        let dex = metallicity_dex(z);
        let alpha_boost = (-0.3 * dex).clamp(-0.3, 0.4);

        let c_o = sample_gaussian(rng, SOLAR_C_O - 0.05 * dex, 0.1).clamp(0.3, 1.2);
        let mg_si = sample_gaussian(rng, SOLAR_MG_SI + alpha_boost, 0.25).clamp(0.7, 1.8);
        let fe_mg = sample_gaussian(rng, SOLAR_FE_MG + 0.3 * dex, 0.2).clamp(0.5, 1.4);

        Self { c_o, mg_si, fe_mg }
    }

    pub fn is_carbon_rich(&self) -> bool {
        self.c_o > 0.8
    }
}

/// Metallicity relative to solar, log10(Z / 0.014)
pub fn metallicity_dex(z: f64) -> f64 {
    (z / SOLAR_METALLICITY).log10()
}
