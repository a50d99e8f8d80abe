use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::{SOLAR_METALLICITY, StellarProperties};
use units::Mass;

use crate::element_ratios::ElementRatios;
use crate::zones::ThermalZones;

/// Gas and dust mass of the disk
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskMasses {
    pub gas: Mass,
    pub dust: Mass,
}

/// How the solid inventory divides into rock, ice and metal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolidFractions {
    pub rock: f64,
    pub ice: f64,
    pub metal: f64,
}

/// Chemical and thermal make-up of a star's protoplanetary disk.
///
/// Generated once per star. There is no re-rolling API; the profile is
/// immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskChemistryProfile {
    pub element_ratios: ElementRatios,
    pub disk: DiskMasses,
    pub zones: ThermalZones,
    pub solid_fractions: SolidFractions,
}

impl DiskChemistryProfile {
    /// Roll the disk for a star.
    ///
    /// The gas disk holds 1-10% of the star's current mass; dust scales with
    /// metallicity relative to solar.
    pub fn generate(star: &StellarProperties, rng: &mut impl Rng) -> Self {
        let gas = star.current_mass * (0.01 + rng.random::<f64>() * 0.09);
        let dust = gas * (star.metallicity / SOLAR_METALLICITY);

        let element_ratios = ElementRatios::sample(rng, star.metallicity);
        let mut zones = ThermalZones::from_luminosity(star.luminosity);
        zones.habitable_zone = star.habitable_zone;

        let solid_fractions = SolidFractions {
            rock: 1.0 / (1.0 + element_ratios.c_o),
            ice: if zones.snow_line.to_au() > 0.0 { 0.5 } else { 0.0 },
            metal: element_ratios.fe_mg / (1.0 + element_ratios.fe_mg),
        };

        Self {
            element_ratios,
            disk: DiskMasses { gas, dust },
            zones,
            solid_fractions,
        }
    }
}
