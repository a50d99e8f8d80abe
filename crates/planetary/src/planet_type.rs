use std::fmt;

use serde::{Deserialize, Serialize};

use crate::formation_zone::FormationZone;

/// Mass thresholds between type regimes (Earth masses)
pub mod mass_limits {
    /// Below this: a small rocky body regardless of zone
    pub const TINY: f64 = 0.15;
    /// Below this: terrestrial (rocky, iron-rich or icy)
    pub const TERRESTRIAL: f64 = 2.0;
    /// Below this: super-Earth / sub-Neptune band
    pub const SUB_NEPTUNE: f64 = 10.0;
    /// Below this: ice giant; above: gas giant
    pub const ICE_GIANT: f64 = 40.0;
}

/// Coarse planet type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    #[serde(rename = "rocky")]
    Rocky,
    #[serde(rename = "iron_rich")]
    IronRich,
    #[serde(rename = "ice")]
    Ice,
    #[serde(rename = "water_world")]
    WaterWorld,
    #[serde(rename = "dwarfGas")]
    DwarfGas,
    #[serde(rename = "ice_giant")]
    IceGiant,
    #[serde(rename = "gas_giant")]
    GasGiant,
}

impl PlanetType {
    /// Decide the type from mass and formation zone.
    pub fn classify(mass_earth: f64, zone: &FormationZone) -> Self {
        use mass_limits::*;

        match mass_earth {
            m if m < TINY => PlanetType::Rocky,
            m if m < TERRESTRIAL => {
                if zone.inside_silicate {
                    PlanetType::IronRich
                } else if zone.in_habitable_zone && zone.inside_snow {
                    PlanetType::Rocky
                } else if !zone.inside_snow {
                    PlanetType::Ice
                } else {
                    PlanetType::Rocky
                }
            }
            m if m < SUB_NEPTUNE => {
                if zone.inside_snow {
                    PlanetType::DwarfGas
                } else {
                    PlanetType::WaterWorld
                }
            }
            m if m < ICE_GIANT => PlanetType::IceGiant,
            _ => PlanetType::GasGiant,
        }
    }

    /// Bulk density before water/core adjustments, g/cm³
    pub fn base_density(&self) -> f64 {
        match self {
            PlanetType::Rocky => 5.2,
            PlanetType::IronRich => 6.8,
            PlanetType::WaterWorld => 2.8,
            PlanetType::Ice => 1.8,
            PlanetType::DwarfGas => 3.0,
            PlanetType::IceGiant => 1.6,
            PlanetType::GasGiant => 1.2,
        }
    }

    pub fn is_giant(&self) -> bool {
        matches!(self, PlanetType::IceGiant | PlanetType::GasGiant)
    }

    /// Puffy mid-mass planets that may drift inward in a gas-rich disk
    pub fn is_sub_neptune(&self) -> bool {
        matches!(self, PlanetType::DwarfGas | PlanetType::WaterWorld)
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            PlanetType::Rocky => "rocky",
            PlanetType::IronRich => "iron_rich",
            PlanetType::Ice => "ice",
            PlanetType::WaterWorld => "water_world",
            PlanetType::DwarfGas => "dwarfGas",
            PlanetType::IceGiant => "ice_giant",
            PlanetType::GasGiant => "gas_giant",
        };
        write!(f, "{}", str)
    }
}
