use serde::{Deserialize, Serialize};
use units::Length;

/// World units spanned by one galaxy unit (the Sol-Proxima distance)
pub const DEFAULT_UNITS_PER_GALAXY_UNIT: f64 = 22_688.0;
/// Astronomical units in one galaxy unit
pub const DEFAULT_AU_PER_GALAXY_UNIT: f64 = 268_000.0;

/// Conversion between physical distances and game world units.
///
/// One galaxy unit (GU) is the Sol-Proxima distance. At default ship speed it
/// takes a minute to cross, which fixes how many world units it spans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldScale {
    pub units_per_galaxy_unit: f64,
    pub au_per_galaxy_unit: f64,
}

impl Default for WorldScale {
    fn default() -> Self {
        Self {
            units_per_galaxy_unit: DEFAULT_UNITS_PER_GALAXY_UNIT,
            au_per_galaxy_unit: DEFAULT_AU_PER_GALAXY_UNIT,
        }
    }
}

impl WorldScale {
    /// World units per AU
    pub fn au_to_world(&self) -> f64 {
        self.units_per_galaxy_unit / self.au_per_galaxy_unit
    }

    pub fn length_to_world(&self, length: Length) -> f64 {
        length.to_au() * self.au_to_world()
    }

    pub fn galaxy_units_to_world(&self, gu: f64) -> f64 {
        gu * self.units_per_galaxy_unit
    }

    pub fn world_to_galaxy_units(&self, world: f64) -> f64 {
        world / self.units_per_galaxy_unit
    }
}
