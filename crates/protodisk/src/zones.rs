use serde::{Deserialize, Serialize};
use stellar::{HabitableZone, snow_line};
use units::Length;

/// Condensation fronts of the disk, all scaling with √L.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermalZones {
    /// Refractory silicates condense beyond this line
    pub silicate_line: Length,
    /// Water ice condenses beyond this line
    pub snow_line: Length,
    /// Carbon-bearing ices condense beyond this line
    pub carbon_line: Length,
    pub habitable_zone: HabitableZone,
}

impl ThermalZones {
    pub fn from_luminosity(luminosity: f64) -> Self {
        let s = luminosity.max(0.0).sqrt();
        Self {
            silicate_line: Length::from_au(0.1 * s),
            snow_line: snow_line(luminosity),
            carbon_line: Length::from_au(10.0 * s),
            habitable_zone: HabitableZone::from_luminosity(luminosity),
        }
    }
}
