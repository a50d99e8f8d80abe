use protodisk::ThermalZones;
use serde::{Deserialize, Serialize};
use units::Length;

/// Where in the disk a planet formed, relative to the condensation lines.
///
/// The three radial regions (`inside_snow`, `beyond_snow`, `far`) are
/// mutually exclusive for a positive snow line. A dark star has no snow line;
/// every orbit then counts as `far`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationZone {
    pub inside_silicate: bool,
    pub inside_snow: bool,
    /// Between the snow line and the carbon line
    pub beyond_snow: bool,
    /// Beyond the carbon line
    pub far: bool,
    pub in_habitable_zone: bool,
}

impl FormationZone {
    pub fn classify(axis: Length, zones: &ThermalZones) -> Self {
        Self {
            inside_silicate: axis < zones.silicate_line,
            inside_snow: axis < zones.snow_line,
            beyond_snow: axis >= zones.snow_line && axis < zones.carbon_line,
            far: axis >= zones.carbon_line,
            in_habitable_zone: zones.habitable_zone.contains(axis),
        }
    }

    /// Mass multiplier for solids available at this distance
    pub fn solids_boost(&self) -> f64 {
        if self.inside_snow {
            1.0
        } else if self.beyond_snow {
            1.6
        } else {
            2.2
        }
    }
}
