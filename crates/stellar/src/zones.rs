use serde::{Deserialize, Serialize};
use units::{Length, Mass};

/// Inner and outer edges of the liquid-water zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitableZone {
    pub inner: Length,
    pub outer: Length,
}

impl HabitableZone {
    /// Conservative zone scaling with √L: [0.95, 1.67] AU for the Sun
    pub fn from_luminosity(luminosity: f64) -> Self {
        let s = luminosity.max(0.0).sqrt();
        Self {
            inner: Length::from_au(0.95 * s),
            outer: Length::from_au(1.67 * s),
        }
    }

    pub fn contains(&self, distance: Length) -> bool {
        distance >= self.inner && distance <= self.outer
    }
}

/// Water-ice condensation line, 2.7 AU · √L
pub fn snow_line(luminosity: f64) -> Length {
    Length::from_au(2.7 * luminosity.max(0.0).sqrt())
}

/// Outermost distance at which a star holds planets, 50 AU · ∛M
///
/// Mass is floored at 0.1 M☉ so remnants and brown-dwarf-like stars still get
/// a usable region.
pub fn gravitational_lock_radius(current_mass: Mass) -> Length {
    Length::from_au(50.0 * current_mass.to_solar_masses().max(0.1).cbrt())
}
