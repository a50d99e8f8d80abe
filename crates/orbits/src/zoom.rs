use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// One cached coordinate per zoom level, indexed like the [`ZoomTable`]
pub type Projections = Vec<Point2<f64>>;

/// Multiplicative zoom factors applied to canonical world coordinates.
///
/// Index 0 is the base layer; the default table is `[1, 10, 50]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoomTable(Vec<f64>);

impl Default for ZoomTable {
    fn default() -> Self {
        Self(vec![1.0, 10.0, 50.0])
    }
}

impl ZoomTable {
    pub fn new(factors: Vec<f64>) -> Self {
        Self(factors)
    }

    pub fn factors(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scale a canonical point into every zoom layer.
    pub fn project(&self, canonical: Point2<f64>) -> Projections {
        self.0.iter().map(|&z| Point2::from(canonical.coords * z)).collect()
    }
}
