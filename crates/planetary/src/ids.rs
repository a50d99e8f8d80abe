use std::fmt;

use serde::{Deserialize, Serialize};

/// Session-unique star identifier, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarId(pub u32);

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Planet identifier scoped to its parent star.
///
/// `index` is 1-based and follows formation order; displays as `"<star>-p<n>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetId {
    pub star: StarId,
    pub index: u32,
}

impl PlanetId {
    pub fn new(star: StarId, index: u32) -> Self {
        Self { star, index }
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-p{}", self.star, self.index)
    }
}
