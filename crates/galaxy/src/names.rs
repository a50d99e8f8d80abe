//! Syllable name generator.
//!
//! Names are `starter + prefix + middle + suffix + tag`. Empty entries are
//! repeated in the starter and tag tables so most names come out bare, with
//! the occasional "Alpha Zorta" or "Velix Prime".

use rand::Rng;
use rand::seq::IndexedRandom;

const EMPTY_STARTERS: usize = 18;
const STARTERS: &[&str] = &["New ", "Alpha ", "Beta ", "Omega ", "Great ", "The "];

const PREFIXES: &[&str] = &[
    "Zor", "Xan", "Vel", "Kor", "Lun", "Sol", "Aeg", "Neb", "Gal", "Or",
];
const MIDDLES: &[&str] = &["", "ta", "ri", "lo", "ne", "qu", "za", "fi", "mu", "xi", "ve"];
const SUFFIXES: &[&str] = &["", "on", "ar", "is", "us", "ea", "ix", "or", "um", "ax", "en"];

const EMPTY_TAGS: usize = 41;
const TAGS: &[&str] = &[
    " Prime", " Nova", " I", " II", " III", " IV", " V", " VI", " VII", " VIII", " IX", " X",
];

/// Stateless generator; all randomness comes from the caller's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameGenerator;

impl NameGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw a name for a star or planet.
    pub fn generate(&self, rng: &mut impl Rng) -> String {
        let starter = weighted(rng, EMPTY_STARTERS, STARTERS);
        let prefix = PREFIXES.choose(rng).copied().unwrap_or_default();
        let middle = MIDDLES.choose(rng).copied().unwrap_or_default();
        let suffix = SUFFIXES.choose(rng).copied().unwrap_or_default();
        let tag = weighted(rng, EMPTY_TAGS, TAGS);

        format!("{starter}{prefix}{middle}{suffix}{tag}")
    }
}

/// Pick uniformly from `empties` blank entries followed by `entries`.
fn weighted(rng: &mut impl Rng, empties: usize, entries: &[&'static str]) -> &'static str {
    let i = rng.random_range(0..empties + entries.len());
    i.checked_sub(empties)
        .and_then(|j| entries.get(j))
        .copied()
        .unwrap_or("")
}
