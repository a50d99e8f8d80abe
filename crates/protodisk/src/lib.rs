//! Protoplanetary disk chemistry.
//!
//! A [`DiskChemistryProfile`] is rolled once per star from its mass,
//! luminosity and metallicity. It fixes the raw material available to the
//! planetary system generator: disk masses, element ratios, condensation
//! lines and the split of solids into rock, ice and metal.

pub mod element_ratios;
pub mod profile;
pub mod zones;

#[cfg(test)]
mod element_ratios_test;

pub use element_ratios::ElementRatios;
pub use profile::{DiskChemistryProfile, DiskMasses, SolidFractions};
pub use zones::ThermalZones;
