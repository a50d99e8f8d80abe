//! WASM bindings for the procedural galaxy.
//!
//! Galaxies live in thread-local storage (WASM is single-threaded). Creating
//! one returns an opaque id; every other call takes that id and either
//! advances the galaxy or returns a serializable snapshot for rendering.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const id = galaxy_create(200, 42n);
//!
//! function frame(dt) {
//!   galaxy_advance(id, dt);             // first call generates the galaxy
//!   const bodies = galaxy_get_bodies(id);
//!   for (const b of bodies) draw(b.kind, b.projections[zoomLevel], b.radius);
//! }
//!
//! const info = galaxy_get_info(id);
//! console.log(`${info.starCount} stars in ${info.radius} GU`);
//!
//! galaxy_destroy(id);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use galaxy::{BodySnapshot, GalaxyConfig, GalaxyDirectory, StarId};

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// =============================================================================
// Thread-local storage for galaxies
// =============================================================================

thread_local! {
    static GALAXIES: RefCell<HashMap<u32, GalaxyDirectory>> = RefCell::new(HashMap::new());
    static NEXT_GALAXY_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn register(galaxy: GalaxyDirectory) -> u32 {
    let id = NEXT_GALAXY_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    GALAXIES.with(|galaxies| {
        galaxies.borrow_mut().insert(id, galaxy);
    });

    id
}

fn with_galaxy<T>(
    galaxy_id: u32,
    f: impl FnOnce(&mut GalaxyDirectory) -> Result<T, JsError>,
) -> Result<T, JsError> {
    GALAXIES.with(|galaxies| {
        let mut galaxies = galaxies.borrow_mut();
        let galaxy = galaxies
            .get_mut(&galaxy_id)
            .ok_or_else(|| JsError::new(&format!("Galaxy {} not found", galaxy_id)))?;
        f(galaxy)
    })
}

// =============================================================================
// Serializable types for JavaScript interop
// =============================================================================

/// Read-only galaxy metadata
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyInfo {
    /// Session UUID
    pub session: String,
    /// Seed derived from the session, as a decimal string (exceeds 2^53)
    pub seed: String,
    /// Galaxy radius in GU, absent until the galaxy is populated
    pub radius: Option<f64>,
    /// Galaxy radius in world units
    pub radius_world: Option<f64>,
    pub zoom_factors: Vec<f64>,
    pub populated: bool,
    pub star_count: usize,
    pub body_count: usize,
}

impl From<&GalaxyDirectory> for GalaxyInfo {
    fn from(galaxy: &GalaxyDirectory) -> Self {
        Self {
            session: galaxy.session_id().to_string(),
            seed: galaxy.seed().to_string(),
            radius: galaxy.galaxy_radius(),
            radius_world: galaxy.galaxy_radius_world(),
            zoom_factors: galaxy.zoom_factors().to_vec(),
            populated: galaxy.is_populated(),
            star_count: galaxy.stars().len(),
            body_count: galaxy.body_count(),
        }
    }
}

// =============================================================================
// Galaxy management
// =============================================================================

/// Create a galaxy with `star_count` stars from `seed`.
///
/// The galaxy is empty until the first `galaxy_advance`.
#[wasm_bindgen]
pub fn galaxy_create(star_count: u32, seed: u64) -> u32 {
    let config = GalaxyConfig::with_star_count(star_count as usize);
    register(GalaxyDirectory::with_seed(seed, config))
}

/// Create a galaxy whose contents are derived from `name`.
#[wasm_bindgen]
pub fn galaxy_create_named(name: &str, star_count: u32) -> u32 {
    let config = GalaxyConfig::with_star_count(star_count as usize);
    register(GalaxyDirectory::named(name, config))
}

/// Create a galaxy from a TOML configuration document.
#[wasm_bindgen]
pub fn galaxy_create_with_config(config_toml: &str, seed: u64) -> Result<u32, JsError> {
    let config =
        GalaxyConfig::from_toml_str(config_toml).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(register(GalaxyDirectory::with_seed(seed, config)))
}

/// Drop a galaxy and free its memory.
#[wasm_bindgen]
pub fn galaxy_destroy(galaxy_id: u32) {
    GALAXIES.with(|galaxies| {
        galaxies.borrow_mut().remove(&galaxy_id);
    });
}

// =============================================================================
// Per-frame update and snapshots
// =============================================================================

/// Advance the galaxy by `dt` game seconds, generating it on the first call.
#[wasm_bindgen]
pub fn galaxy_advance(galaxy_id: u32, dt: f64) -> Result<(), JsError> {
    with_galaxy(galaxy_id, |galaxy| {
        galaxy.advance(dt);
        Ok(())
    })
}

/// Every body, each star followed by its planets.
#[wasm_bindgen]
pub fn galaxy_get_bodies(galaxy_id: u32) -> Result<JsValue, JsError> {
    with_galaxy(galaxy_id, |galaxy| {
        let bodies: Vec<BodySnapshot> = galaxy.bodies().map(|b| b.snapshot()).collect();
        to_js(&bodies)
    })
}

/// Full record of one star, including its chemistry and planets.
#[wasm_bindgen]
pub fn galaxy_get_star(galaxy_id: u32, star_id: u32) -> Result<JsValue, JsError> {
    with_galaxy(galaxy_id, |galaxy| {
        let star = galaxy
            .star(StarId(star_id))
            .ok_or_else(|| JsError::new(&format!("Star {} not found", star_id)))?;
        to_js(star)
    })
}

/// Galaxy metadata: session, radius, zoom table and counts.
#[wasm_bindgen]
pub fn galaxy_get_info(galaxy_id: u32) -> Result<JsValue, JsError> {
    with_galaxy(galaxy_id, |galaxy| to_js(&GalaxyInfo::from(&*galaxy)))
}
