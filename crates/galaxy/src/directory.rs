//! The galaxy directory: owner of every star and planet in a session.
//!
//! A directory starts empty and fills itself on the first [`GalaxyDirectory::advance`].
//! Each session is identified by a UUID; the RNG seed is derived from it the
//! same way for fresh, named and explicitly seeded sessions, so the whole
//! galaxy is reproducible from the session id alone.

use log::info;
use nalgebra::Point2;
use planetary::StarId;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::{StellarProperties, sample_age, sample_initial_mass, sample_metallicity};
use uuid::Uuid;

use crate::body::BodyRef;
use crate::config::GalaxyConfig;
use crate::names::NameGenerator;
use crate::placement::{Placement, PlacementSampler, galaxy_radius};
use crate::star::{Star, StarContext};

#[derive(Debug, Clone)]
pub struct GalaxyDirectory {
    session: Uuid,
    config: GalaxyConfig,
    rng: ChaChaRng,
    names: NameGenerator,
    /// Galaxy radius in GU, fixed the first time it is needed
    radius: Option<f64>,
    stars: Vec<Star>,
    next_star_id: u32,
    populated: bool,
}

impl GalaxyDirectory {
    /// A directory with a fresh random session.
    pub fn new(config: GalaxyConfig) -> Self {
        Self::with_session(Uuid::new_v4(), config)
    }

    /// Same name, same galaxy.
    pub fn named(name: &str, config: GalaxyConfig) -> Self {
        Self::with_session(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()), config)
    }

    /// A directory whose RNG is seeded with `seed` directly.
    pub fn with_seed(seed: u64, config: GalaxyConfig) -> Self {
        Self::with_session(Uuid::from_u64_pair(seed, 0), config)
    }

    /// Directory for an existing session id.
    pub fn with_session(session: Uuid, config: GalaxyConfig) -> Self {
        let seed = session.as_u64_pair().0;
        Self {
            session,
            config,
            rng: ChaChaRng::seed_from_u64(seed),
            names: NameGenerator::new(),
            radius: None,
            stars: Vec::new(),
            next_star_id: 1,
            populated: false,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session
    }

    /// RNG seed derived from the session id
    pub fn seed(&self) -> u64 {
        self.session.as_u64_pair().0
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Advance the simulation clock by `dt` game seconds.
    ///
    /// The first call generates the galaxy before moving anything.
    pub fn advance(&mut self, dt: f64) {
        if !self.populated {
            self.populate();
        }

        let scale = &self.config.world_scale;
        let zoom = &self.config.zoom;
        for star in &mut self.stars {
            star.advance(dt, scale, zoom);
        }
    }

    /// Generate the configured number of stars. Does nothing once populated.
    pub fn populate(&mut self) {
        if self.populated {
            return;
        }
        self.populated = true;

        let radius = self.ensure_radius();
        let target = self.config.star_count;
        self.stars.reserve(target);

        let mut exhausted = 0;
        let mut relaxed = 0;
        for _ in 0..target {
            let (_, placement) = self.spawn_star();
            exhausted += usize::from(placement.exhausted);
            relaxed += usize::from(placement.relaxed);
        }

        info!(
            "galaxy {} populated: {} stars, {} planets, radius {:.1} GU \
             ({} relaxed, {} exhausted placements)",
            self.session,
            self.stars.len(),
            self.planet_count(),
            radius,
            relaxed,
            exhausted
        );
    }

    /// Sample, place and construct one more star.
    ///
    /// Fixes the galaxy radius first if it has not been set yet.
    pub fn spawn_star(&mut self) -> (StarId, Placement) {
        let radius = self.ensure_radius();

        let initial_mass = sample_initial_mass(&mut self.rng, self.config.max_stellar_mass);
        let metallicity = sample_metallicity(&mut self.rng);
        let age = sample_age(&mut self.rng);
        let properties = StellarProperties::derive(initial_mass, metallicity, age);
        let name = self.names.generate(&mut self.rng);

        let placed: Vec<Point2<f64>> = self.stars.iter().map(|s| s.position).collect();
        let placement = PlacementSampler::new(
            &self.config.placement,
            &self.config.world_scale,
            radius,
        )
        .place(&mut self.rng, &placed);

        let id = StarId(self.next_star_id);
        self.next_star_id += 1;

        let ctx = StarContext {
            scale: &self.config.world_scale,
            zoom: &self.config.zoom,
            kinematics: &self.config.kinematics,
            names: &self.names,
        };
        let star = Star::generate(
            id,
            name,
            properties,
            placement.position,
            &ctx,
            &mut self.rng,
        );
        self.stars.push(star);

        (id, placement)
    }

    /// Set the galaxy radius if unset and return it.
    ///
    /// Runs before the first star is placed. A zero target gets the radius of
    /// a one-star galaxy, which is the configured minimum.
    fn ensure_radius(&mut self) -> f64 {
        let config = &self.config;
        *self
            .radius
            .get_or_insert_with(|| galaxy_radius(config.star_count, &config.placement))
    }

    /// Galaxy radius in GU, `None` until the first star is placed
    pub fn galaxy_radius(&self) -> Option<f64> {
        self.radius
    }

    /// Galaxy radius in world units
    pub fn galaxy_radius_world(&self) -> Option<f64> {
        self.radius
            .map(|r| self.config.world_scale.galaxy_units_to_world(r))
    }

    pub fn zoom_factors(&self) -> &[f64] {
        self.config.zoom.factors()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        // Ids are handed out sequentially from 1
        let index = (id.0 as usize).checked_sub(1)?;
        self.stars.get(index).filter(|s| s.id == id)
    }

    /// Every body, each star followed by its planets in formation order.
    pub fn bodies(&self) -> impl Iterator<Item = BodyRef<'_>> + '_ {
        self.stars.iter().flat_map(|star| {
            std::iter::once(BodyRef::Star(star)).chain(star.planets.iter().map(BodyRef::Planet))
        })
    }

    pub fn planet_count(&self) -> usize {
        self.stars.iter().map(|s| s.planets.len()).sum()
    }

    /// Stars plus planets
    pub fn body_count(&self) -> usize {
        self.stars.len() + self.planet_count()
    }
}
