//! A universe that can be handed to several threads.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    bodies::{BodyId, CelestialBody},
    error::Result,
    orbit::Orbit,
    universe::Universe,
};

/// Cheaply clonable handle to a [`Universe`] behind a read-write lock.
///
/// Mutations hold the write lock for their whole duration, so readers
/// never see an orbit list and orbital graph that disagree.
#[derive(Clone, Debug, Default)]
pub struct SharedUniverse(Arc<RwLock<Universe>>);

impl SharedUniverse {
    pub fn new(universe: Universe) -> Self {
        Self(Arc::new(RwLock::new(universe)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Universe> {
        self.0.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Universe> {
        self.0.write()
    }

    pub fn add_celestial_body(&self, body: CelestialBody) -> Result<BodyId> {
        self.write().add_celestial_body(body)
    }

    pub fn rename_celestial_body(&self, old: &str, new: impl Into<Arc<str>>) -> Result<()> {
        self.write().rename_celestial_body(old, new)
    }

    pub fn add_orbit(&self, orbit: Orbit) -> Result<()> {
        self.write().add_orbit(orbit)
    }

    /// Looks up both bodies and adds the orbit under a single write lock.
    pub fn add_orbit_between(
        &self,
        primary: &str,
        orbiting: &str,
        semimajor_axis: f64,
        eccentricity: f64,
    ) -> Result<()> {
        self.write()
            .add_orbit_between(primary, orbiting, semimajor_axis, eccentricity)
    }

    pub fn hierarchy_text(&self) -> String {
        self.read().hierarchy_text()
    }

    pub fn untethered_names(&self) -> Vec<String> {
        self.read()
            .untethered_bodies()
            .into_iter()
            .map(|body| body.label().to_owned())
            .collect()
    }

    /// Take the universe back out, if this is the last handle.
    pub fn try_unwrap(self) -> std::result::Result<Universe, Self> {
        Arc::try_unwrap(self.0)
            .map(RwLock::into_inner)
            .map_err(Self)
    }
}

impl From<Universe> for SharedUniverse {
    fn from(universe: Universe) -> Self {
        Self::new(universe)
    }
}
