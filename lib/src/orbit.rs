//! Orbits of one registered celestial body around another.

use std::{fmt, sync::Arc};

use serde::Serialize;
use time::Duration;
use tracing::trace;

use crate::{
    bodies::{BodyId, CelestialBody, UniverseId},
    constants::SECONDS_PER_DAY,
    error::{CollisionKind, Error, Result},
    physics::{orbital, validate},
};

/// An elliptical orbit of `orbiting` around `primary`.
///
/// Orbits are checked for obvious near-term collisions when they are
/// created and cannot be changed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Orbit {
    #[serde(skip)]
    universe: UniverseId,
    primary: BodyId,
    orbiting: BodyId,
    /// Semi-major axis (`km`)
    semimajor_axis: f64,
    /// Eccentricity, `0 <= e < 1`
    eccentricity: f64,
    semiminor_axis: f64,
    perihelion: f64,
    aphelion: f64,
    primary_mass: f64,
    orbiting_mass: f64,
}

impl Orbit {
    /// Both bodies must already belong to a universe; look them up with
    /// [`Universe::celestial_body`](crate::universe::Universe::celestial_body).
    ///
    /// Fails with [`Error::Collision`] when the ellipse is so flat, or the
    /// perihelion so close, that the bodies would touch.
    pub fn new(
        primary: &CelestialBody,
        orbiting: &CelestialBody,
        semimajor_axis: f64,
        eccentricity: f64,
    ) -> Result<Self> {
        let (universe, primary_id) = registered(primary)?;
        let (orbiting_universe, orbiting_id) = registered(orbiting)?;
        if orbiting_universe != universe {
            return Err(Error::NotFound(orbiting.label().into()));
        }
        if primary_id == orbiting_id {
            let name: Arc<str> = orbiting.label().into();
            return Err(Error::CircularOrbit {
                body: name.clone(),
                primary: name,
            });
        }
        let semimajor_axis = validate::positive("semimajor_axis", semimajor_axis)?;
        let eccentricity = validate::eccentricity(eccentricity)?;

        let combined_radii = primary.radius() + orbiting.radius();
        let semiminor_axis = orbital::semiminor_axis(semimajor_axis, eccentricity)?;
        let perihelion = orbital::perihelion(semimajor_axis, eccentricity)?;
        let aphelion = orbital::aphelion(semimajor_axis, eccentricity)?;
        trace!(
            primary = primary.label(),
            orbiting = orbiting.label(),
            combined_radii,
            semiminor_axis,
            perihelion,
            "checking orbit for collisions"
        );
        if combined_radii >= semiminor_axis {
            return Err(Error::Collision(CollisionKind::SemiminorAxis));
        }
        if combined_radii >= perihelion {
            return Err(Error::Collision(CollisionKind::Perihelion));
        }

        Ok(Self {
            universe,
            primary: primary_id,
            orbiting: orbiting_id,
            semimajor_axis,
            eccentricity,
            semiminor_axis,
            perihelion,
            aphelion,
            primary_mass: primary.mass(),
            orbiting_mass: orbiting.mass(),
        })
    }

    /// The universe whose bodies this orbit joins.
    pub(crate) fn universe(&self) -> UniverseId {
        self.universe
    }

    pub(crate) fn move_to(&mut self, universe: UniverseId) {
        self.universe = universe;
    }

    pub fn primary(&self) -> BodyId {
        self.primary
    }

    pub fn orbiting(&self) -> BodyId {
        self.orbiting
    }

    pub fn semimajor_axis(&self) -> f64 {
        self.semimajor_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Semi-minor axis (`km`).
    pub fn semiminor_axis(&self) -> f64 {
        self.semiminor_axis
    }

    /// Closest distance between the two bodies (`km`).
    pub fn perihelion(&self) -> f64 {
        self.perihelion
    }

    /// Farthest distance between the two bodies (`km`).
    pub fn aphelion(&self) -> f64 {
        self.aphelion
    }

    /// Orbital period (`days`).
    pub fn period(&self) -> Result<f64> {
        orbital::orbital_period(self.semimajor_axis, self.primary_mass, self.orbiting_mass)
    }

    pub fn period_duration(&self) -> Result<Duration> {
        Ok(Duration::seconds_f64(self.period()? * SECONDS_PER_DAY))
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Orbit({} -> {}, a = {} km, e = {})",
            self.primary, self.orbiting, self.semimajor_axis, self.eccentricity
        )
    }
}

fn registered(body: &CelestialBody) -> Result<(UniverseId, BodyId)> {
    body.universe()
        .zip(body.id())
        .ok_or_else(|| Error::NotFound(body.label().into()))
}
