//! Definitions of celestial bodies.

use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use serde::{Deserialize, Serialize};

use crate::{
    arena::IdLike,
    constants::METERS_PER_KILOMETER,
    error::Result,
    physics::{
        geometry, gravity, luminosity,
        spectral::{self, SpectralClass},
        validate,
    },
};

/// Label used for bodies that have not been given a name.
pub const UNNAMED: &str = "Unnamed Celestial Body";

/// Mass of the object weighed by [`CelestialBody::weight_on_surface`]
/// when the caller has no better figure (`kg`).
pub const DEFAULT_OBJECT_MASS: f64 = 70.0;

/// Identifies a celestial body registered in a
/// [`Universe`](crate::universe::Universe). Ids are only meaningful within
/// the universe that assigned them.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(transparent)]
pub struct BodyId(u64);

impl IdLike for BodyId {
    fn from_raw(index: usize) -> Self {
        Self(index as u64)
    }

    fn into_raw(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies one [`Universe`](crate::universe::Universe) for the lifetime
/// of the process. A clone of a universe gets a new one, so bodies and
/// orbits of the clone are told apart from those of the original.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UniverseId(u64);

impl UniverseId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BodyKind {
    Generic,
    BlackHole,
    /// A star. Surface temperature in Kelvin.
    Solar { temperature: f64 },
    Planetary,
}

impl BodyKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generic => "CelestialBody",
            Self::BlackHole => "BlackHole",
            Self::Solar { .. } => "SolarBody",
            Self::Planetary => "PlanetaryBody",
        }
    }
}

/// A celestial body.
///
/// Mass, radius and kind are fixed at construction; derived quantities
/// are recomputed on every call. The name is assigned by the owning
/// universe.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CelestialBody {
    name: Option<Arc<str>>,
    #[serde(skip)]
    id: Option<BodyId>,
    #[serde(skip)]
    universe: Option<UniverseId>,
    /// Mass (`kg`)
    mass: f64,
    /// Mean radius of the body's sphere (`km`)
    radius: f64,
    kind: BodyKind,
}

impl CelestialBody {
    pub fn new(mass: f64, radius: f64) -> Result<Self> {
        Self::with_kind(mass, radius, BodyKind::Generic)
    }

    /// A black hole whose radius is its event horizon, derived from the
    /// mass alone.
    pub fn black_hole(mass: f64) -> Result<Self> {
        let radius = gravity::schwarzschild_radius(mass)? / METERS_PER_KILOMETER;
        Self::with_kind(mass, radius, BodyKind::BlackHole)
    }

    pub fn solar(mass: f64, radius: f64, temperature: f64) -> Result<Self> {
        let temperature = validate::positive("temperature", temperature)?;
        Self::with_kind(mass, radius, BodyKind::Solar { temperature })
    }

    pub fn planetary(mass: f64, radius: f64) -> Result<Self> {
        Self::with_kind(mass, radius, BodyKind::Planetary)
    }

    fn with_kind(mass: f64, radius: f64, kind: BodyKind) -> Result<Self> {
        Ok(Self {
            name: None,
            id: None,
            universe: None,
            mass: validate::positive("mass", mass)?,
            radius: validate::positive("radius", radius)?,
            kind,
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// `None` until a name is given or the body is registered.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(crate) fn name_arc(&self) -> Option<&Arc<str>> {
        self.name.as_ref()
    }

    /// The display name, falling back to [`UNNAMED`].
    pub fn label(&self) -> &str {
        self.name().unwrap_or(UNNAMED)
    }

    /// Set once the body has been added to a universe.
    pub fn id(&self) -> Option<BodyId> {
        self.id
    }

    pub(crate) fn universe(&self) -> Option<UniverseId> {
        self.universe
    }

    pub(crate) fn register(&mut self, universe: UniverseId, id: BodyId, name: Arc<str>) {
        self.universe = Some(universe);
        self.id = Some(id);
        self.name = Some(name);
    }

    pub(crate) fn move_to(&mut self, universe: UniverseId) {
        self.universe = Some(universe);
    }

    pub(crate) fn set_name(&mut self, name: Arc<str>) {
        self.name = Some(name);
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Volume assuming a roughly spherical body (`km^3`).
    pub fn volume(&self) -> Result<f64> {
        geometry::volume_of_sphere(self.radius)
    }

    /// Density (`kg/m^3`).
    pub fn density(&self) -> Result<f64> {
        geometry::density(self.mass, self.volume()? * METERS_PER_KILOMETER.powi(3))
    }

    /// Surface gravitational acceleration (`m/s^2`).
    pub fn gravitational_acceleration(&self) -> Result<f64> {
        gravity::gravitational_acceleration(self.mass, self.radius)
    }

    /// Schwarzschild radius of a black hole (`km`).
    pub fn event_horizon(&self) -> Option<f64> {
        match self.kind {
            BodyKind::BlackHole => Some(self.radius),
            _ => None,
        }
    }

    pub fn temperature(&self) -> Option<f64> {
        match self.kind {
            BodyKind::Solar { temperature } => Some(temperature),
            _ => None,
        }
    }

    /// Black body luminosity of a star (`W`).
    pub fn luminosity(&self) -> Option<f64> {
        self.temperature()
            .and_then(|t| luminosity::stefan_boltzmann_luminosity(self.radius, t).ok())
    }

    pub fn spectral_class(&self) -> Option<Result<SpectralClass>> {
        self.temperature().map(spectral::classify)
    }

    /// Weight (`kg`) of an object of the given mass standing on the surface
    /// of a planetary body, with gravity as the only force acting on it.
    /// `None` for other kinds of bodies.
    pub fn weight_on_surface(&self, mass_of_object: f64) -> Option<Result<f64>> {
        if self.kind != BodyKind::Planetary {
            return None;
        }
        let weight = gravity::gravitational_force(self.mass, mass_of_object, self.radius)
            .and_then(|newtons| {
                geometry::weight_in_kilograms(newtons, self.gravitational_acceleration()?)
            });
        Some(weight)
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}:", self.kind.label(), self.label())?;
        writeln!(f, "    mass: {} kilograms", self.mass)?;
        write!(f, "    radius: {} kilometers", self.radius)?;
        if let Ok(volume) = self.volume() {
            write!(f, "\n    volume: {volume} cubic kilometers")?;
        }
        if let Ok(density) = self.density() {
            write!(f, "\n    density: {density} kilograms per cubic meter")?;
        }
        if let Ok(g) = self.gravitational_acceleration() {
            write!(f, "\n    gravitational_acceleration: {g} meters / second squared")?;
        }
        if let Some(horizon) = self.event_horizon() {
            write!(f, "\n    event_horizon: {horizon} kilometers")?;
        }
        if let Some(temperature) = self.temperature() {
            write!(f, "\n    temperature: {temperature} Kelvin")?;
        }
        if let Some(luminosity) = self.luminosity() {
            write!(f, "\n    luminosity: {luminosity} Joules / second")?;
        }
        if let Some(Ok(class)) = self.spectral_class() {
            write!(f, "\n    spectral_class: {class}")?;
        }
        Ok(())
    }
}
