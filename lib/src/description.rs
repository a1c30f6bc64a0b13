//! Universe description files.
//!
//! A universe can be written down in RON and built from it:
//!
//! ```text
//! #![enable(implicit_some)]
//! (
//!     name: "Sol",
//!     bodies: [
//!         Solar(name: "Sun", mass: 1.989e30, radius: 695700.0, temperature: 5778.0),
//!         Planetary(name: "Earth", mass: 5.972e24, radius: 6371.0),
//!         Generic(mass: 1.0e20, radius: 100.0),
//!     ],
//!     orbits: [
//!         (primary: "Sun", orbiting: "Earth", semimajor_axis: 149.6e6, eccentricity: 0.0167),
//!     ],
//! )
//! ```
//!
//! Bodies without a name are numbered by the universe as they are added.

use color_eyre::eyre::{self, WrapErr};
use ron::{extensions::Extensions, ser::PrettyConfig, Options};
use serde::{Deserialize, Serialize};

use crate::{
    bodies::{BodyKind, CelestialBody, UNNAMED},
    error::Result,
    universe::{Universe, DEFAULT_UNIVERSE_NAME},
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniverseDescription {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub bodies: Vec<BodyDescription>,
    #[serde(default)]
    pub orbits: Vec<OrbitDescription>,
}

fn default_name() -> String {
    DEFAULT_UNIVERSE_NAME.to_owned()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BodyDescription {
    Generic {
        #[serde(default)]
        name: Option<String>,
        mass: f64,
        radius: f64,
    },
    BlackHole {
        #[serde(default)]
        name: Option<String>,
        mass: f64,
    },
    Solar {
        #[serde(default)]
        name: Option<String>,
        mass: f64,
        radius: f64,
        temperature: f64,
    },
    Planetary {
        #[serde(default)]
        name: Option<String>,
        mass: f64,
        radius: f64,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitDescription {
    pub primary: String,
    pub orbiting: String,
    pub semimajor_axis: f64,
    pub eccentricity: f64,
}

impl BodyDescription {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Generic { name, .. }
            | Self::BlackHole { name, .. }
            | Self::Solar { name, .. }
            | Self::Planetary { name, .. } => name.as_deref(),
        }
    }

    pub fn to_body(&self) -> Result<CelestialBody> {
        let body = match *self {
            Self::Generic { mass, radius, .. } => CelestialBody::new(mass, radius)?,
            Self::BlackHole { mass, .. } => CelestialBody::black_hole(mass)?,
            Self::Solar {
                mass,
                radius,
                temperature,
                ..
            } => CelestialBody::solar(mass, radius, temperature)?,
            Self::Planetary { mass, radius, .. } => CelestialBody::planetary(mass, radius)?,
        };
        Ok(match self.name() {
            Some(name) => body.with_name(name),
            None => body,
        })
    }
}

impl From<&CelestialBody> for BodyDescription {
    fn from(body: &CelestialBody) -> Self {
        let name = body.name().map(str::to_owned);
        let mass = body.mass();
        let radius = body.radius();
        match body.kind() {
            BodyKind::Generic => Self::Generic { name, mass, radius },
            BodyKind::BlackHole => Self::BlackHole { name, mass },
            BodyKind::Solar { temperature } => Self::Solar {
                name,
                mass,
                radius,
                temperature,
            },
            BodyKind::Planetary => Self::Planetary { name, mass, radius },
        }
    }
}

impl From<&Universe> for UniverseDescription {
    fn from(universe: &Universe) -> Self {
        let label = |id| {
            universe
                .body(id)
                .map(|body| body.label().to_owned())
                .unwrap_or_default()
        };
        Self {
            name: universe.name().to_owned(),
            bodies: universe
                .celestial_bodies()
                .map(BodyDescription::from)
                .collect(),
            orbits: universe
                .orbits()
                .iter()
                .map(|orbit| OrbitDescription {
                    primary: label(orbit.primary()),
                    orbiting: label(orbit.orbiting()),
                    semimajor_axis: orbit.semimajor_axis(),
                    eccentricity: orbit.eccentricity(),
                })
                .collect(),
        }
    }
}

impl UniverseDescription {
    pub fn from_ron_str(s: &str) -> eyre::Result<Self> {
        Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(s)
            .wrap_err("Failed to parse universe description")
    }

    pub fn to_ron_string(&self) -> eyre::Result<String> {
        ron::ser::to_string_pretty(
            self,
            PrettyConfig::default().extensions(Extensions::IMPLICIT_SOME),
        )
        .wrap_err("Failed to serialize universe description")
    }

    /// Registers every body, then every orbit, in the order listed.
    pub fn build(&self) -> eyre::Result<Universe> {
        let mut universe = Universe::new(self.name.as_str());
        for (index, description) in self.bodies.iter().enumerate() {
            let body = description.to_body().wrap_err_with(|| {
                format!(
                    "Invalid celestial body #{index} ({})",
                    description.name().unwrap_or(UNNAMED)
                )
            })?;
            universe
                .add_celestial_body(body)
                .wrap_err_with(|| format!("Could not add celestial body #{index}"))?;
        }
        for orbit in &self.orbits {
            universe
                .add_orbit_between(
                    &orbit.primary,
                    &orbit.orbiting,
                    orbit.semimajor_axis,
                    orbit.eccentricity,
                )
                .wrap_err_with(|| {
                    format!("Invalid orbit of {} around {}", orbit.orbiting, orbit.primary)
                })?;
        }
        Ok(universe)
    }
}

impl Universe {
    pub fn from_ron_str(s: &str) -> eyre::Result<Self> {
        UniverseDescription::from_ron_str(s)?.build()
    }

    pub fn to_ron_string(&self) -> eyre::Result<String> {
        UniverseDescription::from(self).to_ron_string()
    }
}
