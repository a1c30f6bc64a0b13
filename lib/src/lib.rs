#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::doc_markdown
)]
pub mod arena;
pub mod bodies;
pub mod constants;
pub mod description;
pub mod error;
pub mod facts;
pub mod graph;
pub mod orbit;
pub mod physics;
pub mod shared;
pub mod universe;

pub use bodies::{BodyId, BodyKind, CelestialBody, UniverseId};
pub use error::{CollisionKind, Error, Result};
pub use graph::{OrbitalGraph, OrbitalTree};
pub use orbit::Orbit;
pub use shared::SharedUniverse;
pub use universe::Universe;
