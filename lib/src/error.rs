//! Error types shared by every fallible operation in the crate.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::bodies::BodyId;

pub type Result<T> = std::result::Result<T, Error>;

/// Which geometric limit of an orbit would bring the two bodies into
/// contact.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CollisionKind {
    /// The ellipse is so flat that the orbiting body cannot pass its
    /// primary without running into it.
    SemiminorAxis,
    /// The closest approach is within the combined radii.
    Perihelion,
}

impl fmt::Display for CollisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SemiminorAxis => write!(
                f,
                "the semi-minor axis is so small that the orbiting body could not pass by \
                 its primary body without colliding"
            ),
            Self::Perihelion => write!(
                f,
                "the perihelion is so close that the orbiting body could not circle its \
                 primary body without colliding"
            ),
        }
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
pub enum Error {
    #[error("{parameter} ({value}) must be a real number")]
    InvalidType { parameter: &'static str, value: f64 },

    #[error("{parameter} ({value}) must be {requirement}")]
    InvalidDomain {
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("collision: {0}")]
    Collision(CollisionKind),

    #[error("{0} does not exist in this universe")]
    NotFound(Arc<str>),

    /// An id, or an orbit between ids, handed out by another universe.
    #[error("celestial body {0} does not belong to this universe")]
    UnknownId(BodyId),

    #[error("a celestial body with the name {0} already exists in this universe")]
    DuplicateName(Arc<str>),

    #[error("celestial body names cannot be empty")]
    EmptyName,

    #[error("{body} already orbits {primary}")]
    AlreadyOrbiting { body: Arc<str>, primary: Arc<str> },

    #[error("{body} cannot orbit {primary}: {primary} is already part of {body}'s system")]
    CircularOrbit { body: Arc<str>, primary: Arc<str> },
}
