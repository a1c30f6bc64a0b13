//! Closed-form physical quantities.
//!
//! Every function checks its arguments before computing anything: a NaN or
//! infinite argument is an [`Error::InvalidType`](crate::Error::InvalidType),
//! an argument outside its range is an
//! [`Error::InvalidDomain`](crate::Error::InvalidDomain).
//!
//! Units follow the rest of the crate: distances in kilometers, masses in
//! kilograms, temperatures in Kelvin.

pub mod geometry;
pub mod gravity;
pub mod luminosity;
pub mod orbital;
pub mod spectral;
pub(crate) mod validate;
