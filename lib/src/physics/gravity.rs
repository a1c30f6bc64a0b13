//! Newtonian gravity and the Schwarzschild radius.

use super::validate;
use crate::{
    constants::{GRAVITATIONAL_CONSTANT, METERS_PER_KILOMETER, SPEED_OF_LIGHT},
    error::Result,
};

/// Gravitational force between two objects (`N`), by the law of
/// universal gravitation.
///
/// `distance` is in kilometers.
pub fn gravitational_force(mass_one: f64, mass_two: f64, distance: f64) -> Result<f64> {
    let mass_one = validate::positive("mass_one", mass_one)?;
    let mass_two = validate::positive("mass_two", mass_two)?;
    let distance = validate::positive("distance", distance)?;
    Ok(GRAVITATIONAL_CONSTANT * mass_one * mass_two
        / libm::pow(distance * METERS_PER_KILOMETER, 2.0))
}

/// Gravitational acceleration at the surface of a body of the given mass
/// and radius (`m/s^2`).
pub fn gravitational_acceleration(mass: f64, radius: f64) -> Result<f64> {
    let mass = validate::positive("mass", mass)?;
    let radius = validate::positive("radius", radius)?;
    Ok(GRAVITATIONAL_CONSTANT * mass / libm::pow(radius * METERS_PER_KILOMETER, 2.0))
}

/// Radius of the event horizon of a black hole of the given mass (`m`).
pub fn schwarzschild_radius(mass: f64) -> Result<f64> {
    let mass = validate::positive("mass", mass)?;
    Ok(2.0 * GRAVITATIONAL_CONSTANT * mass / libm::pow(SPEED_OF_LIGHT, 2.0))
}
