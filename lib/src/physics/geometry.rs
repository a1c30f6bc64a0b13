//! Sphere volume, density and weight conversion.

use std::f64::consts;

use super::validate;
use crate::error::Result;

/// Volume of a sphere, in the cube of the unit of `radius`.
pub fn volume_of_sphere(radius: f64) -> Result<f64> {
    let radius = validate::positive("radius", radius)?;
    Ok(libm::pow(radius, 3.0) * consts::PI * (4.0 / 3.0))
}

pub fn density(mass: f64, volume: f64) -> Result<f64> {
    let mass = validate::positive("mass", mass)?;
    let volume = validate::positive("volume", volume)?;
    Ok(mass / volume)
}

/// Convert a weight in Newtons into kilograms under the given
/// gravitational acceleration (`m/s^2`).
pub fn weight_in_kilograms(weight_in_newtons: f64, gravitational_acceleration: f64) -> Result<f64> {
    let weight_in_newtons = validate::positive("weight_in_newtons", weight_in_newtons)?;
    let gravitational_acceleration =
        validate::positive("gravitational_acceleration", gravitational_acceleration)?;
    Ok(weight_in_newtons / gravitational_acceleration)
}
