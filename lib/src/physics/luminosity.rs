use std::f64::consts;

use super::validate;
use crate::{
    constants::{METERS_PER_KILOMETER, STEFAN_BOLTZMANN_CONSTANT},
    error::Result,
};

/// Luminosity of a body treated as a black body radiator, by the
/// Stefan-Boltzmann law (`W`).
///
/// `radius` is in kilometers, `temperature` is the mean surface
/// temperature in Kelvin.
pub fn stefan_boltzmann_luminosity(radius: f64, temperature: f64) -> Result<f64> {
    let radius = validate::positive("radius", radius)?;
    let temperature = validate::positive("temperature", temperature)?;
    Ok(4.0
        * consts::PI
        * libm::pow(radius * METERS_PER_KILOMETER, 2.0)
        * STEFAN_BOLTZMANN_CONSTANT
        * libm::pow(temperature, 4.0))
}
