//! Ellipse geometry and Keplerian orbital period.

use std::f64::consts;

use super::validate;
use crate::{
    constants::{GRAVITATIONAL_CONSTANT, METERS_PER_KILOMETER, SECONDS_PER_DAY},
    error::Result,
};

/// `b = a * sqrt(1 - e^2)`
pub fn semiminor_axis(semimajor_axis: f64, eccentricity: f64) -> Result<f64> {
    let a = validate::positive("semimajor_axis", semimajor_axis)?;
    let e = validate::eccentricity(eccentricity)?;
    Ok(libm::sqrt(libm::pow(a, 2.0) * (1.0 - libm::pow(e, 2.0))))
}

/// `Rp = a * (1 - e)`
pub fn perihelion(semimajor_axis: f64, eccentricity: f64) -> Result<f64> {
    let a = validate::positive("semimajor_axis", semimajor_axis)?;
    let e = validate::eccentricity(eccentricity)?;
    Ok(a * (1.0 - e))
}

/// `Ra = a * (1 + e)`
pub fn aphelion(semimajor_axis: f64, eccentricity: f64) -> Result<f64> {
    let a = validate::positive("semimajor_axis", semimajor_axis)?;
    let e = validate::eccentricity(eccentricity)?;
    Ok(a * (1.0 + e))
}

/// Orbital period of an elliptical orbit (`days`).
///
/// `T^2 = 4 pi^2 a^3 / G(M1 + M2)`, with the semi-major axis in kilometers
/// and both masses in kilograms.
pub fn orbital_period(
    semimajor_axis: f64,
    primary_body_mass: f64,
    orbiting_body_mass: f64,
) -> Result<f64> {
    let a = validate::positive("semimajor_axis", semimajor_axis)? * METERS_PER_KILOMETER;
    let m1 = validate::positive("primary_body_mass", primary_body_mass)?;
    let m2 = validate::positive("orbiting_body_mass", orbiting_body_mass)?;
    let seconds =
        2.0 * consts::PI * libm::sqrt(libm::pow(a, 3.0) / (GRAVITATIONAL_CONSTANT * (m1 + m2)));
    Ok(seconds / SECONDS_PER_DAY)
}

/// Equilibrium temperature of a planet heated by its star (`K`).
///
/// `Tp = sqrt(Rs / 2a) * Ts`. The semi-major axis and the stellar radius
/// must share a unit.
pub fn equilibrium_temperature(
    semimajor_axis: f64,
    solar_radius: f64,
    solar_temperature: f64,
) -> Result<f64> {
    let a = validate::positive("semimajor_axis", semimajor_axis)?;
    let rs = validate::positive("solar_radius", solar_radius)?;
    let ts = validate::positive("solar_temperature", solar_temperature)?;
    Ok(libm::sqrt(rs / (2.0 * a)) * ts)
}
