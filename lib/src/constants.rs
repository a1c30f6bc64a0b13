//! Physical constants and unit conversion factors.

/// Speed of light in a vacuum (`m/s`)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Newtonian constant of gravitation (`m^3 kg^-1 s^-2`)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.673e-11;

/// Stefan-Boltzmann constant (`W m^-2 K^-4`)
pub const STEFAN_BOLTZMANN_CONSTANT: f64 = 5.67e-8;

/// Mass of the Sun (`kg`)
pub const SOLAR_MASS: f64 = 1.989e30;

/// Astronomical unit (`km`)
pub const ASTRONOMICAL_UNIT: f64 = 1.496e8;

pub const METERS_PER_KILOMETER: f64 = 1000.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
