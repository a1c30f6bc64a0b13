//! Fact sheets for the Sun and the planets of the solar system.
//!
//! Figures are mean values; distances and radii in kilometers, masses in
//! kilograms, gravity in `m/s^2`, periods in days.

use crate::{
    bodies::CelestialBody,
    error::Result,
    universe::Universe,
};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StarFacts {
    pub name: &'static str,
    pub mass: f64,
    pub radius: f64,
    /// Mean surface temperature (`K`)
    pub temperature: f64,
    /// (`W`)
    pub luminosity: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanetFacts {
    pub name: &'static str,
    pub mass: f64,
    pub radius: f64,
    pub gravity: f64,
    /// Semi-major axis of the orbit around the Sun.
    pub distance_from_sun: f64,
    pub orbital_eccentricity: f64,
    pub perihelion: f64,
    pub aphelion: f64,
    pub orbital_period: f64,
}

pub const SUN: StarFacts = StarFacts {
    name: "Sun",
    mass: 1.989e30,
    radius: 695_700.0,
    temperature: 5778.0,
    luminosity: 3.828e26,
};

pub const MERCURY: PlanetFacts = PlanetFacts {
    name: "Mercury",
    mass: 3.301e23,
    radius: 2439.7,
    gravity: 3.7,
    distance_from_sun: 57.909e6,
    orbital_eccentricity: 0.2056,
    perihelion: 46.0e6,
    aphelion: 69.8e6,
    orbital_period: 87.97,
};

pub const VENUS: PlanetFacts = PlanetFacts {
    name: "Venus",
    mass: 4.867e24,
    radius: 6051.8,
    gravity: 8.9,
    distance_from_sun: 108.209e6,
    orbital_eccentricity: 0.0068,
    perihelion: 107.5e6,
    aphelion: 108.9e6,
    orbital_period: 224.70,
};

pub const EARTH: PlanetFacts = PlanetFacts {
    name: "Earth",
    mass: 5.972e24,
    radius: 6371.0,
    gravity: 9.8,
    distance_from_sun: 149.596e6,
    orbital_eccentricity: 0.0167,
    perihelion: 147.1e6,
    aphelion: 152.1e6,
    orbital_period: 365.26,
};

pub const MARS: PlanetFacts = PlanetFacts {
    name: "Mars",
    mass: 6.417e23,
    radius: 3389.5,
    gravity: 3.7,
    distance_from_sun: 227.923e6,
    orbital_eccentricity: 0.0935,
    perihelion: 206.6e6,
    aphelion: 249.2e6,
    orbital_period: 686.98,
};

pub const JUPITER: PlanetFacts = PlanetFacts {
    name: "Jupiter",
    mass: 1.898e27,
    radius: 69_911.0,
    gravity: 24.8,
    distance_from_sun: 778.570e6,
    orbital_eccentricity: 0.0489,
    perihelion: 740.5e6,
    aphelion: 816.6e6,
    orbital_period: 4332.59,
};

pub const SATURN: PlanetFacts = PlanetFacts {
    name: "Saturn",
    mass: 5.683e26,
    radius: 58_232.0,
    gravity: 10.4,
    distance_from_sun: 1433.529e6,
    orbital_eccentricity: 0.0565,
    perihelion: 1352.6e6,
    aphelion: 1514.5e6,
    orbital_period: 10_759.22,
};

pub const URANUS: PlanetFacts = PlanetFacts {
    name: "Uranus",
    mass: 8.681e25,
    radius: 25_362.0,
    gravity: 8.9,
    distance_from_sun: 2872.463e6,
    orbital_eccentricity: 0.0457,
    perihelion: 2741.3e6,
    aphelion: 3003.6e6,
    orbital_period: 30_685.4,
};

pub const NEPTUNE: PlanetFacts = PlanetFacts {
    name: "Neptune",
    mass: 1.024e26,
    radius: 24_622.0,
    gravity: 11.2,
    distance_from_sun: 4495.060e6,
    orbital_eccentricity: 0.0113,
    perihelion: 4444.5e6,
    aphelion: 4545.7e6,
    orbital_period: 60_189.0,
};

pub const PLANETS: [PlanetFacts; 8] = [
    MERCURY, VENUS, EARTH, MARS, JUPITER, SATURN, URANUS, NEPTUNE,
];

pub const MOON: PlanetFacts = PlanetFacts {
    name: "Moon",
    mass: 7.342e22,
    radius: 1737.4,
    gravity: 1.62,
    // Around the Earth rather than the Sun.
    distance_from_sun: 384_400.0,
    orbital_eccentricity: 0.0549,
    perihelion: 363_300.0,
    aphelion: 405_500.0,
    orbital_period: 27.32,
};

/// The Sun, its eight planets and the Moon, with their orbits.
pub fn solar_system() -> Result<Universe> {
    let mut universe = Universe::new("Solar System");
    universe.add_celestial_body(
        CelestialBody::solar(SUN.mass, SUN.radius, SUN.temperature)?.with_name(SUN.name),
    )?;
    for planet in PLANETS.iter().chain([&MOON]) {
        universe.add_celestial_body(
            CelestialBody::planetary(planet.mass, planet.radius)?.with_name(planet.name),
        )?;
    }
    for planet in PLANETS {
        universe.add_orbit_between(
            SUN.name,
            planet.name,
            planet.distance_from_sun,
            planet.orbital_eccentricity,
        )?;
    }
    universe.add_orbit_between(
        EARTH.name,
        MOON.name,
        MOON.distance_from_sun,
        MOON.orbital_eccentricity,
    )?;
    Ok(universe)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn the_solar_system() {
        let universe = solar_system().unwrap();
        assert_eq!(universe.len(), 10);
        assert_eq!(universe.orbits().len(), 9);
        assert!(universe.untethered_bodies().is_empty());
        assert_eq!(
            universe.hierarchy_text(),
            "Solar System:\n\t-Sun\n\t\t-Mercury\n\t\t-Venus\n\t\t-Earth\n\t\t\t-Moon\n\t\t-Mars\
             \n\t\t-Jupiter\n\t\t-Saturn\n\t\t-Uranus\n\t\t-Neptune"
        );

        let moon = universe.orbits_around("Earth");
        assert_eq!(moon.len(), 1);
        assert_relative_eq!(moon[0].period().unwrap(), MOON.orbital_period, max_relative = 0.01);
        assert_relative_eq!(
            moon[0].period_duration().unwrap().as_seconds_f64(),
            MOON.orbital_period * 86_400.0,
            max_relative = 0.01
        );
    }
}
