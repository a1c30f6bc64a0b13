//! A container for celestial bodies and the orbits between them.

use std::{collections::HashMap, sync::Arc};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use tracing::debug;

use crate::{
    arena::Arena,
    bodies::{BodyId, CelestialBody, UniverseId, UNNAMED},
    error::{Error, Result},
    graph::OrbitalGraph,
    orbit::Orbit,
};

pub const DEFAULT_UNIVERSE_NAME: &str = "Unnamed Universe";

/// Owns a set of uniquely named celestial bodies and the orbits between
/// them, and keeps the [`OrbitalGraph`] of those orbits up to date.
///
/// Every operation either succeeds completely or leaves the universe
/// untouched.
#[derive(Debug)]
pub struct Universe {
    id: UniverseId,
    name: Arc<str>,
    bodies: Arena<BodyId, CelestialBody>,
    names: HashMap<Arc<str>, BodyId>,
    /// Sorted by ascending semi-major axis.
    orbits: Vec<Orbit>,
    orbital_graph: OrbitalGraph,
    unnamed_id: u64,
}

impl Clone for Universe {
    /// The clone is a separate universe: its bodies and orbits are not
    /// accepted by the original, nor the other way round.
    fn clone(&self) -> Self {
        let id = UniverseId::next();
        let mut bodies = self.bodies.clone();
        bodies.values_mut().for_each(|body| body.move_to(id));
        let mut orbits = self.orbits.clone();
        orbits.iter_mut().for_each(|orbit| orbit.move_to(id));
        Self {
            id,
            name: self.name.clone(),
            bodies,
            names: self.names.clone(),
            orbits,
            orbital_graph: self.orbital_graph.clone(),
            unnamed_id: self.unnamed_id,
        }
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(DEFAULT_UNIVERSE_NAME)
    }
}

impl Universe {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            id: UniverseId::next(),
            name: name.into(),
            bodies: Arena::new(),
            names: HashMap::new(),
            orbits: Vec::new(),
            orbital_graph: OrbitalGraph::default(),
            unnamed_id: 1,
        }
    }

    pub fn id(&self) -> UniverseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Adds a celestial body to the universe. Bodies without a name are
    /// given the first free `Unnamed Celestial Body <n>` name.
    pub fn add_celestial_body(&mut self, mut body: CelestialBody) -> Result<BodyId> {
        let name: Arc<str> = match body.name_arc() {
            Some(name) => name.clone(),
            None => self.next_unnamed_name(),
        };
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.names.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }

        let universe = self.id;
        let id = self.bodies.push_with(|id| {
            body.register(universe, id, name.clone());
            body
        });
        self.names.insert(name.clone(), id);
        debug!(universe = %self.name, body = %name, ?id, "added celestial body");
        Ok(id)
    }

    pub fn rename_celestial_body(&mut self, old: &str, new: impl Into<Arc<str>>) -> Result<()> {
        let new = new.into();
        let id = self.id_of(old).ok_or_else(|| Error::NotFound(old.into()))?;
        if new.is_empty() {
            return Err(Error::EmptyName);
        }
        if &*new == old {
            return Ok(());
        }
        if self.names.contains_key(&new) {
            return Err(Error::DuplicateName(new));
        }

        let Some(body) = self.bodies.get_mut(id) else {
            return Err(Error::NotFound(old.into()));
        };
        body.set_name(new.clone());
        self.names.remove(old);
        self.names.insert(new.clone(), id);
        debug!(universe = %self.name, old, new = %new, "renamed celestial body");
        Ok(())
    }

    /// Adds an orbit to the universe, checking that:
    /// - the orbit was made from bodies of this universe,
    /// - the orbiting body does not already orbit another primary,
    /// - the orbiting body is not the primary itself or one of the bodies
    ///   the primary orbits.
    pub fn add_orbit(&mut self, orbit: Orbit) -> Result<()> {
        if orbit.universe() != self.id {
            return Err(Error::UnknownId(orbit.orbiting()));
        }
        let primary = self.registered_name(orbit.primary())?;
        let orbiting = self.registered_name(orbit.orbiting())?;
        if let Some(current) = self.orbital_graph.primary_of(orbit.orbiting()) {
            return Err(Error::AlreadyOrbiting {
                body: orbiting,
                primary: self.registered_name(current)?,
            });
        }
        if self
            .orbital_graph
            .is_ancestor(orbit.orbiting(), orbit.primary())
        {
            return Err(Error::CircularOrbit {
                body: orbiting,
                primary,
            });
        }

        self.orbits.push(orbit);
        self.orbits
            .sort_by_key(|orbit| OrderedFloat(orbit.semimajor_axis()));
        self.orbital_graph = OrbitalGraph::build(&self.orbits);
        debug!(universe = %self.name, %primary, %orbiting, "added orbit");
        Ok(())
    }

    /// Looks up both bodies by name, creates the orbit and adds it.
    pub fn add_orbit_between(
        &mut self,
        primary: &str,
        orbiting: &str,
        semimajor_axis: f64,
        eccentricity: f64,
    ) -> Result<()> {
        let primary = self
            .celestial_body(primary)
            .ok_or_else(|| Error::NotFound(primary.into()))?;
        let orbiting = self
            .celestial_body(orbiting)
            .ok_or_else(|| Error::NotFound(orbiting.into()))?;
        let orbit = Orbit::new(primary, orbiting, semimajor_axis, eccentricity)?;
        self.add_orbit(orbit)
    }

    /// Bodies that neither orbit nor are orbited by anything, in the order
    /// they were added.
    pub fn untethered_bodies(&self) -> Vec<&CelestialBody> {
        self.bodies
            .iter()
            .filter(|(id, _)| !self.orbital_graph.contains(*id))
            .map(|(_, body)| body)
            .collect()
    }

    /// An indented listing of every orbital hierarchy, e.g.
    ///
    /// ```text
    /// Milky Way:
    ///     -Black Hole
    ///         -Sun A
    ///             -Planet A
    ///                 -Moon A
    ///             -Planet B
    ///         -Sun B
    /// ```
    ///
    /// Levels are indented with tabs.
    pub fn hierarchy_text(&self) -> String {
        if self.orbital_graph.is_empty() {
            return format!("No orbits detected in {}", self.name);
        }
        let lines = self
            .orbital_graph
            .walk()
            .map(|(depth, id)| format!("{}-{}", "\t".repeat(depth + 1), self.bodies[id].label()))
            .join("\n");
        format!("{}:\n{lines}", self.name)
    }

    /// All bodies, in the order they were added.
    pub fn celestial_bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.values()
    }

    pub fn celestial_body(&self, name: &str) -> Option<&CelestialBody> {
        self.id_of(name).and_then(|id| self.bodies.get(id))
    }

    pub fn body(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id)
    }

    pub fn id_of(&self, name: &str) -> Option<BodyId> {
        self.names.get(name).copied()
    }

    /// All orbits, nearest (smallest semi-major axis) first.
    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    pub fn orbital_graph(&self) -> &OrbitalGraph {
        &self.orbital_graph
    }

    /// The body the named body orbits, if any.
    pub fn primary_of(&self, name: &str) -> Option<&CelestialBody> {
        let id = self.id_of(name)?;
        self.orbital_graph
            .primary_of(id)
            .and_then(|primary| self.bodies.get(primary))
    }

    /// Bodies orbiting the named body, nearest first.
    pub fn satellites_of(&self, name: &str) -> Vec<&CelestialBody> {
        self.id_of(name)
            .map(|id| {
                self.orbital_graph
                    .children_of(id)
                    .iter()
                    .filter_map(|&child| self.bodies.get(child))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Orbits around the named body, nearest first.
    pub fn orbits_around(&self, name: &str) -> Vec<&Orbit> {
        let Some(id) = self.id_of(name) else {
            return Vec::new();
        };
        self.orbits.iter().filter(|orbit| orbit.primary() == id).collect()
    }

    fn registered_name(&self, id: BodyId) -> Result<Arc<str>> {
        self.bodies
            .get(id)
            .and_then(CelestialBody::name_arc)
            .cloned()
            .ok_or(Error::UnknownId(id))
    }

    /// Numbers are never reused, and names already taken by another body
    /// are skipped.
    fn next_unnamed_name(&mut self) -> Arc<str> {
        loop {
            let name: Arc<str> = format!("{UNNAMED} {}", self.unnamed_id).into();
            self.unnamed_id += 1;
            if !self.names.contains_key(&name) {
                return name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::CollisionKind,
        facts::{EARTH, MARS, MOON, SUN},
        graph::OrbitalTree,
    };

    fn planet(name: &str) -> CelestialBody {
        CelestialBody::planetary(1.0e22, 1000.0).unwrap().with_name(name)
    }

    /// The Sun and the Earth, registered but not yet orbiting.
    fn sun_and_earth() -> Universe {
        let mut universe = Universe::new("Sol");
        universe
            .add_celestial_body(CelestialBody::new(SUN.mass, SUN.radius).unwrap().with_name("Sun"))
            .unwrap();
        universe
            .add_celestial_body(
                CelestialBody::new(EARTH.mass, EARTH.radius)
                    .unwrap()
                    .with_name("Earth"),
            )
            .unwrap();
        universe
    }

    fn labels<'a>(bodies: impl IntoIterator<Item = &'a CelestialBody>) -> Vec<&'a str> {
        bodies.into_iter().map(CelestialBody::label).collect()
    }

    #[test]
    fn earth_orbits_the_sun() {
        let mut universe = sun_and_earth();
        universe
            .add_orbit_between("Sun", "Earth", 149.6e6, 0.0167)
            .unwrap();

        let sun = universe.id_of("Sun").unwrap();
        let earth = universe.id_of("Earth").unwrap();
        assert_eq!(
            universe.orbital_graph().tree(),
            vec![OrbitalTree {
                body: sun,
                children: vec![OrbitalTree {
                    body: earth,
                    children: vec![],
                }],
            }]
        );
        assert_eq!(universe.primary_of("Earth").map(CelestialBody::label), Some("Sun"));
        assert_eq!(universe.primary_of("Sun"), None);
        assert_eq!(labels(universe.satellites_of("Sun")), vec!["Earth"]);
        assert_eq!(universe.orbits_around("Sun").len(), 1);
        assert!(universe.orbits_around("Earth").is_empty());
        assert!(universe.orbits_around("Pluto").is_empty());
    }

    #[test]
    fn colliding_orbit_is_rejected_and_nothing_changes() {
        let mut universe = sun_and_earth();
        assert_eq!(
            universe.add_orbit_between("Sun", "Earth", 700_000.0, 0.01),
            Err(Error::Collision(CollisionKind::SemiminorAxis))
        );
        assert!(universe.orbits().is_empty());
        assert!(universe.orbital_graph().is_empty());
        assert_eq!(universe.untethered_bodies().len(), 2);
    }

    #[test]
    fn a_body_orbits_at_most_one_primary() {
        let mut universe = sun_and_earth();
        universe.add_celestial_body(planet("Mars")).unwrap();
        universe
            .add_orbit_between("Sun", "Earth", EARTH.distance_from_sun, EARTH.orbital_eccentricity)
            .unwrap();
        let before = universe.orbital_graph().clone();

        assert_eq!(
            universe.add_orbit_between("Mars", "Earth", MARS.distance_from_sun, 0.0),
            Err(Error::AlreadyOrbiting {
                body: "Earth".into(),
                primary: "Sun".into(),
            })
        );
        assert_eq!(universe.orbits().len(), 1);
        assert_eq!(universe.orbital_graph(), &before);
    }

    #[test]
    fn orbits_cannot_loop() {
        let mut universe = sun_and_earth();
        universe.add_celestial_body(planet("Moon")).unwrap();
        universe
            .add_orbit_between("Sun", "Earth", EARTH.distance_from_sun, 0.0)
            .unwrap();
        universe
            .add_orbit_between("Earth", "Moon", MOON.distance_from_sun, 0.0)
            .unwrap();

        assert_eq!(
            universe.add_orbit_between("Moon", "Sun", 1.0e9, 0.0),
            Err(Error::CircularOrbit {
                body: "Sun".into(),
                primary: "Moon".into(),
            })
        );
        assert_eq!(universe.orbits().len(), 2);
        assert_eq!(universe.orbital_graph().walk().count(), 3);
    }

    #[test]
    fn unnamed_bodies_are_numbered() {
        let mut universe = Universe::default();
        assert_eq!(universe.name(), DEFAULT_UNIVERSE_NAME);
        let first = universe
            .add_celestial_body(CelestialBody::new(1.0, 1.0).unwrap())
            .unwrap();
        let second = universe
            .add_celestial_body(CelestialBody::new(1.0, 1.0).unwrap())
            .unwrap();
        assert_ne!(first, second);
        assert_eq!(universe.body(first).unwrap().name(), Some("Unnamed Celestial Body 1"));
        assert_eq!(universe.body(second).unwrap().name(), Some("Unnamed Celestial Body 2"));
        assert_eq!(universe.body(second).unwrap().id(), Some(second));
    }

    #[test]
    fn generated_names_skip_taken_ones() {
        let mut universe = Universe::default();
        universe.add_celestial_body(planet("Unnamed Celestial Body 1")).unwrap();
        universe.add_celestial_body(planet("Unnamed Celestial Body 3")).unwrap();
        let unnamed = (0..3)
            .map(|_| {
                let id = universe
                    .add_celestial_body(CelestialBody::new(1.0, 1.0).unwrap())
                    .unwrap();
                universe.body(id).unwrap().label().to_owned()
            })
            .collect::<Vec<_>>();
        assert_eq!(
            unnamed,
            vec![
                "Unnamed Celestial Body 2",
                "Unnamed Celestial Body 4",
                "Unnamed Celestial Body 5",
            ]
        );
    }

    #[test]
    fn names_are_unique_and_non_empty() {
        let mut universe = sun_and_earth();
        assert_eq!(
            universe.add_celestial_body(planet("Earth")),
            Err(Error::DuplicateName("Earth".into()))
        );
        assert_eq!(universe.add_celestial_body(planet("")), Err(Error::EmptyName));
        assert_eq!(universe.len(), 2);
        assert_eq!(labels(universe.celestial_bodies()), vec!["Sun", "Earth"]);
    }

    #[test]
    fn untethered_bodies() {
        let mut universe = Universe::new("Letters");
        for name in ["A", "B"] {
            universe.add_celestial_body(planet(name)).unwrap();
        }
        assert_eq!(labels(universe.untethered_bodies()), vec!["A", "B"]);

        universe.add_orbit_between("A", "B", 1.0e6, 0.0).unwrap();
        universe.add_celestial_body(planet("C")).unwrap();
        assert_eq!(labels(universe.untethered_bodies()), vec!["C"]);
    }

    #[test]
    fn renaming_keeps_orbits() {
        let mut universe = sun_and_earth();
        universe
            .add_orbit_between("Sun", "Earth", EARTH.distance_from_sun, 0.0)
            .unwrap();

        universe.rename_celestial_body("Earth", "Terra").unwrap();
        assert!(universe.celestial_body("Earth").is_none());
        assert_eq!(universe.celestial_body("Terra").unwrap().label(), "Terra");
        assert_eq!(universe.hierarchy_text(), "Sol:\n\t-Sun\n\t\t-Terra");

        universe.rename_celestial_body("Terra", "Terra").unwrap();
        assert_eq!(
            universe.rename_celestial_body("Earth", "Gaia"),
            Err(Error::NotFound("Earth".into()))
        );
        assert_eq!(
            universe.rename_celestial_body("Terra", "Sun"),
            Err(Error::DuplicateName("Sun".into()))
        );
        assert_eq!(
            universe.rename_celestial_body("Terra", ""),
            Err(Error::EmptyName)
        );
        assert_eq!(labels(universe.celestial_bodies()), vec!["Sun", "Terra"]);
    }

    #[test]
    fn orbits_are_sorted_by_semimajor_axis() {
        let mut universe = Universe::new("Sol");
        universe
            .add_celestial_body(CelestialBody::new(SUN.mass, SUN.radius).unwrap().with_name("Sun"))
            .unwrap();
        for name in ["Far", "Near", "Middle"] {
            universe.add_celestial_body(planet(name)).unwrap();
        }
        universe.add_orbit_between("Sun", "Far", 3.0e8, 0.0).unwrap();
        universe.add_orbit_between("Sun", "Near", 1.0e8, 0.0).unwrap();
        universe.add_orbit_between("Sun", "Middle", 2.0e8, 0.0).unwrap();

        let axes = universe
            .orbits()
            .iter()
            .map(Orbit::semimajor_axis)
            .collect::<Vec<_>>();
        assert_eq!(axes, vec![1.0e8, 2.0e8, 3.0e8]);
        assert_eq!(labels(universe.satellites_of("Sun")), vec!["Near", "Middle", "Far"]);
        assert_eq!(
            universe.hierarchy_text(),
            "Sol:\n\t-Sun\n\t\t-Near\n\t\t-Middle\n\t\t-Far"
        );
    }

    #[test]
    fn hierarchy_text_without_orbits() {
        assert_eq!(sun_and_earth().hierarchy_text(), "No orbits detected in Sol");
    }

    #[test]
    fn lookups_fail_for_unknown_bodies() {
        let mut universe = sun_and_earth();
        assert_eq!(
            universe.add_orbit_between("Sun", "Pluto", 5.9e9, 0.25),
            Err(Error::NotFound("Pluto".into()))
        );
        assert_eq!(
            universe.add_orbit_between("Vulcan", "Earth", 5.9e9, 0.25),
            Err(Error::NotFound("Vulcan".into()))
        );

        // Ids handed out by a bigger universe that this one never assigned.
        let mut other = Universe::new("Other");
        let ids = (0..4)
            .map(|i| other.add_celestial_body(planet(&format!("P{i}"))).unwrap())
            .collect::<Vec<_>>();
        let orbit = Orbit::new(
            other.body(ids[2]).unwrap(),
            other.body(ids[3]).unwrap(),
            1.0e6,
            0.0,
        )
        .unwrap();
        let error = universe.add_orbit(orbit).unwrap_err();
        assert_eq!(error, Error::UnknownId(ids[3]));
        assert_eq!(
            error.to_string(),
            "celestial body #3 does not belong to this universe"
        );
        assert!(universe.orbits().is_empty());
    }

    #[test]
    fn orbits_from_another_universe_are_rejected() {
        let sol = sun_and_earth();
        let orbit = Orbit::new(
            sol.celestial_body("Sun").unwrap(),
            sol.celestial_body("Earth").unwrap(),
            1.0e6,
            0.0,
        )
        .unwrap();

        // Both ids exist here too, but belong to bodies far too large for
        // the orbit.
        let mut giants = Universe::new("Giants");
        for name in ["Giant A", "Giant B"] {
            giants
                .add_celestial_body(CelestialBody::new(1.0e30, 5.0e6).unwrap().with_name(name))
                .unwrap();
        }
        assert_eq!(
            giants.add_orbit(orbit.clone()),
            Err(Error::UnknownId(orbit.orbiting()))
        );
        assert!(giants.orbits().is_empty());
        assert_eq!(giants.hierarchy_text(), "No orbits detected in Giants");

        // A clone is a universe of its own.
        let mut copy = sol.clone();
        assert_ne!(copy.id(), sol.id());
        let earth = sol.id_of("Earth").unwrap();
        assert_eq!(copy.add_orbit(orbit), Err(Error::UnknownId(earth)));
        let own = Orbit::new(
            copy.celestial_body("Sun").unwrap(),
            copy.celestial_body("Earth").unwrap(),
            1.0e6,
            0.0,
        )
        .unwrap();
        copy.add_orbit(own).unwrap();
        assert_eq!(copy.hierarchy_text(), "Sol:\n\t-Sun\n\t\t-Earth");
        assert!(sol.orbits().is_empty());
    }
}
