//! The forest of orbital relationships derived from a list of orbits.

use std::collections::{BTreeSet, HashMap};

use tracing::trace;

use crate::{bodies::BodyId, orbit::Orbit};

/// Derived view of a set of orbits: which body each body orbits, and which
/// bodies orbit it.
///
/// Each body orbits at most one primary and no chain of orbits loops back
/// on itself (both enforced by [`Universe::add_orbit`]), so following
/// `children` from the roots visits every body in the graph exactly once.
///
/// [`Universe::add_orbit`]: crate::universe::Universe::add_orbit
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrbitalGraph {
    roots: Vec<BodyId>,
    primary_of: HashMap<BodyId, BodyId>,
    children: HashMap<BodyId, Vec<BodyId>>,
}

/// Nested form of one hierarchy in an [`OrbitalGraph`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrbitalTree {
    pub body: BodyId,
    pub children: Vec<OrbitalTree>,
}

impl OrbitalGraph {
    /// Children are listed in the order the orbits are given in, so
    /// `orbits` should already be sorted by semi-major axis.
    pub fn build(orbits: &[Orbit]) -> Self {
        let mut primary_of = HashMap::with_capacity(orbits.len());
        let mut children: HashMap<BodyId, Vec<BodyId>> = HashMap::new();
        for orbit in orbits {
            primary_of.insert(orbit.orbiting(), orbit.primary());
            children
                .entry(orbit.primary())
                .or_default()
                .push(orbit.orbiting());
        }

        let roots = children
            .keys()
            .filter(|primary| !primary_of.contains_key(primary))
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        trace!(
            orbits = orbits.len(),
            roots = roots.len(),
            "rebuilt orbital graph"
        );

        Self {
            roots,
            primary_of,
            children,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Bodies that are primaries but orbit nothing themselves, in id order.
    pub fn roots(&self) -> &[BodyId] {
        &self.roots
    }

    pub fn primary_of(&self, body: BodyId) -> Option<BodyId> {
        self.primary_of.get(&body).copied()
    }

    /// Bodies orbiting `body`, nearest first.
    pub fn children_of(&self, body: BodyId) -> &[BodyId] {
        self.children.get(&body).map_or(&[], Vec::as_slice)
    }

    /// Whether `body` takes part in any orbit, as primary or orbiting body.
    pub fn contains(&self, body: BodyId) -> bool {
        self.primary_of.contains_key(&body) || self.children.contains_key(&body)
    }

    /// Whether `ancestor` is `body` itself or one of the primaries `body`
    /// (transitively) orbits.
    pub fn is_ancestor(&self, ancestor: BodyId, body: BodyId) -> bool {
        let mut current = Some(body);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.primary_of(id);
        }
        false
    }

    /// Pre-order traversal of the forest yielding `(depth, body)`, roots at
    /// depth 0.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            graph: self,
            stack: self.roots.iter().rev().map(|&root| (0, root)).collect(),
        }
    }

    /// Materialize the forest as nested trees, one per root.
    pub fn tree(&self) -> Vec<OrbitalTree> {
        // Pre-order lists every parent before its children; attaching nodes
        // in reverse therefore completes every subtree before its parent
        // is reached.
        let order = self.walk().map(|(_, body)| body).collect::<Vec<_>>();
        let mut finished: HashMap<BodyId, OrbitalTree> = HashMap::with_capacity(order.len());
        for &body in order.iter().rev() {
            let children = self
                .children_of(body)
                .iter()
                .filter_map(|child| finished.remove(child))
                .collect();
            finished.insert(body, OrbitalTree { body, children });
        }
        self.roots
            .iter()
            .filter_map(|root| finished.remove(root))
            .collect()
    }
}

pub struct Walk<'a> {
    graph: &'a OrbitalGraph,
    stack: Vec<(usize, BodyId)>,
}

impl Iterator for Walk<'_> {
    type Item = (usize, BodyId);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, body) = self.stack.pop()?;
        self.stack.extend(
            self.graph
                .children_of(body)
                .iter()
                .rev()
                .map(|&child| (depth + 1, child)),
        );
        Some((depth, body))
    }
}
