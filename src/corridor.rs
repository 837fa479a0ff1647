use std::collections::BTreeSet;

use crate::node::Node;

/// A corridor with exactly one gate endpoint, the only kind the operator may sever.
///
/// Ordered by gate, then neighbor; this is the order in which severances are tried.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Corridor {
    pub(crate) gate: Node,
    pub(crate) neighbor: Node,
}

impl Corridor {
    /// Orient the corridor between `a` and `b` gate-first, if it is severable at all.
    pub(crate) fn between(a: Node, b: Node) -> Option<Self> {
        match (a.is_gate(), b.is_gate()) {
            (true, false) => Some(Self { gate: a, neighbor: b }),
            (false, true) => Some(Self { gate: b, neighbor: a }),
            // regular-regular and gate-gate corridors are permanent
            _ => None,
        }
    }
}

/// The still-intact severable corridors on one search branch.
///
/// Every other corridor of the network is always intact, so this set alone determines which corridors are active.
/// Values are persistent: severing produces a new set and leaves the old one untouched for sibling branches.
/// The backing set is sorted, so two sets holding the same corridors are equal and hash alike however they were built.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct ActiveCorridors(BTreeSet<Corridor>);

impl ActiveCorridors {
    /// Whether the corridor between `a` and `b` can currently be traversed.
    /// Assumes such a corridor exists in the network.
    #[inline]
    pub(crate) fn permits(&self, a: Node, b: Node) -> bool {
        match Corridor::between(a, b) {
            None => true,
            Some(corridor) => self.0.contains(&corridor),
        }
    }

    #[inline]
    pub(crate) fn contains(&self, corridor: &Corridor) -> bool {
        self.0.contains(corridor)
    }

    /// A copy of this set with `corridor` severed.
    pub(crate) fn without(&self, corridor: &Corridor) -> Self {
        let mut remaining = self.0.clone();
        remaining.remove(corridor);
        Self(remaining)
    }

    /// Corridors in candidate order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Corridor> {
        self.0.iter()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub(crate) fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl FromIterator<Corridor> for ActiveCorridors {
    fn from_iter<T: IntoIterator<Item = Corridor>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
