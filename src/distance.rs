use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use crate::corridor::ActiveCorridors;
use crate::network::Network;
use crate::node::Node;
use crate::order;

/// Hop counts from one source node. Nodes absent from the map are unreachable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Distances(HashMap<Node, usize>);

impl Distances {
    #[inline]
    pub(crate) fn get(&self, node: Node) -> Option<usize> {
        self.0.get(&node).copied()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Node, usize)> + '_ {
        self.0.iter().map(|(node, dist)| (*node, *dist))
    }
}

/// Breadth-first hop counts from `source` over the corridors `active` leaves intact.
///
/// Neighbors are discovered in identifier order.
/// A source with no corridors, or one the network has never seen, reaches only itself.
pub(crate) fn distances_from(network: &Network, source: Node, active: &ActiveCorridors) -> Distances {
    let mut dist = HashMap::from([(source, 0)]);
    let mut queue = VecDeque::from([(source, 0)]);

    while let Some((current, hops)) = queue.pop_front() {
        for neighbor in network.neighbors(current, active) {
            if let Entry::Vacant(slot) = dist.entry(neighbor) {
                slot.insert(hops + 1);
                queue.push_back((neighbor, hops + 1));
            }
        }
    }

    Distances(dist)
}

/// The gate closest to `position` and its distance, ties going to the smallest identifier.
/// `None` if no gate is reachable, i.e. the virus is contained.
pub(crate) fn nearest_gate(network: &Network, position: Node, active: &ActiveCorridors) -> Option<(Node, usize)> {
    let dist = distances_from(network, position, active);
    order::first(dist.iter()
        .filter(|(node, _)| node.is_gate())
        .map(|(gate, hops)| (hops, gate)))
        .map(|(hops, gate)| (gate, hops))
}
