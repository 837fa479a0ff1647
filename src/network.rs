use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;

use crate::corridor::{ActiveCorridors, Corridor};
use crate::node::Node;
use crate::order;
use crate::solver::Severance;

/// An undirected network of corridors between named nodes, some of which are gates.
///
/// Networks should be built using a [`NetworkBuilder`](crate::builder::NetworkBuilder) and are never mutated afterwards.
/// Severing happens on [`ActiveCorridors`] views handed around by the search, not on the network itself.
pub struct Network {
    pub(crate) graph: UnGraphMap<Node, ()>,
    // indexed by NodeID, sorted
    pub(crate) idents: Vec<String>,
    pub(crate) lookup: HashMap<String, Node>,
}

impl Network {
    /// The node named `ident`, if the network has one.
    pub fn node(&self, ident: &str) -> Option<Node> {
        self.lookup.get(ident).copied()
    }

    /// The identifier of `node`.
    pub fn ident(&self, node: Node) -> &str {
        &self.idents[node.id]
    }

    /// All gates, in identifier order.
    pub fn gates(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.nodes().filter(Node::is_gate).sorted()
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct corridors, severed or not.
    pub fn corridor_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Every severable corridor, all intact.
    pub(crate) fn intact(&self) -> ActiveCorridors {
        self.graph.all_edges()
            .filter_map(|(a, b, _)| Corridor::between(a, b))
            .collect()
    }

    /// Nodes sharing an active corridor with `node`, in identifier order.
    pub(crate) fn neighbors(&self, node: Node, active: &ActiveCorridors) -> Vec<Node> {
        order::ranked(self.graph.neighbors(node).filter(|other| active.permits(node, *other)))
    }

    /// Active corridors with one gate endpoint, gate first, in the order they are tried as severances.
    pub(crate) fn gate_adjacent_edges(&self, active: &ActiveCorridors) -> Vec<Corridor> {
        order::ranked(active.iter().copied())
    }

    pub(crate) fn severance(&self, corridor: &Corridor) -> Severance {
        Severance {
            gate: self.ident(corridor.gate).to_owned(),
            neighbor: self.ident(corridor.neighbor).to_owned(),
        }
    }

    /// Resolve a severance back to a corridor of this network, if it names one.
    pub(crate) fn corridor(&self, severance: &Severance) -> Option<Corridor> {
        let gate = self.node(&severance.gate)?;
        let neighbor = self.node(&severance.neighbor)?;
        if !self.graph.contains_edge(gate, neighbor) {
            return None;
        }

        Corridor::between(gate, neighbor).filter(|corridor| corridor.gate == gate)
    }
}

impl Display for Network {
    /// One `NodeA-NodeB` line per corridor, in identifier order, so the output parses back into the same network.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let lines = order::ranked(self.graph.all_edges().map(|(a, b, _)| if a < b { (a, b) } else { (b, a) }));
        for (a, b) in lines {
            writeln!(f, "{}-{}", self.ident(a), self.ident(b))?;
        }

        Ok(())
    }
}
