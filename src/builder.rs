//! Construction of [`Network`]s from corridor lists.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use unordered_pair::UnorderedPair;

use crate::error::NetworkError;
use crate::network::Network;
use crate::node::{Node, NodeKind};

/// Separates the two endpoints of a corridor in text form.
pub const CORRIDOR_SEPARATOR: char = '-';

/// A builder for [`Network`]s, fed corridor by corridor or line by line.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// The first malformed corridor makes the builder invalid; from then on every method does nothing and [`build`](Self::build) reports that error.
#[derive(Clone, Default)]
pub struct NetworkBuilder {
    corridors: HashSet<UnorderedPair<String>>,
    invalid_reason: Option<NetworkError>,
}

impl NetworkBuilder {
    /// Construct an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one line of input of the form `NodeA-NodeB`.
    ///
    /// Surrounding whitespace is ignored and blank lines add nothing.
    /// May cause the builder to become invalid with [`InvalidEdge`](NetworkError::InvalidEdge) if the separator is missing or repeated,
    /// or [`InvalidNode`](NetworkError::InvalidNode) if either side is empty.
    pub fn add_line(&mut self, line: &str) -> &mut Self {
        if self.invalid_reason.is_some() {
            return self;
        }

        let line = line.trim();
        if line.is_empty() {
            return self;
        }

        match line.split(CORRIDOR_SEPARATOR).collect_tuple() {
            Some((a, b)) => self.add_corridor(a, b),
            None => {
                self.invalid_reason = Some(NetworkError::InvalidEdge(line.to_owned()));
                self
            }
        }
    }

    /// Shorthand for multiple calls to [`Self::add_line`], with the same conditions.
    pub fn add_lines<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) -> &mut Self {
        for line in lines {
            self.add_line(line);
        }

        self
    }

    /// Add an undirected corridor between `a` and `b`. Adding the same corridor twice, in either order, has no further effect.
    ///
    /// May cause the builder to become invalid with [`InvalidNode`](NetworkError::InvalidNode) if either identifier is empty,
    /// or [`InvalidEdge`](NetworkError::InvalidEdge) if both are the same.
    pub fn add_corridor(&mut self, a: &str, b: &str) -> &mut Self {
        if self.invalid_reason.is_some() {
            return self;
        }

        if let Err(reason) = NodeKind::classify(a).and(NodeKind::classify(b)) {
            self.invalid_reason = Some(reason);
            return self;
        }

        if a == b {
            self.invalid_reason = Some(NetworkError::InvalidEdge(format!("{a}{CORRIDOR_SEPARATOR}{b}")));
            return self;
        }

        self.corridors.insert(UnorderedPair::from((a.to_owned(), b.to_owned())));
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&NetworkError)` otherwise.
    pub fn is_valid(&self) -> Option<&NetworkError> {
        self.invalid_reason.as_ref()
    }

    /// Convert the state of this builder into a [`Network`], or report why it cannot be.
    pub fn build(&self) -> Result<Network, NetworkError> {
        if let Some(reason) = &self.invalid_reason {
            return Err(reason.clone());
        }

        // interning in sorted order makes node handles compare like their identifiers
        let idents = self.corridors.iter()
            .flat_map(|UnorderedPair(a, b)| [a, b])
            .sorted()
            .dedup()
            .cloned()
            .collect_vec();

        let mut lookup = HashMap::with_capacity(idents.len());
        for (id, ident) in idents.iter().enumerate() {
            lookup.insert(ident.clone(), Node { id, kind: NodeKind::classify(ident)? });
        }

        let mut graph = UnGraphMap::with_capacity(idents.len(), self.corridors.len());
        for UnorderedPair(a, b) in self.corridors.iter() {
            graph.add_edge(lookup[a], lookup[b], ());
        }

        Ok(Network {
            graph,
            idents,
            lookup,
        })
    }
}
