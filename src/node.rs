use strum::{Display, EnumIs};

use crate::error::NetworkError;

/// Index of an interned node identifier.
///
/// Identifiers are interned in sorted order, so comparing two IDs compares the identifiers lexicographically.
pub type NodeID = usize;

/// What a node is to the virus.
#[derive(Clone, Copy, Debug, Display, EnumIs, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeKind {
    /// A protected node the virus must never occupy.
    Gate,
    /// Any other node.
    Regular,
}

impl NodeKind {
    /// Classify an identifier by the case of its first character; uppercase means [`Gate`](NodeKind::Gate).
    ///
    /// Fails with [`NetworkError::InvalidNode`] on an empty identifier.
    pub fn classify(ident: &str) -> Result<Self, NetworkError> {
        match ident.chars().next() {
            None => Err(NetworkError::InvalidNode),
            Some(first) if first.is_uppercase() => Ok(Self::Gate),
            Some(_) => Ok(Self::Regular),
        }
    }
}

/// A handle to one node of a [`Network`](crate::Network).
///
/// Handles are only meaningful within the network that issued them.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Node {
    // must stay the first field; the derived order relies on it
    pub(crate) id: NodeID,
    pub(crate) kind: NodeKind,
}

impl Node {
    /// Whether the virus loses on reaching this node.
    #[inline]
    pub fn is_gate(&self) -> bool {
        self.kind.is_gate()
    }

    /// See [`NodeKind`].
    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}
