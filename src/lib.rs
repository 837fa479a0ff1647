#![warn(missing_docs)]

//! # `quarantine`
//!
//! A planner for the gated virus containment puzzle.
//! A virus sits on one node of an undirected network of corridors and keeps moving one step toward the nearest gate (a node whose identifier starts with an uppercase letter).
//! Before each move the operator may sever one intact corridor touching a gate; the goal is a sequence of severances after which no gate is reachable.
//!
//! Begin by building a [`Network`] with a [`NetworkBuilder`], line by line (`NodeA-NodeB`) or corridor by corridor.
//! Then hand it to a [`Planner`] and call [`plan()`](Planner::plan) with the virus's start node, yielding a [`Containment`].
//!
//! # Internals
//! The virus is fully deterministic, so the puzzle is a one-player game and can be searched exhaustively.
//! A search state is the virus position plus the set of severable corridors still intact; every other corridor is permanent.
//!
//! The virus picks its target by breadth-first search from its position: the nearest gate, ties going to the smallest identifier.
//! It then steps to the neighbor one hop closer to that gate, as measured by a second breadth-first search outward from the gate, again preferring the smallest identifier.
//!
//! The planner tries every intact severable corridor in (gate, neighbor) order.
//! A severance that on its own leaves no gate reachable finishes the plan immediately.
//! Otherwise the virus moves; if it lands on a gate the severance is abandoned, else the search recurses from the new state.
//! Outcomes of resolved states, failures included, are cached for the duration of one [`plan()`](Planner::plan) call.
//!
//! Identifiers are interned in sorted order, so node handles compare exactly like identifiers and every tie-break above reduces to taking the least element.

pub use builder::NetworkBuilder;
pub use error::{NetworkError, SolveError};
pub use network::Network;
pub use node::{Node, NodeKind};
pub use solver::{Containment, Planner, Replay, ReplayOutcome, Severance};

/// Where the virus starts unless told otherwise.
pub const DEFAULT_VIRUS_START: &str = "a";

pub mod builder;
pub(crate) mod corridor;
pub(crate) mod distance;
pub(crate) mod error;
pub(crate) mod network;
pub(crate) mod node;
pub(crate) mod order;
pub(crate) mod solver;
pub(crate) mod virus;
#[cfg(feature = "wasm")]
pub mod wasm;
