use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use tracing::{debug, trace};

use crate::builder::CORRIDOR_SEPARATOR;
use crate::corridor::{ActiveCorridors, Corridor};
use crate::distance::nearest_gate;
use crate::error::{NetworkError, SolveError};
use crate::network::Network;
use crate::node::Node;
use crate::virus::simulate_step;

/// One corridor to sever, named by its gate and the regular node on the other end.
///
/// Displays as `Gate-Neighbor`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Severance {
    /// The gate endpoint.
    pub gate: String,
    /// The regular endpoint.
    pub neighbor: String,
}

impl Severance {
    /// Name the corridor between `gate` and `neighbor`.
    pub fn new(gate: impl Into<String>, neighbor: impl Into<String>) -> Self {
        Self {
            gate: gate.into(),
            neighbor: neighbor.into(),
        }
    }
}

impl Display for Severance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.gate, CORRIDOR_SEPARATOR, self.neighbor)
    }
}

/// The result of planning from some start node.
///
/// The text output prints nothing for both [`AlreadyContained`](Containment::AlreadyContained) and [`Impossible`](Containment::Impossible);
/// they are kept apart here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Containment {
    /// No gate is reachable before anything is severed.
    AlreadyContained,
    /// Severing these corridors in order, one before each virus move, contains the virus.
    Plan(Vec<Severance>),
    /// Whatever is severed, the virus reaches a gate.
    Impossible,
}

impl Containment {
    /// The severances to apply, empty unless this is a [`Plan`](Containment::Plan).
    pub fn severances(&self) -> &[Severance] {
        match self {
            Self::Plan(severances) => severances.as_slice(),
            _ => &[],
        }
    }
}

impl Display for Containment {
    /// One `Gate-Neighbor` line per severance.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for severance in self.severances() {
            writeln!(f, "{}", severance)?;
        }

        Ok(())
    }
}

/// How a [`Replay`] ended.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReplayOutcome {
    /// The virus can no longer reach any gate.
    Contained,
    /// The virus stepped onto this gate.
    Breached(String),
    /// The plan ran out while the virus still had a path to a gate.
    Unfinished,
}

/// A plan played out against the virus.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Replay {
    /// Every position the virus occupied, starting with its start node.
    pub trajectory: Vec<String>,
    /// See [`ReplayOutcome`].
    pub outcome: ReplayOutcome,
}

/// A position of the virus together with the corridors still intact; the unit of memoization.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub(crate) struct SearchState {
    pub(crate) virus: Node,
    pub(crate) active: ActiveCorridors,
}

/// Outcomes of every state resolved during one search, successful (`Some`) or not (`None`).
///
/// Keys hold node handles, so a cache must never outlive the search over the network it was built for.
#[derive(Default)]
pub(crate) struct SearchCache(HashMap<SearchState, Option<Vec<Corridor>>>);

impl SearchCache {
    #[inline]
    fn get(&self, state: &SearchState) -> Option<&Option<Vec<Corridor>>> {
        self.0.get(state)
    }

    #[inline]
    fn insert(&mut self, state: SearchState, outcome: Option<Vec<Corridor>>) {
        self.0.insert(state, outcome);
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

/// Searches for a sequence of severances that keeps the virus away from every gate of a [`Network`].
/// Use [`Self::plan`] to search and [`Self::replay`] to check a plan.
///
/// The search is a depth-first backtracking search over severance candidates, tried in (gate, neighbor) identifier order.
/// The first plan found is returned:
/// as soon as one severance on its own cuts the virus off from every gate, that severance ends the plan, even if some other order would be shorter overall.
pub struct Planner<'a> {
    network: &'a Network,
}

impl<'a> From<&'a Network> for Planner<'a> {
    fn from(network: &'a Network) -> Self {
        Self { network }
    }
}

impl Planner<'_> {
    /// Plan severances for a virus starting at the node named `start`.
    ///
    /// A start the network has no corridors for is [`Containment::AlreadyContained`]; a start on a gate is [`Containment::Impossible`].
    /// Returns [`Err`] only if the movement policy ends up somewhere it should never be, see [`SolveError::UnreachableState`].
    pub fn plan(&self, start: &str) -> Result<Containment, SolveError> {
        let Some(start_node) = self.network.node(start) else {
            debug!(start, "start is not in the network");
            return Ok(Containment::AlreadyContained);
        };

        if start_node.is_gate() {
            debug!(start, "start is a gate");
            return Ok(Containment::Impossible);
        }

        let mut cache = SearchCache::default();
        let outcome = self.explore(&mut cache, start_node, &self.network.intact())?;
        debug!(start, states = cache.len(), found = outcome.is_some(), "search finished");

        Ok(match outcome {
            None => Containment::Impossible,
            Some(corridors) if corridors.is_empty() => Containment::AlreadyContained,
            Some(corridors) => Containment::Plan(corridors.iter()
                .map(|corridor| self.network.severance(corridor))
                .collect()),
        })
    }

    /// Resolve `(virus, active)`, consulting and then filling `cache`.
    pub(crate) fn explore(&self, cache: &mut SearchCache, virus: Node, active: &ActiveCorridors) -> Result<Option<Vec<Corridor>>, SolveError> {
        let state = SearchState { virus, active: active.clone() };
        if let Some(known) = cache.get(&state) {
            trace!(virus = self.network.ident(virus), intact = active.len(), "state already resolved");
            return Ok(known.clone());
        }

        let outcome = self.resolve(cache, virus, active)?;
        cache.insert(state, outcome.clone());
        Ok(outcome)
    }

    fn resolve(&self, cache: &mut SearchCache, virus: Node, active: &ActiveCorridors) -> Result<Option<Vec<Corridor>>, SolveError> {
        if nearest_gate(self.network, virus, active).is_none() {
            return Ok(Some(Vec::new()));
        }

        for corridor in self.network.gate_adjacent_edges(active) {
            let remaining = active.without(&corridor);
            debug_assert!(remaining.len() < active.len() && remaining.is_subset(active));
            trace!(
                virus = self.network.ident(virus),
                gate = self.network.ident(corridor.gate),
                neighbor = self.network.ident(corridor.neighbor),
                "trying severance"
            );

            // this cut alone is enough; later candidates are not considered
            if nearest_gate(self.network, virus, &remaining).is_none() {
                return Ok(Some(vec![corridor]));
            }

            let next = simulate_step(self.network, virus, &remaining)?;
            if next.is_gate() {
                continue;
            }

            if let Some(mut rest) = self.explore(cache, next, &remaining)? {
                rest.insert(0, corridor);
                return Ok(Some(rest));
            }
        }

        Ok(None)
    }

    /// Play `plan` out from `start`: each severance is applied, then the virus moves once unless it is already cut off.
    ///
    /// Fails with [`InvalidEdge`](NetworkError::InvalidEdge) if a severance does not name a corridor that is intact and incident to a gate at that point.
    pub fn replay(&self, start: &str, plan: &[Severance]) -> Result<Replay, SolveError> {
        let mut trajectory = vec![start.to_owned()];
        let Some(mut position) = self.network.node(start) else {
            return Ok(Replay { trajectory, outcome: ReplayOutcome::Contained });
        };

        if position.is_gate() {
            return Ok(Replay { trajectory, outcome: ReplayOutcome::Breached(start.to_owned()) });
        }

        let mut active = self.network.intact();
        for severance in plan {
            let corridor = self.network.corridor(severance)
                .filter(|corridor| active.contains(corridor))
                .ok_or_else(|| NetworkError::InvalidEdge(severance.to_string()))?;
            active = active.without(&corridor);

            if nearest_gate(self.network, position, &active).is_none() {
                continue;
            }

            position = simulate_step(self.network, position, &active)?;
            trajectory.push(self.network.ident(position).to_owned());
            if position.is_gate() {
                return Ok(Replay { trajectory, outcome: ReplayOutcome::Breached(self.network.ident(position).to_owned()) });
            }
        }

        let outcome = match nearest_gate(self.network, position, &active) {
            None => ReplayOutcome::Contained,
            Some(_) => ReplayOutcome::Unfinished,
        };

        Ok(Replay { trajectory, outcome })
    }
}
