use tracing::trace;

use crate::corridor::ActiveCorridors;
use crate::distance::{distances_from, nearest_gate};
use crate::error::SolveError;
use crate::network::Network;
use crate::node::Node;
use crate::order;

/// Where the virus moves from `position` when heading for `gate`.
///
/// Distances are measured outward from the gate, independently of any search from the virus; the two can break ties differently.
/// Among neighbors one hop closer to the gate, the smallest identifier wins.
/// Returns `Ok(None)` if the virus already sits on `gate`, which callers treat as a loss.
pub(crate) fn next_step(network: &Network, position: Node, gate: Node, active: &ActiveCorridors) -> Result<Option<Node>, SolveError> {
    let unreachable = || SolveError::UnreachableState {
        position: network.ident(position).to_owned(),
        gate: network.ident(gate).to_owned(),
    };

    let from_gate = distances_from(network, gate, active);
    let remaining = from_gate.get(position).ok_or_else(unreachable)?;
    if remaining == 0 {
        return Ok(None);
    }

    let step = order::first(network.neighbors(position, active)
        .into_iter()
        .filter(|neighbor| from_gate.get(*neighbor) == Some(remaining - 1)))
        .ok_or_else(unreachable)?;

    Ok(Some(step))
}

/// One move of the virus from `position`: a step toward its nearest gate, or nowhere if no gate is reachable.
pub(crate) fn simulate_step(network: &Network, position: Node, active: &ActiveCorridors) -> Result<Node, SolveError> {
    let Some((gate, hops)) = nearest_gate(network, position, active) else {
        return Ok(position);
    };

    let next = next_step(network, position, gate, active)?.unwrap_or(position);
    trace!(
        from = network.ident(position),
        to = network.ident(next),
        toward = network.ident(gate),
        hops,
        "virus moves"
    );

    Ok(next)
}
