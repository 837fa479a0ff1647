/// Reasons a network may fail to build.
///
/// Any of these aborts the whole build; no partial network is produced.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum NetworkError {
    /// A corridor was not of the form `NodeA-NodeB` with two distinct identifiers, or names a corridor that cannot be severed.
    #[error("malformed corridor `{0}`, expected `NodeA-NodeB`")]
    InvalidEdge(String),
    /// A node identifier was empty.
    #[error("empty node identifier")]
    InvalidNode,
}

/// Reasons a [`Planner`](crate::Planner) may fail.
///
/// Failing to find containment is not one of them; see [`Containment::Impossible`](crate::Containment::Impossible).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SolveError {
    /// The movement policy was asked to step toward a gate it cannot reach.
    /// This should never happen.
    #[error("virus at `{position}` has no path toward gate `{gate}`")]
    UnreachableState {
        /// Where the virus was.
        position: String,
        /// The gate it was heading for.
        gate: String,
    },
    /// A plan handed to [`Planner::replay`](crate::Planner::replay) was not valid for the network.
    #[error(transparent)]
    Network(#[from] NetworkError),
}
