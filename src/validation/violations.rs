//! Wiring problems found by static inspection of a graph.

use thiserror::Error;

/// A problem in how a graph is wired for a given initial/exit configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WiringViolation {
    #[error("State '{state}' is reachable, is not an exit, and has no transitions")]
    DeadEnd { state: String },

    #[error("No exit state is reachable from initial state '{initial}'")]
    NoReachableExit { initial: String },

    #[error("Initial state #{index} does not belong to the graph")]
    UnknownInitial { index: usize },
}
