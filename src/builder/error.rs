//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("The {role} state #{index} does not belong to the graph ({len} states)")]
    UnknownState {
        role: &'static str,
        index: usize,
        len: usize,
    },
}
