//! Errors raised while wiring or running a machine.

use thiserror::Error;

/// Errors that abort table construction or a machine run.
///
/// None of these are retried internally. Mutations already made to the
/// shared store by earlier actions stay in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("Transition key {key} is repeated on state '{state}'")]
    DuplicateTransition { state: String, key: String },

    #[error("Unknown signal {signal} in state '{state}'")]
    UnknownSignal { state: String, signal: String },

    #[error(
        "No predicate holds and no wildcard is registered in state '{state}' (evaluated: {})",
        .predicates.join(", ")
    )]
    NoTransition {
        state: String,
        predicates: Vec<String>,
    },

    #[error("Input sequence exhausted in state '{state}': index {index}, length {len}")]
    SequenceExhausted {
        state: String,
        index: usize,
        len: usize,
    },

    #[error("State #{index} does not belong to this graph ({len} states)")]
    UnknownState { index: usize, len: usize },

    #[error("Action of state '{state}' failed: {reason}")]
    ActionFailed { state: String, reason: String },

    #[error("Machine '{machine_id}' has already been started")]
    AlreadyStarted { machine_id: String },
}

impl FsmError {
    /// Name of the state the error refers to, when there is one.
    pub fn state(&self) -> Option<&str> {
        match self {
            Self::DuplicateTransition { state, .. }
            | Self::UnknownSignal { state, .. }
            | Self::NoTransition { state, .. }
            | Self::SequenceExhausted { state, .. }
            | Self::ActionFailed { state, .. } => Some(state.as_str()),
            Self::UnknownState { .. } | Self::AlreadyStarted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_state_and_signal() {
        let err = FsmError::UnknownSignal {
            state: "S1".to_string(),
            signal: "\"x\"".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown signal \"x\" in state 'S1'");
        assert_eq!(err.state(), Some("S1"));
    }

    #[test]
    fn sequence_exhausted_message() {
        let err = FsmError::SequenceExhausted {
            state: "S0".to_string(),
            index: 2,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Input sequence exhausted in state 'S0': index 2, length 2"
        );
    }

    #[test]
    fn no_transition_lists_evaluated_predicates() {
        let err = FsmError::NoTransition {
            state: "Loop".to_string(),
            predicates: vec!["a >= k".to_string(), "predicate#7".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "No predicate holds and no wildcard is registered in state 'Loop' \
             (evaluated: a >= k, predicate#7)"
        );
        assert_eq!(err.state(), Some("Loop"));
    }

    #[test]
    fn structural_errors_have_no_state() {
        let err = FsmError::UnknownState { index: 3, len: 1 };
        assert_eq!(err.state(), None);
    }
}
