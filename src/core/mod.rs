//! Definition side of a state machine.
//!
//! This module holds the data a caller wires up before running anything:
//! - States and their transition tables, stored in a [`StateGraph`] arena
//! - Transition keys, with a reserved wildcard variant
//! - Predicates over the shared store
//! - The run history recorded by machines

mod graph;
mod history;
mod predicate;
mod state;
mod variables;

pub use graph::StateGraph;
pub use history::{RunHistory, Visit};
pub use predicate::Predicate;
pub use state::{Action, StateId, StateNode, TransitionKey};
pub use variables::Variables;
