//! Static wiring checks for state graphs.
//!
//! Checks use stillwater's `Validation` type so that every problem is
//! reported in one pass instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use transit::core::StateGraph;
//! use transit::engine::Machine;
//!
//! let mut graph: StateGraph<&str> = StateGraph::new();
//! let s0 = graph.add_state("S0");
//! let s1 = graph.add_state("S1");
//! graph.add_transition(s0, "a", s1).unwrap();
//!
//! let machine = Machine::builder(&graph).initial(s0).exit(s1).build().unwrap();
//! assert!(machine.check_wiring().is_success());
//! ```

pub mod rules;
pub mod violations;

pub use rules::check_wiring;
pub use violations::WiringViolation;
