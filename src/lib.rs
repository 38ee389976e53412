//! Transit: a small finite state machine engine
//!
//! A machine is a graph of named states. Each state has an optional action
//! and a transition table; the machine walks the graph from an initial state
//! until it reaches an exit state.
//!
//! # Core Concepts
//!
//! - **StateGraph**: caller-owned arena of states, addressed by `StateId`
//! - **Transition keys**: discrete symbols (simple variant) or `Predicate`s
//!   over a shared store (extended variant), plus a reserved wildcard
//! - **Machine**: the drive loop, configured with `exe_initial`/`exe_exit`
//!
//! # Example
//!
//! ```rust
//! use transit::core::{Action, StateGraph};
//! use transit::engine::Machine;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&log);
//!
//! let mut graph: StateGraph<&str> = StateGraph::new();
//! let s0 = graph.add_state("S0");
//! let s1 = graph.add_state("S1");
//! let s2 = graph.add_state_with("S2", Action::from_fn(move || sink.borrow_mut().push("S2")));
//! graph.add_transition(s0, "a", s1).unwrap();
//! graph.add_transition(s1, "b", s2).unwrap();
//!
//! let mut machine = Machine::builder(&graph)
//!     .initial(s0)
//!     .exit(s2)
//!     .exe_exit(true)
//!     .build()
//!     .unwrap();
//! machine.start(&["a", "b"]).unwrap();
//!
//! assert_eq!(*log.borrow(), vec!["S2"]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder, MachineConfig};
pub use crate::core::{Action, Predicate, StateGraph, StateId, TransitionKey, Variables};
pub use crate::engine::{FsmError, Machine, MachineStatus};
