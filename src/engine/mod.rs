//! Running state machines.
//!
//! # Key Concepts
//!
//! - **Resolution**: a state picks its successor from an input symbol
//!   (wildcard first) or from predicates over the shared store
//!   (registration order, wildcard last)
//! - **Machine**: the drive loop, honouring the `exe_initial` and
//!   `exe_exit` flags, until an exit state is reached
//! - **Errors**: every failure is a [`FsmError`] returned from `start`

mod error;
mod machine;
mod resolve;

pub use error::FsmError;
pub use machine::{Machine, MachineStatus, PredicateMachine, SimpleMachine};
