//! Builder API for machine construction.
//!
//! Graphs are wired directly on [`StateGraph`](crate::core::StateGraph);
//! this module turns a graph plus run settings into a
//! [`Machine`](crate::engine::Machine).

pub mod config;
pub mod error;
pub mod machine;

pub use config::{MachineConfig, DEFAULT_MACHINE_ID};
pub use error::BuildError;
pub use machine::MachineBuilder;
