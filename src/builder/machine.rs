//! Builder for constructing machines.

use crate::builder::config::MachineConfig;
use crate::builder::error::BuildError;
use crate::core::{StateGraph, StateId};
use crate::engine::Machine;
use std::collections::HashSet;

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder<'g, K, C = ()> {
    graph: &'g StateGraph<K, C>,
    initial: Option<StateId>,
    exits: Vec<StateId>,
    config: MachineConfig,
}

impl<'g, K, C> MachineBuilder<'g, K, C> {
    /// Create a builder over a graph.
    pub fn new(graph: &'g StateGraph<K, C>) -> Self {
        Self {
            graph,
            initial: None,
            exits: Vec::new(),
            config: MachineConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add an exit state.
    pub fn exit(mut self, state: StateId) -> Self {
        self.exits.push(state);
        self
    }

    /// Add several exit states at once.
    pub fn exits(mut self, states: impl IntoIterator<Item = StateId>) -> Self {
        self.exits.extend(states);
        self
    }

    /// Replace the whole run configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn machine_id(mut self, id: impl Into<String>) -> Self {
        self.config.machine_id = id.into();
        self
    }

    /// Run the initial state's action on the first step.
    pub fn exe_initial(mut self, enabled: bool) -> Self {
        self.config.exe_initial = enabled;
        self
    }

    /// Run the exit state's action when the machine stops there.
    pub fn exe_exit(mut self, enabled: bool) -> Self {
        self.config.exe_exit = enabled;
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Build the machine.
    /// Returns an error if the initial state is missing or any id is foreign.
    pub fn build(self) -> Result<Machine<'g, K, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let len = self.graph.len();

        if !self.graph.contains(initial) {
            return Err(BuildError::UnknownState {
                role: "initial",
                index: initial.index(),
                len,
            });
        }

        let mut exits = HashSet::with_capacity(self.exits.len());
        for exit in self.exits {
            if !self.graph.contains(exit) {
                return Err(BuildError::UnknownState {
                    role: "exit",
                    index: exit.index(),
                    len,
                });
            }
            exits.insert(exit);
        }

        Ok(Machine::from_parts(self.graph, initial, exits, self.config))
    }
}
