//! Machine that walks a [`StateGraph`] until it reaches an exit state.

use super::error::FsmError;
use crate::builder::{MachineBuilder, MachineConfig};
use crate::core::{Predicate, RunHistory, StateGraph, StateId, StateNode, Visit};
use crate::validation::{check_wiring, WiringViolation};
use chrono::Utc;
use std::collections::HashSet;
use std::fmt::Debug;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Lifecycle of a machine run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MachineStatus {
    NotStarted,
    Running,
    /// Reached an exit state
    Terminated,
    /// Aborted with an error
    Failed,
}

/// Drives a borrowed graph from its initial state to an exit state.
///
/// A machine runs once. Symbol-keyed graphs are driven with
/// [`start`](Machine::start), predicate-keyed graphs with
/// [`start_with`](Machine::start_with).
pub struct Machine<'g, K, C = ()> {
    graph: &'g StateGraph<K, C>,
    initial: StateId,
    exits: HashSet<StateId>,
    config: MachineConfig,
    status: MachineStatus,
    history: RunHistory,
}

/// Machine over a symbol-keyed graph.
pub type SimpleMachine<'g, K> = Machine<'g, K, ()>;

/// Machine over a predicate-keyed graph with shared store `C`.
pub type PredicateMachine<'g, C> = Machine<'g, Predicate<C>, C>;

impl<'g, K, C> Machine<'g, K, C> {
    /// Start building a machine over `graph`.
    pub fn builder(graph: &'g StateGraph<K, C>) -> MachineBuilder<'g, K, C> {
        MachineBuilder::new(graph)
    }

    pub(crate) fn from_parts(
        graph: &'g StateGraph<K, C>,
        initial: StateId,
        exits: HashSet<StateId>,
        config: MachineConfig,
    ) -> Self {
        let history = RunHistory::new(config.machine_id.clone());
        Self {
            graph,
            initial,
            exits,
            config,
            status: MachineStatus::NotStarted,
            history,
        }
    }

    pub fn graph(&self) -> &'g StateGraph<K, C> {
        self.graph
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn is_exit(&self, id: StateId) -> bool {
        self.exits.contains(&id)
    }

    pub fn exits(&self) -> &HashSet<StateId> {
        &self.exits
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn machine_id(&self) -> &str {
        &self.config.machine_id
    }

    pub fn status(&self) -> MachineStatus {
        self.status
    }

    /// Visits recorded so far. Empty when history recording is disabled.
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    /// Statically inspect the wiring reachable from the initial state.
    ///
    /// Advisory only: a run never calls this.
    pub fn check_wiring(&self) -> Validation<(), NonEmptyVec<WiringViolation>> {
        check_wiring(self.graph, self.initial, &self.exits)
    }

    fn visit(&mut self, id: StateId, node: &StateNode<K, C>, step: usize, executed: bool) {
        tracing::debug!(
            machine = %self.config.machine_id,
            state = %node.name(),
            step,
            executed,
            "visiting state"
        );
        if self.config.record_history {
            self.history.record(Visit {
                id,
                state: node.name().to_string(),
                step,
                executed,
                timestamp: Utc::now(),
            });
        }
    }

    /// Shared drive loop. `resolve` picks the successor of the state it is
    /// given at loop index `step`.
    fn drive<R>(&mut self, ctx: &mut C, mut resolve: R) -> Result<(), FsmError>
    where
        R: FnMut(&StateNode<K, C>, usize, &C) -> Result<StateId, FsmError>,
    {
        if self.status != MachineStatus::NotStarted {
            return Err(FsmError::AlreadyStarted {
                machine_id: self.config.machine_id.clone(),
            });
        }
        self.status = MachineStatus::Running;

        let result = self.walk(ctx, &mut resolve);
        self.status = match &result {
            Ok(()) => MachineStatus::Terminated,
            Err(err) => {
                tracing::warn!(machine = %self.config.machine_id, error = %err, "run failed");
                MachineStatus::Failed
            }
        };
        result
    }

    fn walk<R>(&mut self, ctx: &mut C, resolve: &mut R) -> Result<(), FsmError>
    where
        R: FnMut(&StateNode<K, C>, usize, &C) -> Result<StateId, FsmError>,
    {
        let graph = self.graph;
        let mut step = 0;
        let mut current = self.initial;

        loop {
            let node = graph.state(current)?;

            if step == 0 {
                // The initial state never counts as an exit on its first visit.
                let run = self.config.exe_initial;
                self.visit(current, node, step, run);
                if run {
                    node.execute(ctx)?;
                }
            } else if self.exits.contains(&current) {
                let run = self.config.exe_exit;
                self.visit(current, node, step, run);
                if run {
                    node.execute(ctx)?;
                }
                tracing::debug!(
                    machine = %self.config.machine_id,
                    state = %node.name(),
                    steps = step,
                    "reached exit state"
                );
                return Ok(());
            } else {
                self.visit(current, node, step, true);
                node.execute(ctx)?;
            }

            let next = resolve(node, step, &*ctx)?;
            tracing::trace!(from = %node.name(), to = %next, step, "resolved transition");
            current = next;
            step += 1;
        }
    }
}

impl<'g, K: PartialEq + Debug> Machine<'g, K, ()> {
    /// Run the machine over an input sequence.
    ///
    /// Symbol `seq[i]` is read by the state visited at loop index `i`,
    /// starting with the initial state. Symbols left over once an exit
    /// state is reached are ignored.
    ///
    /// # Errors
    ///
    /// [`FsmError::UnknownSignal`], [`FsmError::SequenceExhausted`],
    /// [`FsmError::ActionFailed`], or [`FsmError::AlreadyStarted`] on a
    /// second call.
    pub fn start(&mut self, seq: &[K]) -> Result<(), FsmError> {
        self.drive(&mut (), |node, step, _| {
            let signal = seq.get(step).ok_or_else(|| FsmError::SequenceExhausted {
                state: node.name().to_string(),
                index: step,
                len: seq.len(),
            })?;
            node.resolve_symbol(signal)
        })
    }
}

impl<'g, C> Machine<'g, Predicate<C>, C> {
    /// Run the machine, re-evaluating predicates against `shared` at every
    /// step. Actions and predicates all see this same store.
    ///
    /// # Errors
    ///
    /// [`FsmError::NoTransition`], [`FsmError::ActionFailed`], or
    /// [`FsmError::AlreadyStarted`] on a second call. Store mutations made
    /// before a failure are kept.
    pub fn start_with(&mut self, shared: &mut C) -> Result<(), FsmError> {
        self.drive(shared, |node, _, shared| node.resolve_predicates(shared))
    }
}
