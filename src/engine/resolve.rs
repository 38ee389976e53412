//! Next-state resolution for both transition key flavours.

use super::error::FsmError;
use crate::core::{Predicate, StateId, StateNode, TransitionKey};
use std::fmt::Debug;

impl<K: PartialEq + Debug, C> StateNode<K, C> {
    /// Resolve the successor for an input symbol.
    ///
    /// A registered wildcard wins unconditionally, even when `signal` has an
    /// explicit entry of its own.
    ///
    /// # Errors
    ///
    /// [`FsmError::UnknownSignal`] when there is no wildcard and no entry
    /// for `signal`.
    pub fn resolve_symbol(&self, signal: &K) -> Result<StateId, FsmError> {
        if let Some(to) = self.wildcard() {
            return Ok(to);
        }

        self.transitions
            .iter()
            .find_map(|(key, to)| match key {
                TransitionKey::On(k) if k == signal => Some(*to),
                _ => None,
            })
            .ok_or_else(|| FsmError::UnknownSignal {
                state: self.name.clone(),
                signal: format!("{signal:?}"),
            })
    }
}

impl<C> StateNode<Predicate<C>, C> {
    /// Resolve the successor by evaluating predicates against `shared`.
    ///
    /// Predicates run in registration order and the first one that holds
    /// wins. The wildcard is only taken when none holds, wherever it sits in
    /// the table.
    ///
    /// # Errors
    ///
    /// [`FsmError::NoTransition`] when no predicate holds and there is no
    /// wildcard. The error lists every predicate of the table, by label when
    /// it has one.
    pub fn resolve_predicates(&self, shared: &C) -> Result<StateId, FsmError> {
        let matched = self.transitions.iter().find_map(|(key, to)| match key {
            TransitionKey::On(predicate) if predicate.evaluate(shared) => Some(*to),
            _ => None,
        });

        matched
            .or_else(|| self.wildcard())
            .ok_or_else(|| FsmError::NoTransition {
                state: self.name.clone(),
                predicates: self.describe_predicates(),
            })
    }

    fn describe_predicates(&self) -> Vec<String> {
        self.transitions
            .iter()
            .filter_map(|(key, _)| match key {
                TransitionKey::On(predicate) => Some(
                    predicate
                        .label()
                        .map_or_else(|| format!("{predicate:?}"), str::to_string),
                ),
                TransitionKey::Any => None,
            })
            .collect()
    }
}
