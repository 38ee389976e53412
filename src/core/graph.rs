//! Arena holding every state of a machine definition.
//!
//! The graph owns its states; states refer to each other by [`StateId`].
//! Machines borrow the graph immutably, so transition tables cannot change
//! while a machine built on them is alive.

use super::state::{Action, StateId, StateNode, TransitionKey};
use crate::engine::FsmError;
use std::fmt;

/// Caller-owned collection of states and their transition tables.
///
/// `K` is the transition key type: a symbol for the simple variant or a
/// [`Predicate`](super::Predicate) for the extended one. `C` is the
/// argument type handed to state actions.
///
/// # Example
///
/// ```rust
/// use transit::core::StateGraph;
///
/// let mut graph: StateGraph<char> = StateGraph::new();
/// let s0 = graph.add_state("S0");
/// let s1 = graph.add_state("S1");
///
/// graph.add_transition(s0, 'a', s1).unwrap();
/// graph.add_wildcard(s1, s1).unwrap();
///
/// assert!(graph.add_transition(s0, 'a', s0).is_err());
/// assert_eq!(graph.len(), 2);
/// ```
pub struct StateGraph<K, C = ()> {
    states: Vec<StateNode<K, C>>,
    wildcard_alias: Option<K>,
}

impl<K, C> StateGraph<K, C> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            wildcard_alias: None,
        }
    }

    /// Create a graph where registering `alias` as a key registers the
    /// wildcard instead, e.g. `"*"` for string symbols.
    ///
    /// The alias only affects registration on this graph.
    pub fn with_wildcard(alias: K) -> Self {
        Self {
            states: Vec::new(),
            wildcard_alias: Some(alias),
        }
    }

    pub fn wildcard_alias(&self) -> Option<&K> {
        self.wildcard_alias.as_ref()
    }

    /// Add a state without an action.
    pub fn add_state(&mut self, name: impl Into<String>) -> StateId {
        self.push(StateNode::new(name.into(), None))
    }

    /// Add a state whose action runs when the machine visits it.
    pub fn add_state_with(&mut self, name: impl Into<String>, action: Action<C>) -> StateId {
        self.push(StateNode::new(name.into(), Some(action)))
    }

    fn push(&mut self, node: StateNode<K, C>) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(node);
        id
    }

    /// Look up a state by id.
    pub fn state(&self, id: StateId) -> Result<&StateNode<K, C>, FsmError> {
        self.states.get(id.0).ok_or(FsmError::UnknownState {
            index: id.0,
            len: self.states.len(),
        })
    }

    pub fn contains(&self, id: StateId) -> bool {
        id.0 < self.states.len()
    }

    /// First state with the given name. Names are not required to be unique.
    pub fn find(&self, name: &str) -> Option<StateId> {
        self.states
            .iter()
            .position(|node| node.name == name)
            .map(StateId)
    }

    /// All state ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = StateId> {
        (0..self.states.len()).map(StateId)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<K: PartialEq + fmt::Debug, C> StateGraph<K, C> {
    /// Register `from --key--> to`.
    ///
    /// If `key` equals the graph's wildcard alias, the wildcard is
    /// registered instead.
    ///
    /// # Errors
    ///
    /// [`FsmError::DuplicateTransition`] if `from` already has an entry for
    /// the key, and [`FsmError::UnknownState`] if either id is foreign. The
    /// table is left unchanged on error.
    pub fn add_transition(&mut self, from: StateId, key: K, to: StateId) -> Result<(), FsmError> {
        let key = match &self.wildcard_alias {
            Some(alias) if *alias == key => TransitionKey::Any,
            _ => TransitionKey::On(key),
        };
        self.insert(from, key, to)
    }

    /// Register the wildcard transition `from --ANY--> to`.
    pub fn add_wildcard(&mut self, from: StateId, to: StateId) -> Result<(), FsmError> {
        self.insert(from, TransitionKey::Any, to)
    }

    /// Register an explicit [`TransitionKey`], bypassing the alias.
    pub fn insert(
        &mut self,
        from: StateId,
        key: TransitionKey<K>,
        to: StateId,
    ) -> Result<(), FsmError> {
        self.state(to)?;
        let len = self.states.len();
        let node = self.states.get_mut(from.0).ok_or(FsmError::UnknownState {
            index: from.0,
            len,
        })?;

        if node.contains_key(&key) {
            return Err(FsmError::DuplicateTransition {
                state: node.name.clone(),
                key: key.to_string(),
            });
        }

        tracing::trace!(state = %node.name, key = %key, to = %to, "registered transition");
        node.transitions.push((key, to));
        Ok(())
    }
}

impl<K, C> Default for StateGraph<K, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, C> fmt::Debug for StateGraph<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateGraph")
            .field("states", &self.states)
            .field("wildcard_alias", &self.wildcard_alias)
            .finish()
    }
}
