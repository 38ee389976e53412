//! States, transition keys and state actions.
//!
//! A state is a node in a [`StateGraph`](super::StateGraph). It never owns
//! the states it transitions to; it only stores their [`StateId`] handles,
//! which makes self-loops and cycles free to express.

use crate::engine::FsmError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a state stored in a [`StateGraph`](super::StateGraph).
///
/// Ids are only meaningful for the graph that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state inside its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Key of a transition table entry.
///
/// `Any` is the reserved wildcard. It is a variant of its own, so it can
/// never collide with a real symbol or predicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKey<K> {
    /// Wildcard: matches when nothing more specific does.
    Any,
    /// A concrete symbol or predicate.
    On(K),
}

impl<K> TransitionKey<K> {
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl<K: fmt::Debug> fmt::Display for TransitionKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("ANY"),
            Self::On(key) => write!(f, "{key:?}"),
        }
    }
}

type ActionFn<C> = dyn Fn(&mut C) -> Result<(), String>;

/// Side effect run when the machine visits a state.
///
/// The simple variant uses `Action<()>`; the extended variant passes the
/// shared store to every action.
///
/// # Example
///
/// ```rust
/// use transit::core::Action;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let hits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&hits);
/// let action = Action::from_fn(move || counter.set(counter.get() + 1));
///
/// action.call(&mut ()).unwrap();
/// assert_eq!(hits.get(), 1);
/// ```
pub struct Action<C> {
    run: Box<ActionFn<C>>,
}

impl<C> Action<C> {
    /// Create an infallible action over the shared store.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut C) + 'static,
    {
        Self {
            run: Box::new(move |ctx| {
                f(ctx);
                Ok(())
            }),
        }
    }

    /// Create an action that may fail with a reason.
    ///
    /// A failure aborts the run with [`FsmError::ActionFailed`].
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), String> + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Invoke the action and return its result.
    pub fn call(&self, ctx: &mut C) -> Result<(), String> {
        (self.run)(ctx)
    }
}

impl Action<()> {
    /// Create a zero-argument action for the symbol-driven variant.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() + 'static,
    {
        Self::new(move |_: &mut ()| f())
    }
}

impl<C> fmt::Debug for Action<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// A node of the transition graph: name, optional action and an ordered
/// transition table.
pub struct StateNode<K, C> {
    pub(crate) name: String,
    pub(crate) action: Option<Action<C>>,
    pub(crate) transitions: Vec<(TransitionKey<K>, StateId)>,
}

impl<K, C> StateNode<K, C> {
    pub(crate) fn new(name: String, action: Option<Action<C>>) -> Self {
        Self {
            name,
            action,
            transitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Transition table entries in registration order.
    pub fn transitions(&self) -> &[(TransitionKey<K>, StateId)] {
        &self.transitions
    }

    /// Target of the wildcard entry, if one is registered.
    pub fn wildcard(&self) -> Option<StateId> {
        self.transitions
            .iter()
            .find(|(key, _)| key.is_any())
            .map(|(_, to)| *to)
    }

    /// Run this state's action, if any.
    ///
    /// States without an action succeed trivially.
    pub fn execute(&self, ctx: &mut C) -> Result<(), FsmError> {
        match &self.action {
            Some(action) => action.call(ctx).map_err(|reason| FsmError::ActionFailed {
                state: self.name.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

impl<K: PartialEq, C> StateNode<K, C> {
    /// Check whether `key` already has an entry.
    pub fn contains_key(&self, key: &TransitionKey<K>) -> bool {
        self.transitions.iter().any(|(existing, _)| existing == key)
    }
}

impl<K: fmt::Debug, C> fmt::Debug for StateNode<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateNode")
            .field("name", &self.name)
            .field("has_action", &self.action.is_some())
            .field("transitions", &self.transitions)
            .finish()
    }
}
