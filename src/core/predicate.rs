//! Predicates used as transition keys by the extended variant.
//!
//! A predicate is a boolean function of the shared store. Predicates compare
//! by identity: two predicates built from identical closures are still two
//! different transition keys, while clones of one predicate are the same key.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PREDICATE_ID: AtomicU64 = AtomicU64::new(0);

/// Boolean function over the shared store, usable as a transition key.
///
/// # Example
///
/// ```rust
/// use transit::core::{Predicate, Variables};
///
/// let done = Predicate::new(|vars: &Variables| vars.get_i64("count") >= Some(3));
///
/// let mut vars = Variables::new();
/// vars.set("count", 1);
/// assert!(!done.evaluate(&vars));
///
/// vars.set("count", 3);
/// assert!(done.evaluate(&vars));
/// ```
pub struct Predicate<C> {
    id: u64,
    label: Option<String>,
    check: Rc<dyn Fn(&C) -> bool>,
}

impl<C> Predicate<C> {
    /// Wrap a boolean function. Each call yields a fresh identity.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        Predicate {
            id: NEXT_PREDICATE_ID.fetch_add(1, Ordering::Relaxed),
            label: None,
            check: Rc::new(check),
        }
    }

    /// Wrap a boolean function with a label used in diagnostics.
    pub fn labeled<F>(label: impl Into<String>, check: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        let mut predicate = Self::new(check);
        predicate.label = Some(label.into());
        predicate
    }

    /// Evaluate against the shared store. Not cached.
    pub fn evaluate(&self, shared: &C) -> bool {
        (self.check)(shared)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl<C> Clone for Predicate<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            label: self.label.clone(),
            check: Rc::clone(&self.check),
        }
    }
}

impl<C> PartialEq for Predicate<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for Predicate<C> {}

impl<C> fmt::Debug for Predicate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "predicate#{}({})", self.id, label),
            None => write!(f, "predicate#{}", self.id),
        }
    }
}
