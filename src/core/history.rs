//! Record of the states a machine visited during its run.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// One visit of the drive loop to a state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    /// The state visited
    pub id: StateId,
    /// Its name at the time of the visit
    pub state: String,
    /// Loop index; step 0 is the initial state
    pub step: usize,
    /// Whether the state's action was run on this visit
    pub executed: bool,
    /// When the visit happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered list of visits made by one machine run.
///
/// # Example
///
/// ```rust
/// use transit::core::StateGraph;
/// use transit::engine::Machine;
///
/// let mut graph: StateGraph<char> = StateGraph::new();
/// let s0 = graph.add_state("S0");
/// let s1 = graph.add_state("S1");
/// graph.add_transition(s0, 'a', s1).unwrap();
///
/// let mut machine = Machine::builder(&graph)
///     .initial(s0)
///     .exit(s1)
///     .record_history(true)
///     .build()
///     .unwrap();
/// machine.start(&['a']).unwrap();
///
/// assert_eq!(machine.history().path(), vec!["S0", "S1"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunHistory {
    run_id: Uuid,
    machine_id: String,
    visits: Vec<Visit>,
}

impl RunHistory {
    /// Create an empty history with a fresh run id.
    pub fn new(machine_id: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            machine_id: machine_id.into(),
            visits: Vec::new(),
        }
    }

    pub fn record(&mut self, visit: Visit) {
        self.visits.push(visit);
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn machine_id(&self) -> &str {
        &self.machine_id
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// Names of visited states, in order.
    pub fn path(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.state.as_str()).collect()
    }

    /// Names of the states whose action actually ran, in order.
    pub fn executed(&self) -> Vec<&str> {
        self.visits
            .iter()
            .filter(|v| v.executed)
            .map(|v| v.state.as_str())
            .collect()
    }

    /// Time between the first and last visit.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.visits.first()?, self.visits.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}
