//! Reachability checks over a state graph using Validation.

use crate::core::{StateGraph, StateId};
use crate::validation::violations::WiringViolation;
use std::collections::{HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Inspect the part of `graph` reachable from `initial`, accumulating ALL
/// wiring violations.
///
/// Predicates are opaque here, so every predicate edge counts as
/// traversable. A clean result therefore does not prove a run terminates;
/// a violation does prove some run cannot.
///
/// # Example
///
/// ```rust
/// use transit::core::StateGraph;
/// use transit::validation::{check_wiring, WiringViolation};
/// use std::collections::HashSet;
/// use stillwater::validation::Validation;
///
/// let mut graph: StateGraph<char> = StateGraph::new();
/// let start = graph.add_state("start");
/// let stuck = graph.add_state("stuck");
/// let end = graph.add_state("end");
/// graph.add_transition(start, 'a', stuck).unwrap();
///
/// let exits: HashSet<_> = [end].into_iter().collect();
/// match check_wiring(&graph, start, &exits) {
///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
///     Validation::Success(_) => panic!("expected violations"),
/// }
/// ```
pub fn check_wiring<K, C>(
    graph: &StateGraph<K, C>,
    initial: StateId,
    exits: &HashSet<StateId>,
) -> Validation<(), NonEmptyVec<WiringViolation>> {
    let Ok(start) = graph.state(initial) else {
        return Validation::fail(WiringViolation::UnknownInitial {
            index: initial.index(),
        });
    };

    let mut checks: Vec<Validation<(), NonEmptyVec<WiringViolation>>> = Vec::new();

    // On its first visit the initial state always resolves, even if it is
    // also an exit.
    if start.transitions().is_empty() {
        checks.push(Validation::fail(WiringViolation::DeadEnd {
            state: start.name().to_string(),
        }));
    }

    let mut seen = HashSet::new();
    let mut queue: VecDeque<StateId> = start.transitions().iter().map(|(_, to)| *to).collect();
    let mut exit_reached = false;

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id) {
            continue;
        }
        if exits.contains(&id) {
            exit_reached = true;
            continue;
        }
        let Ok(node) = graph.state(id) else {
            continue;
        };
        if node.transitions().is_empty() {
            if id != initial {
                checks.push(Validation::fail(WiringViolation::DeadEnd {
                    state: node.name().to_string(),
                }));
            }
            continue;
        }
        queue.extend(node.transitions().iter().map(|(_, to)| *to));
    }

    checks.push(if exit_reached {
        Validation::success(())
    } else {
        Validation::fail(WiringViolation::NoReachableExit {
            initial: start.name().to_string(),
        })
    });

    // Accumulate ALL failures using all_vec
    Validation::all_vec(checks).map(|_| ())
}
