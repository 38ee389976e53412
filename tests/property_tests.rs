//! Property-based tests for transition tables and the drive loop.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use transit::core::{Action, Predicate, StateGraph, TransitionKey};
use transit::engine::{FsmError, Machine};

prop_compose! {
    fn arbitrary_symbol()(c in prop::char::range('a', 'f')) -> char {
        c
    }
}

proptest! {
    #[test]
    fn duplicate_key_leaves_table_unchanged(
        keys in prop::collection::vec(arbitrary_symbol(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut graph: StateGraph<char> = StateGraph::new();
        let s = graph.add_state("S");
        let t = graph.add_state("T");

        let mut registered = Vec::new();
        for key in keys {
            if graph.add_transition(s, key, t).is_ok() {
                registered.push(key);
            }
        }

        let before: Vec<_> = graph.state(s).unwrap().transitions().to_vec();
        let dup = registered[pick.index(registered.len())];
        let result = graph.add_transition(s, dup, s);

        let is_duplicate = matches!(result, Err(FsmError::DuplicateTransition { .. }));
        prop_assert!(is_duplicate);
        prop_assert_eq!(graph.state(s).unwrap().transitions(), &before[..]);
    }

    #[test]
    fn wildcard_wins_for_every_symbol(
        explicit in prop::collection::hash_set(arbitrary_symbol(), 0..6),
        signal in arbitrary_symbol(),
    ) {
        let mut graph: StateGraph<char> = StateGraph::new();
        let s = graph.add_state("S");
        let specific = graph.add_state("specific");
        let any = graph.add_state("any");

        for key in explicit {
            graph.add_transition(s, key, specific).unwrap();
        }
        graph.add_wildcard(s, any).unwrap();

        prop_assert_eq!(graph.state(s).unwrap().resolve_symbol(&signal), Ok(any));
    }

    #[test]
    fn first_true_predicate_wins(outcomes in prop::collection::vec(any::<bool>(), 1..8)) {
        let mut graph: StateGraph<Predicate<()>, ()> = StateGraph::new();
        let s = graph.add_state("S");
        let fallback = graph.add_state("fallback");
        let targets: Vec<_> = (0..outcomes.len())
            .map(|i| graph.add_state(format!("T{i}")))
            .collect();

        for (outcome, target) in outcomes.iter().zip(&targets) {
            let outcome = *outcome;
            graph
                .add_transition(s, Predicate::new(move |_: &()| outcome), *target)
                .unwrap();
        }
        graph.insert(s, TransitionKey::Any, fallback).unwrap();

        let expected = outcomes
            .iter()
            .position(|o| *o)
            .map(|i| targets[i])
            .unwrap_or(fallback);
        prop_assert_eq!(graph.state(s).unwrap().resolve_predicates(&()), Ok(expected));
    }

    #[test]
    fn no_symbol_is_read_past_an_exit(
        path_len in 1usize..6,
        extra in prop::collection::vec(arbitrary_symbol(), 0..5),
    ) {
        let visits = Rc::new(Cell::new(0));
        let mut graph: StateGraph<char> = StateGraph::new();
        let states: Vec<_> = (0..=path_len)
            .map(|i| {
                let counter = Rc::clone(&visits);
                graph.add_state_with(
                    format!("S{i}"),
                    Action::from_fn(move || counter.set(counter.get() + 1)),
                )
            })
            .collect();
        for pair in states.windows(2) {
            graph.add_transition(pair[0], 'n', pair[1]).unwrap();
        }

        let mut seq = vec!['n'; path_len];
        seq.extend(extra);

        let exit = states[path_len];
        let mut machine = Machine::builder(&graph)
            .initial(states[0])
            .exit(exit)
            .exe_initial(true)
            .exe_exit(true)
            .record_history(true)
            .build()
            .unwrap();

        prop_assert!(machine.start(&seq).is_ok());
        prop_assert_eq!(visits.get(), path_len + 1);
        prop_assert_eq!(machine.history().len(), path_len + 1);
    }

    #[test]
    fn short_sequences_are_exhausted(path_len in 1usize..6, short_by in 1usize..6) {
        let short_by = short_by.min(path_len);
        let mut graph: StateGraph<char> = StateGraph::new();
        let states: Vec<_> = (0..=path_len)
            .map(|i| graph.add_state(format!("S{i}")))
            .collect();
        for pair in states.windows(2) {
            graph.add_transition(pair[0], 'n', pair[1]).unwrap();
        }

        let seq = vec!['n'; path_len - short_by];
        let mut machine = Machine::builder(&graph)
            .initial(states[0])
            .exit(states[path_len])
            .build()
            .unwrap();

        let result = machine.start(&seq);
        let expected_index = path_len - short_by;
        let exhausted_at_end = matches!(
            result,
            Err(FsmError::SequenceExhausted { index, len, .. })
                if index == expected_index && len == expected_index
        );
        prop_assert!(exhausted_at_end);
    }
}
