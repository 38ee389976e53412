//! Counting Loop
//!
//! Expresses `for a in 1..k` as a predicate-driven machine over a shared
//! variable store.
//!
//! Key concepts:
//! - Predicate-keyed transitions evaluated against shared state
//! - Wildcard fallback to loop back into the same state
//! - Reading results back from the store after the run
//!
//! Run with: cargo run --example counting_loop

use std::error::Error;
use tracing_subscriber::EnvFilter;
use transit::core::{Action, Predicate, StateGraph, Variables};
use transit::engine::{Machine, PredicateMachine};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Counting Loop Example ===\n");

    let mut graph: StateGraph<Predicate<Variables>, Variables> = StateGraph::new();
    let start = graph.add_state("Start");
    let body = graph.add_state_with(
        "Loop",
        Action::new(|vars: &mut Variables| {
            println!("Looping: {}", vars.get_i64("a").unwrap_or_default());
            vars.increment("a", 1);
        }),
    );
    let end = graph.add_state("End");

    // Start goes straight into the loop.
    graph.add_wildcard(start, body)?;

    let finished = Predicate::labeled("a >= k", |vars: &Variables| {
        vars.get_i64("a") >= vars.get_i64("k")
    });
    graph.add_transition(body, finished, end)?;
    graph.add_wildcard(body, body)?;

    let mut vars: Variables = [("a", 1), ("k", 10)].into_iter().collect();

    let mut machine: PredicateMachine<'_, Variables> = Machine::builder(&graph)
        .initial(start)
        .exit(end)
        .machine_id("counting-loop")
        .record_history(true)
        .build()?;
    machine.start_with(&mut vars)?;

    println!("\nFinal store: {}", serde_json::to_string(&vars)?);
    println!("States visited: {}", machine.history().len());

    println!("\n=== Example Complete ===");
    Ok(())
}
