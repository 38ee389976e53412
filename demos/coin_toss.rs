//! Coin Toss
//!
//! Estimates how many tosses it takes to see heads immediately followed by
//! tails, by running a symbol-driven machine over random toss sequences.
//!
//! Key concepts:
//! - Symbol-keyed transitions with self-loops
//! - Counting through zero-argument state actions
//! - `exe_exit` so the final toss is counted too
//!
//! Run with: cargo run --example coin_toss

use rand::Rng;
use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;
use transit::core::{Action, StateGraph};
use transit::engine::{FsmError, Machine, SimpleMachine};

const TRIALS: usize = 10_000;
const MAX_TOSSES: usize = 25;

fn toss(rng: &mut impl Rng) -> Vec<char> {
    (0..MAX_TOSSES)
        .map(|_| if rng.gen_bool(0.5) { 'H' } else { 'T' })
        .collect()
}

/// Number of tosses needed to see `HT`, or `None` if the sequence ran out.
fn tosses_until_ht(seq: &[char]) -> Result<Option<usize>, Box<dyn Error>> {
    let count = Rc::new(Cell::new(0));
    let counting = |name: &str, graph: &mut StateGraph<char>| {
        let count = Rc::clone(&count);
        graph.add_state_with(name, Action::from_fn(move || count.set(count.get() + 1)))
    };

    let mut graph: StateGraph<char> = StateGraph::new();
    let start = graph.add_state("start");
    let waiting = counting("wait-heads", &mut graph);
    let heads = counting("heads", &mut graph);
    let done = counting("exit", &mut graph);

    graph.add_transition(start, 'H', waiting)?;
    graph.add_transition(start, 'T', waiting)?;
    graph.add_transition(waiting, 'T', waiting)?;
    graph.add_transition(waiting, 'H', heads)?;
    graph.add_transition(heads, 'H', heads)?;
    graph.add_transition(heads, 'T', done)?;

    let mut machine: SimpleMachine<'_, char> = Machine::builder(&graph)
        .initial(start)
        .exit(done)
        .exe_exit(true)
        .machine_id("coin-toss")
        .build()?;

    match machine.start(seq) {
        Ok(()) => Ok(Some(count.get())),
        Err(FsmError::SequenceExhausted { .. }) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Coin Toss Example ===\n");

    let mut rng = rand::thread_rng();
    let mut total = 0;
    let mut finished = 0;

    for _ in 0..TRIALS {
        if let Some(n) = tosses_until_ht(&toss(&mut rng))? {
            total += n;
            finished += 1;
        }
    }

    println!("Trials finished: {finished} of {TRIALS}");
    println!("Total tosses:    {total}");
    println!("Average:         {:.3}", total as f64 / finished.max(1) as f64);
    println!("Expected:        4.000");

    println!("\n=== Example Complete ===");
    Ok(())
}
