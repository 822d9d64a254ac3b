//! Walk the registration table without the statistics runner.
//!
//! Demonstrates: list benchmarks → build each driver → run it a fixed
//! number of times → print a rough per-call time. Useful for a quick
//! sanity check; use `cargo bench` for real numbers.

use std::time::Instant;

use qualbench_bench::{init_logging, registry};

const ITERATIONS: u32 = 100_000;

fn main() {
    init_logging();
    println!("=== qualbench registry ({ITERATIONS} calls per trial) ===\n");

    for registration in registry().values() {
        println!("{}", registration.name);
        let trials = match registration.trials() {
            Ok(trials) => trials,
            Err(err) => {
                eprintln!("  cannot build trials: {err}");
                continue;
            }
        };

        for (param, mut trial) in trials {
            let start = Instant::now();
            for _ in 0..ITERATIONS {
                trial.run_once();
            }
            let per_call = start.elapsed() / ITERATIONS;
            println!("  {:<40} {per_call:?}", registration.bench_id(param));
        }
        println!();
    }
}
