//! Criterion benchmarks for method-qualification idioms.
//!
//! One group per registered benchmark, one id per trial parameter:
//!
//! - `Const vs Non-const Method/{0,1}`
//! - `Regular vs Cached Const Method/{0,1}`
//! - `Different Const Return Types/{0..4}`
//!
//! Names and parameters come from the registry; the timed loop calls the
//! concrete driver type so `run_once` can inline.
//!
//! Run with: cargo bench --bench qualifiers

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use qualbench_bench::trial::{CACHE, DISPATCH, RETURNS};
use qualbench_bench::{
    init_logging, registry, CacheTrial, DispatchTrial, ReturnTrial, RunnerConfig, Trial,
    TrialError,
};

/// Criterion configured from `QUALBENCH_*` variables. Aborts on a bad value.
fn runner_criterion() -> Criterion {
    init_logging();
    let config = match RunnerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid runner config");
            panic!("invalid runner config: {err}");
        }
    };

    Criterion::default()
        .sample_size(config.sample_size)
        .warm_up_time(config.warm_up)
        .measurement_time(config.measurement)
        .noise_threshold(config.noise_threshold)
}

/// Benchmark every registered parameter of `name` with driver type `T`.
fn bench_paths<T: Trial>(
    c: &mut Criterion,
    name: &'static str,
    build: fn(i64) -> Result<T, TrialError>,
) {
    let table = registry();
    let Some(registration) = table.get(name) else {
        tracing::error!(benchmark = name, "benchmark not registered");
        panic!("benchmark '{name}' not registered");
    };

    let mut group = c.benchmark_group(name);
    for &param in &registration.params {
        let mut trial = match build(param) {
            Ok(trial) => trial,
            Err(err) => {
                tracing::error!(benchmark = name, param, %err, "cannot build trial");
                panic!("cannot build trial '{name}/{param}': {err}");
            }
        };
        group.bench_function(BenchmarkId::from_parameter(param), |b| {
            b.iter(|| trial.run_once());
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    bench_paths(c, DISPATCH, DispatchTrial::new);
}

fn bench_cache(c: &mut Criterion) {
    bench_paths(c, CACHE, CacheTrial::new);
}

fn bench_returns(c: &mut Criterion) {
    bench_paths(c, RETURNS, ReturnTrial::new);
}

criterion_group! {
    name = benches;
    config = runner_criterion();
    targets = bench_dispatch, bench_cache, bench_returns
}
criterion_main!(benches);
