//! Benchmark drivers and registration for the qualbench holders.
//!
//! - [`registry`]: the three benchmarks and their parameter sets, in order.
//! - [`Trial`]: one unit of timed work, built per (name, parameter) pair.
//! - [`RunnerConfig`]: sample and timing knobs, overridable from the environment.
//! - [`init_logging`]: stderr `tracing` output filtered by `RUST_LOG`.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod registry;
pub mod trial;

pub use config::RunnerConfig;
pub use error::{ConfigError, TrialError};
pub use registry::{build_trial, registry, Registration};
pub use trial::{CacheTrial, DispatchTrial, ReturnTrial, Trial};

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Stdout belongs to the runner's report. Calling this more than once is
/// harmless; later calls leave the first subscriber in place.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
