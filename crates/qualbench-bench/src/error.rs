//! Error types for trial construction and runner configuration.

use std::error::Error;
use std::fmt;

/// Errors from looking up or building a trial driver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrialError {
    /// No benchmark is registered under this name.
    UnknownBenchmark {
        /// The requested name.
        name: String,
    },
    /// The benchmark exists but has no code path for this parameter.
    UnknownParameter {
        /// Registered name of the benchmark.
        benchmark: &'static str,
        /// The rejected parameter.
        param: i64,
    },
}

impl fmt::Display for TrialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownBenchmark { name } => write!(f, "no benchmark registered as '{name}'"),
            Self::UnknownParameter { benchmark, param } => {
                write!(f, "benchmark '{benchmark}' has no path for parameter {param}")
            }
        }
    }
}

impl Error for TrialError {}

/// Errors detected while loading or validating a
/// [`RunnerConfig`](crate::config::RunnerConfig).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed.
    InvalidEnv {
        /// Name of the variable.
        var: &'static str,
        /// The raw value found.
        value: String,
    },
    /// Sample size is below the runner's minimum of 10.
    SampleSizeTooSmall {
        /// The configured size.
        configured: usize,
    },
    /// A duration knob is zero.
    ZeroDuration {
        /// Which knob.
        field: &'static str,
    },
    /// Noise threshold is NaN, infinite, or negative.
    InvalidNoiseThreshold {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnv { var, value } => write!(f, "cannot parse {var}={value:?}"),
            Self::SampleSizeTooSmall { configured } => {
                write!(f, "sample_size {configured} is below the minimum of 10")
            }
            Self::ZeroDuration { field } => write!(f, "{field} must be non-zero"),
            Self::InvalidNoiseThreshold { value } => {
                write!(f, "noise_threshold must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offender() {
        let err = TrialError::UnknownParameter {
            benchmark: "Const vs Non-const Method",
            param: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("Const vs Non-const Method"));
        assert!(msg.contains('7'));

        let err = ConfigError::InvalidEnv {
            var: "QUALBENCH_SAMPLE_SIZE",
            value: "lots".into(),
        };
        assert_eq!(err.to_string(), "cannot parse QUALBENCH_SAMPLE_SIZE=\"lots\"");
    }
}
