//! Runner configuration: sample counts and timing budgets.
//!
//! [`RunnerConfig`] carries the knobs the bench target hands to the
//! timed-trial runner. Defaults match the runner's own defaults; each knob
//! can be overridden through a `QUALBENCH_*` environment variable.
//! Command-line flags parsed by the runner still take precedence.

use std::env;
use std::time::Duration;

use tracing::info;

use crate::error::ConfigError;

/// Environment variable names.
pub mod vars {
    /// Samples collected per trial.
    pub const SAMPLE_SIZE: &str = "QUALBENCH_SAMPLE_SIZE";
    /// Warm-up budget in milliseconds.
    pub const WARM_UP_MS: &str = "QUALBENCH_WARM_UP_MS";
    /// Measurement budget in milliseconds.
    pub const MEASUREMENT_MS: &str = "QUALBENCH_MEASUREMENT_MS";
    /// Relative change below which a result counts as noise.
    pub const NOISE_THRESHOLD: &str = "QUALBENCH_NOISE_THRESHOLD";
}

/// Smallest sample size the runner accepts.
pub const MIN_SAMPLE_SIZE: usize = 10;

// ── RunnerConfig ───────────────────────────────────────────────────

/// Knobs applied to the timed-trial runner before any trial runs.
#[derive(Clone, Debug, PartialEq)]
pub struct RunnerConfig {
    /// Samples collected per (name, parameter) pair. Default: 100.
    pub sample_size: usize,
    /// Warm-up budget per trial. Default: 3 s.
    pub warm_up: Duration,
    /// Measurement budget per trial. Default: 5 s.
    pub measurement: Duration,
    /// Relative change treated as noise when comparing runs. Default: 0.01.
    pub noise_threshold: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            sample_size: 100,
            warm_up: Duration::from_secs(3),
            measurement: Duration::from_secs(5),
            noise_threshold: 0.01,
        }
    }
}

impl RunnerConfig {
    /// Defaults overridden by any `QUALBENCH_*` variable in the process
    /// environment, then validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    /// name, then validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(vars::SAMPLE_SIZE) {
            config.sample_size = parse_var(vars::SAMPLE_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(vars::WARM_UP_MS) {
            config.warm_up = Duration::from_millis(parse_var(vars::WARM_UP_MS, &raw)?);
        }
        if let Some(raw) = lookup(vars::MEASUREMENT_MS) {
            config.measurement = Duration::from_millis(parse_var(vars::MEASUREMENT_MS, &raw)?);
        }
        if let Some(raw) = lookup(vars::NOISE_THRESHOLD) {
            config.noise_threshold = parse_var(vars::NOISE_THRESHOLD, &raw)?;
        }

        config.validate()?;
        info!(
            sample_size = config.sample_size,
            warm_up = ?config.warm_up,
            measurement = ?config.measurement,
            noise_threshold = config.noise_threshold,
            "runner config resolved"
        );
        Ok(config)
    }

    /// Check the values the runner would otherwise reject by panicking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size < MIN_SAMPLE_SIZE {
            return Err(ConfigError::SampleSizeTooSmall {
                configured: self.sample_size,
            });
        }
        if self.warm_up.is_zero() {
            return Err(ConfigError::ZeroDuration { field: "warm_up" });
        }
        if self.measurement.is_zero() {
            return Err(ConfigError::ZeroDuration {
                field: "measurement",
            });
        }
        if !self.noise_threshold.is_finite() || self.noise_threshold < 0.0 {
            return Err(ConfigError::InvalidNoiseThreshold {
                value: self.noise_threshold,
            });
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        var,
        value: raw.to_string(),
    })
}
