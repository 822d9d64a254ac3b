//! The registration table fed to the timed runner.
//!
//! [`registry`] lists every benchmark in registration order with the
//! parameters the runner should invoke it with. Each entry knows how to
//! build a boxed [`Trial`] for one of its parameters.

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::TrialError;
use crate::trial::{
    CachePath, CacheTrial, DispatchPath, DispatchTrial, ReturnPath, ReturnTrial, Trial, CACHE,
    DISPATCH, RETURNS,
};

/// Parameter list of one registration. No benchmark has more than five.
pub type Params = SmallVec<[i64; 5]>;

/// Builds the driver for one parameter.
pub type TrialBuilder = fn(i64) -> Result<Box<dyn Trial>, TrialError>;

/// One registered benchmark.
#[derive(Clone, Debug)]
pub struct Registration {
    /// Display name the runner reports under.
    pub name: &'static str,
    /// Parameters the runner invokes the benchmark with, in order.
    pub params: Params,
    build: TrialBuilder,
}

impl Registration {
    /// Build the driver for `param`.
    pub fn build(&self, param: i64) -> Result<Box<dyn Trial>, TrialError> {
        let trial = (self.build)(param)?;
        debug!(benchmark = self.name, param, "trial built");
        Ok(trial)
    }

    /// Build one driver per registered parameter, paired with it.
    pub fn trials(&self) -> Result<Vec<(i64, Box<dyn Trial>)>, TrialError> {
        self.params
            .iter()
            .map(|&param| self.build(param).map(|trial| (param, trial)))
            .collect()
    }

    /// Identifier the runner reports for `param`: `"{name}/{param}"`.
    pub fn bench_id(&self, param: i64) -> String {
        format!("{}/{param}", self.name)
    }
}

fn build_dispatch(param: i64) -> Result<Box<dyn Trial>, TrialError> {
    Ok(Box::new(DispatchTrial::new(param)?))
}

fn build_cache(param: i64) -> Result<Box<dyn Trial>, TrialError> {
    Ok(Box::new(CacheTrial::new(param)?))
}

fn build_returns(param: i64) -> Result<Box<dyn Trial>, TrialError> {
    Ok(Box::new(ReturnTrial::new(param)?))
}

/// Every benchmark, keyed by name, in registration order.
pub fn registry() -> IndexMap<&'static str, Registration> {
    let entries = [
        Registration {
            name: DISPATCH,
            params: Params::from_slice(&DispatchPath::PARAMS),
            build: build_dispatch,
        },
        Registration {
            name: CACHE,
            params: Params::from_slice(&CachePath::PARAMS),
            build: build_cache,
        },
        Registration {
            name: RETURNS,
            params: Params::from_slice(&ReturnPath::PARAMS),
            build: build_returns,
        },
    ];
    entries.into_iter().map(|r| (r.name, r)).collect()
}

/// Look a benchmark up by name and build its driver for `param`.
pub fn build_trial(name: &str, param: i64) -> Result<Box<dyn Trial>, TrialError> {
    let table = registry();
    let registration = table.get(name).ok_or_else(|| TrialError::UnknownBenchmark {
        name: name.to_string(),
    })?;
    registration.build(param)
}
