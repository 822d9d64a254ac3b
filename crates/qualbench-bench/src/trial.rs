//! Trial drivers: one unit of timed work per (benchmark, parameter) pair.
//!
//! A driver owns the holder(s) it exercises, built once before the timed
//! loop, and a path chosen from the trial parameter at construction.
//! [`Trial::run_once`] executes that path and feeds the result to
//! [`black_box`] so the optimiser cannot discard it.

use std::hint::black_box;

use qualbench_core::{CollectionHolder, ComputeHolder, DualComputeHolder};

use crate::error::TrialError;

/// Registered name of [`DispatchTrial`].
pub const DISPATCH: &str = "Const vs Non-const Method";
/// Registered name of [`CacheTrial`].
pub const CACHE: &str = "Regular vs Cached Const Method";
/// Registered name of [`ReturnTrial`].
pub const RETURNS: &str = "Different Const Return Types";

/// A unit of work the timed runner invokes once per iteration.
pub trait Trial {
    /// Registered benchmark name.
    fn name(&self) -> &'static str;

    /// The parameter this driver was built from.
    fn param(&self) -> i64;

    /// Execute the selected path once, sinking its result.
    fn run_once(&mut self);
}

// ── Receiver dispatch ──────────────────────────────────────────────

/// Which receiver [`DispatchTrial`] calls through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchPath {
    /// `compute_mut` on a holder borrowed exclusively. Parameter 0.
    Exclusive,
    /// `compute` on a holder borrowed shared. Parameter 1.
    Shared,
}

impl DispatchPath {
    /// Parameters this path enum accepts, in order.
    pub const PARAMS: [i64; 2] = [0, 1];

    /// Map a trial parameter to its path.
    pub fn from_param(param: i64) -> Result<Self, TrialError> {
        match param {
            0 => Ok(Self::Exclusive),
            1 => Ok(Self::Shared),
            _ => Err(TrialError::UnknownParameter {
                benchmark: DISPATCH,
                param,
            }),
        }
    }
}

/// Times `&mut self` vs `&self` calls over identical bodies.
#[derive(Debug)]
pub struct DispatchTrial {
    path: DispatchPath,
    exclusive: DualComputeHolder,
    shared: DualComputeHolder,
}

impl DispatchTrial {
    /// Build the driver for `param`.
    pub fn new(param: i64) -> Result<Self, TrialError> {
        Ok(Self {
            path: DispatchPath::from_param(param)?,
            exclusive: DualComputeHolder::new(),
            shared: DualComputeHolder::new(),
        })
    }

    /// The path this driver runs.
    pub fn path(&self) -> DispatchPath {
        self.path
    }
}

impl Trial for DispatchTrial {
    fn name(&self) -> &'static str {
        DISPATCH
    }

    fn param(&self) -> i64 {
        self.path as i64
    }

    fn run_once(&mut self) {
        match self.path {
            DispatchPath::Exclusive => {
                black_box(self.exclusive.compute_mut());
            }
            DispatchPath::Shared => {
                let shared = &self.shared;
                black_box(shared.compute());
            }
        }
    }
}

// ── Cached computation ─────────────────────────────────────────────

/// Which method [`CacheTrial`] calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachePath {
    /// `compute_raw`, recomputed every call. Parameter 0.
    Raw,
    /// `compute_cached`, filled on the first call. Parameter 1.
    Cached,
}

impl CachePath {
    /// Parameters this path enum accepts, in order.
    pub const PARAMS: [i64; 2] = [0, 1];

    /// Map a trial parameter to its path.
    pub fn from_param(param: i64) -> Result<Self, TrialError> {
        match param {
            0 => Ok(Self::Raw),
            1 => Ok(Self::Cached),
            _ => Err(TrialError::UnknownParameter {
                benchmark: CACHE,
                param,
            }),
        }
    }
}

/// Times a fresh kernel run against a cached read.
#[derive(Debug)]
pub struct CacheTrial {
    path: CachePath,
    holder: ComputeHolder,
}

impl CacheTrial {
    /// Build the driver for `param`.
    pub fn new(param: i64) -> Result<Self, TrialError> {
        Ok(Self {
            path: CachePath::from_param(param)?,
            holder: ComputeHolder::new(),
        })
    }

    /// The path this driver runs.
    pub fn path(&self) -> CachePath {
        self.path
    }

    /// The holder the driver exercises.
    pub fn holder(&self) -> &ComputeHolder {
        &self.holder
    }
}

impl Trial for CacheTrial {
    fn name(&self) -> &'static str {
        CACHE
    }

    fn param(&self) -> i64 {
        self.path as i64
    }

    fn run_once(&mut self) {
        match self.path {
            CachePath::Raw => {
                black_box(self.holder.compute_raw());
            }
            CachePath::Cached => {
                black_box(self.holder.compute_cached());
            }
        }
    }
}

// ── Return strategies ──────────────────────────────────────────────

/// Which accessor [`ReturnTrial`] calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnPath {
    /// Borrowed sequence. Parameter 0.
    DataRef,
    /// Owned copy of the sequence. Parameter 1.
    DataCopy,
    /// Read-only owned copy of the sequence. Parameter 2.
    DataConstCopy,
    /// Borrowed label. Parameter 3.
    NameRef,
    /// Owned copy of the label. Parameter 4.
    NameCopy,
}

impl ReturnPath {
    /// Parameters this path enum accepts, in order.
    pub const PARAMS: [i64; 5] = [0, 1, 2, 3, 4];

    /// Map a trial parameter to its path.
    pub fn from_param(param: i64) -> Result<Self, TrialError> {
        match param {
            0 => Ok(Self::DataRef),
            1 => Ok(Self::DataCopy),
            2 => Ok(Self::DataConstCopy),
            3 => Ok(Self::NameRef),
            4 => Ok(Self::NameCopy),
            _ => Err(TrialError::UnknownParameter {
                benchmark: RETURNS,
                param,
            }),
        }
    }
}

/// Times borrowed against owned returns of the same content.
///
/// Every path sinks a reference to what it got back, so borrowed and owned
/// results pass through the same barrier.
#[derive(Debug)]
pub struct ReturnTrial {
    path: ReturnPath,
    holder: CollectionHolder,
}

impl ReturnTrial {
    /// Build the driver for `param`.
    pub fn new(param: i64) -> Result<Self, TrialError> {
        Ok(Self {
            path: ReturnPath::from_param(param)?,
            holder: CollectionHolder::new(),
        })
    }

    /// The path this driver runs.
    pub fn path(&self) -> ReturnPath {
        self.path
    }

    /// The holder the driver exercises.
    pub fn holder(&self) -> &CollectionHolder {
        &self.holder
    }
}

impl Trial for ReturnTrial {
    fn name(&self) -> &'static str {
        RETURNS
    }

    fn param(&self) -> i64 {
        self.path as i64
    }

    fn run_once(&mut self) {
        let holder = &self.holder;
        match self.path {
            ReturnPath::DataRef => {
                let data = holder.data();
                black_box(&data);
            }
            ReturnPath::DataCopy => {
                let data = holder.data_copy();
                black_box(&data);
            }
            ReturnPath::DataConstCopy => {
                let data = holder.data_const_copy();
                black_box(&data);
            }
            ReturnPath::NameRef => {
                let name = holder.name();
                black_box(&name);
            }
            ReturnPath::NameCopy => {
                let name = holder.name_copy();
                black_box(&name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_paths_map_from_params() {
        assert_eq!(DispatchPath::from_param(0), Ok(DispatchPath::Exclusive));
        assert_eq!(DispatchPath::from_param(1), Ok(DispatchPath::Shared));
        assert_eq!(
            DispatchPath::from_param(2),
            Err(TrialError::UnknownParameter {
                benchmark: DISPATCH,
                param: 2
            })
        );
    }

    #[test]
    fn cache_paths_map_from_params() {
        assert_eq!(CachePath::from_param(0), Ok(CachePath::Raw));
        assert_eq!(CachePath::from_param(1), Ok(CachePath::Cached));
        assert!(CachePath::from_param(-1).is_err());
        for param in CachePath::PARAMS {
            let trial = CacheTrial::new(param).unwrap();
            assert_eq!(Ok(trial.path()), CachePath::from_param(param));
        }
    }

    #[test]
    fn return_paths_round_trip_through_param() {
        for param in ReturnPath::PARAMS {
            let trial = ReturnTrial::new(param).unwrap();
            assert_eq!(trial.param(), param);
            assert_eq!(Ok(trial.path()), ReturnPath::from_param(param));
        }
        assert!(ReturnPath::from_param(5).is_err());
    }

    #[test]
    fn cached_path_fills_cache_after_one_run() {
        let mut trial = CacheTrial::new(1).unwrap();
        assert!(!trial.holder().is_cached());
        trial.run_once();
        assert!(trial.holder().is_cached());
    }

    #[test]
    fn raw_path_leaves_cache_empty() {
        let mut trial = CacheTrial::new(0).unwrap();
        for _ in 0..5 {
            trial.run_once();
        }
        assert!(!trial.holder().is_cached());
    }

    #[test]
    fn return_paths_leave_holder_unchanged() {
        for param in ReturnPath::PARAMS {
            let mut trial = ReturnTrial::new(param).unwrap();
            for _ in 0..3 {
                trial.run_once();
            }
            assert_eq!(trial.holder(), &CollectionHolder::new(), "path {param}");
        }
    }

    #[test]
    fn dispatch_paths_run() {
        for param in DispatchPath::PARAMS {
            let mut trial = DispatchTrial::new(param).unwrap();
            assert_eq!(Ok(trial.path()), DispatchPath::from_param(param));
            trial.run_once();
            assert_eq!(trial.name(), DISPATCH);
            assert_eq!(trial.param(), param);
        }
    }
}
