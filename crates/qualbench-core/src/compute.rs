//! Immutable constants with an interior-mutable result cache.
//!
//! [`ComputeHolder`] is read-only from the outside: every method takes
//! `&self`. The cache field alone sits in a [`Cell`], so
//! [`compute_cached`](ComputeHolder::compute_cached) can fill it without
//! a mutable borrow of the whole holder.
//!
//! # Sentinel
//!
//! An empty cache is represented by [`UNCOMPUTED`] (`0.0`), compared by
//! equality. Constants whose kernel result is exactly `0.0` (for example
//! `a == 0.0`) therefore never register as cached, and every call to
//! `compute_cached` recomputes. The result is still correct.

use std::cell::Cell;

use crate::kernel::{accumulate, DEFAULT_A, DEFAULT_B};

/// Cache value meaning "not yet computed".
pub const UNCOMPUTED: f64 = 0.0;

/// Two fixed constants and a lazily filled cache of their kernel result.
///
/// `!Sync` because of the [`Cell`]; a holder belongs to one thread.
#[derive(Debug, Clone)]
pub struct ComputeHolder {
    a: f64,
    b: f64,
    cache: Cell<f64>,
}

impl ComputeHolder {
    /// Create a holder over the default constants.
    pub fn new() -> Self {
        Self::with_constants(DEFAULT_A, DEFAULT_B)
    }

    /// Create a holder over arbitrary constants with an empty cache.
    pub fn with_constants(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            cache: Cell::new(UNCOMPUTED),
        }
    }

    /// The `(a, b)` constants this holder was built with.
    pub fn constants(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    /// Run the kernel over the constants. Never touches the cache.
    pub fn compute_raw(&self) -> f64 {
        accumulate(self.a, self.b)
    }

    /// Return the cached kernel result, computing and storing it first
    /// if the cache still holds [`UNCOMPUTED`].
    pub fn compute_cached(&self) -> f64 {
        if self.cache.get() == UNCOMPUTED {
            self.cache.set(self.compute_raw());
        }
        self.cache.get()
    }

    /// Whether the cache holds a computed (non-sentinel) value.
    pub fn is_cached(&self) -> bool {
        self.cache.get() != UNCOMPUTED
    }
}

impl Default for ComputeHolder {
    fn default() -> Self {
        Self::new()
    }
}
