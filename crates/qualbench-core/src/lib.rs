//! Value holders measured by the qualbench benchmarks.
//!
//! This is the leaf crate with zero internal dependencies. Each holder
//! exposes the same logical data under a different method-qualification
//! idiom so the bench crate can time them side by side:
//!
//! - [`ComputeHolder`]: immutable constants plus an interior-mutable cache.
//! - [`CollectionHolder`]: borrowed vs owned return values.
//! - [`DualComputeHolder`]: `&self` vs `&mut self` receivers over one body.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collection;
pub mod compute;
pub mod dual;
pub mod kernel;

pub use collection::{CollectionHolder, ReadOnly};
pub use compute::ComputeHolder;
pub use dual::DualComputeHolder;
pub use kernel::{accumulate, DEFAULT_A, DEFAULT_B, KERNEL_ITERATIONS};
