//! The trigonometric filler loop shared by every compute method.

/// Number of `sin(a) * cos(b)` terms summed per call.
pub const KERNEL_ITERATIONS: usize = 100;

/// Default first constant for the compute holders.
#[allow(clippy::approx_constant)]
pub const DEFAULT_A: f64 = 3.14159;

/// Default second constant for the compute holders.
#[allow(clippy::approx_constant)]
pub const DEFAULT_B: f64 = 2.71828;

/// Sum `sin(a) * cos(b)` over [`KERNEL_ITERATIONS`] iterations.
///
/// The product is written inside the loop body; whether it gets hoisted
/// is up to the optimiser.
#[inline]
pub fn accumulate(a: f64, b: f64) -> f64 {
    let mut result = 0.0;
    for _ in 0..KERNEL_ITERATIONS {
        result += a.sin() * b.cos();
    }
    result
}
