//! One computation behind a shared and an exclusive receiver.

use crate::kernel::{accumulate, DEFAULT_A, DEFAULT_B};

/// Two fixed constants with the same kernel exposed through `&self` and
/// `&mut self`.
///
/// Neither method mutates anything; the exclusive receiver only changes
/// what the caller must hold to make the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DualComputeHolder {
    a: f64,
    b: f64,
}

impl DualComputeHolder {
    /// Create a holder over the default constants.
    pub fn new() -> Self {
        Self::with_constants(DEFAULT_A, DEFAULT_B)
    }

    /// Create a holder over arbitrary constants.
    pub fn with_constants(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Run the kernel through a shared borrow.
    pub fn compute(&self) -> f64 {
        accumulate(self.a, self.b)
    }

    /// Run the kernel through an exclusive borrow.
    #[allow(clippy::needless_pass_by_ref_mut)]
    pub fn compute_mut(&mut self) -> f64 {
        accumulate(self.a, self.b)
    }
}

impl Default for DualComputeHolder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn receivers_agree_on_defaults() {
        let read_only = DualComputeHolder::new();
        let mut exclusive = DualComputeHolder::new();
        assert_eq!(read_only.compute().to_bits(), exclusive.compute_mut().to_bits());
    }

    #[test]
    fn exclusive_call_leaves_holder_unchanged() {
        let mut holder = DualComputeHolder::new();
        let before = holder;
        holder.compute_mut();
        assert_eq!(holder, before);
    }

    proptest! {
        #[test]
        fn receivers_agree(a in -10.0f64..10.0, b in -10.0f64..10.0) {
            let read_only = DualComputeHolder::with_constants(a, b);
            let mut exclusive = DualComputeHolder::with_constants(a, b);
            prop_assert_eq!(read_only.compute().to_bits(), exclusive.compute_mut().to_bits());
        }
    }
}
