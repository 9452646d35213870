//! Comparison and ordering helpers for sensitive buffers

use subtle::ConstantTimeEq;

/// Trait for types that can be compared without early exit
///
/// Equality of IVs and counters goes through this trait so that comparing
/// two blocks does not leak the position of the first differing byte.
pub trait SecureCompare {
    /// Compare two values in constant time
    fn secure_eq(&self, other: &Self) -> bool;
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_eq(&self, other: &Self) -> bool {
        bool::from(self[..].ct_eq(&other[..]))
    }
}

impl SecureCompare for [u8] {
    fn secure_eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }
}
