//! AtomicFloat

use crate::common::Float;
use std::sync::atomic::{AtomicU64, Ordering};

/// A `Float` that can be shared between threads. The value is kept as its
/// bit pattern in an `AtomicU64`.
pub struct AtomicFloat {
    bits: AtomicU64,
}

impl AtomicFloat {
    /// Create a new `AtomicFloat`.
    ///
    /// * `v` - Initial value.
    pub fn new(v: Float) -> Self {
        Self {
            bits: AtomicU64::new(v.to_bits()),
        }
    }

    /// Loads the value.
    ///
    /// * `order` - Memory ordering of the load.
    pub fn load(&self, order: Ordering) -> Float {
        Float::from_bits(self.bits.load(order))
    }

    /// Stores a value.
    ///
    /// * `v`     - The value.
    /// * `order` - Memory ordering of the store.
    pub fn store(&self, v: Float, order: Ordering) {
        self.bits.store(v.to_bits(), order);
    }
}

impl Default for AtomicFloat {
    fn default() -> Self {
        Self::new(0.0)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
