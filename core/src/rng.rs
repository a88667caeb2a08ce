//! Random Number Generator.

use crate::common::*;

/// 64-bit precision value for 1 - epsilon.
pub const ONE_MINUS_EPSILON: Float = hexf64!("0x1.fffffffffffffp-1"); // 0.99999999999999989

const PCG32_DEFAULT_STATE: u64 = 0x853c49e6748fea9b;
const PCG32_DEFAULT_STREAM: u64 = 0xda3e39cb94b95bdb;
const PCG32_MULT: u64 = 0x5851f42d4c957f2d;

/// Implements the PCG32 pseudo-random number generator. Each render thread
/// owns one; it is never shared.
#[derive(Clone)]
pub struct RNG {
    state: u64,
    inc: u64,
}

impl Default for RNG {
    /// Return a new instance of `RNG` with default state and stream.
    fn default() -> Self {
        Self {
            state: PCG32_DEFAULT_STATE,
            inc: PCG32_DEFAULT_STREAM,
        }
    }
}

impl RNG {
    /// Create a new `RNG` by seeding it with the given starting sequence.
    ///
    /// * `sequence_index` - The starting sequence to seed with.
    pub fn new(sequence_index: u64) -> Self {
        let mut ret = Self { state: 0, inc: 0 };
        ret.set_sequence(sequence_index);
        ret
    }

    /// Initialize the random number generator sequence.
    ///
    /// * `init_seq` - The starting sequence to seed with.
    #[inline(always)]
    fn set_sequence(&mut self, init_seq: u64) {
        self.state = 0;
        self.inc = init_seq.wrapping_shl(1) | 1;
        let _ = self.uniform_u32();

        self.state = self.state.wrapping_add(PCG32_DEFAULT_STATE);
        let _ = self.uniform_u32();
    }

    /// Returns a uniformly distributed u32 value.
    #[inline(always)]
    pub fn uniform_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(PCG32_MULT).wrapping_add(self.inc);

        let xor_shifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;

        xor_shifted.rotate_right(rot)
    }

    /// Returns a uniformly distributed value over the half open interval [0.0, 1.0).
    pub fn uniform_float(&mut self) -> Float {
        min(
            self.uniform_u32() as Float * hexf64!("0x1.0p-32"),
            ONE_MINUS_EPSILON,
        )
    }

    /// Returns a uniformly distributed value over the half open interval
    /// [low, high).
    ///
    /// * `low`  - Lower bound.
    /// * `high` - Upper bound.
    pub fn uniform_range(&mut self, low: Float, high: Float) -> Float {
        low + (high - low) * self.uniform_float()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_float_in_unit_interval() {
        let mut rng = RNG::new(42);
        for _ in 0..10_000 {
            let f = rng.uniform_float();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn uniform_range_bounds() {
        let mut rng = RNG::default();
        for _ in 0..10_000 {
            let f = rng.uniform_range(-0.25, 0.25);
            assert!((-0.25..0.25).contains(&f));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = RNG::new(7);
        let mut b = RNG::new(7);
        let mut c = RNG::new(8);
        let va: Vec<u32> = (0..8).map(|_| a.uniform_u32()).collect();
        let vb: Vec<u32> = (0..8).map(|_| b.uniform_u32()).collect();
        let vc: Vec<u32> = (0..8).map(|_| c.uniform_u32()).collect();
        assert_eq!(va, vb);
        assert_ne!(va, vc);
    }
}
