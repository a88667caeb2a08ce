//! Common numeric types, constants and helpers.

use num_traits::Num;
use std::ops::Neg;

/// Use 64-bit precision for floating point numbers.
pub type Float = f64;

/// Infinity (∞)
pub const INFINITY: Float = Float::INFINITY;

/// PI (π)
pub const PI: Float = std::f64::consts::PI;

/// 2*PI (2π)
pub const TWO_PI: Float = PI * 2.0;

/// Tolerance used for intersection parameters and the default minimum ray
/// importance.
pub const EPSILON: Float = 0.000001;

/// Returns the absolute value of a number.
///
/// * `n` - The number.
#[inline(always)]
pub fn abs<T>(n: T) -> T
where
    T: Num + Neg<Output = T> + PartialOrd + Copy,
{
    if n < T::zero() {
        -n
    } else {
        n
    }
}

/// Returns the minimum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn min<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the maximum of 2 numbers.
///
/// * `a` - First number.
/// * `b` - Second number.
#[inline(always)]
pub fn max<T>(a: T, b: T) -> T
where
    T: Num + PartialOrd + Copy,
{
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps a value to the closed interval `[low, high]`.
///
/// * `val`  - The value.
/// * `low`  - Lower bound.
/// * `high` - Upper bound.
#[inline(always)]
pub fn clamp<T>(val: T, low: T, high: T) -> T
where
    T: PartialOrd,
{
    if val < low {
        low
    } else if val > high {
        high
    } else {
        val
    }
}

/// Returns true if `v` is a power of 2. Zero is not a power of 2.
///
/// * `v` - The value.
#[inline(always)]
pub fn is_power_of_2(v: u32) -> bool {
    v != 0 && (v & (v - 1)) == 0
}

/// Returns true if two floating point values are equal to within `EPSILON`.
///
/// * `a` - First value.
/// * `b` - Second value.
#[inline(always)]
pub fn float_eq(a: Float, b: Float) -> bool {
    abs(a - b) < EPSILON
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_2() {
        assert!(!is_power_of_2(0));
        for shift in 0..32 {
            assert!(is_power_of_2(1 << shift));
        }
        assert!(!is_power_of_2(3));
        assert!(!is_power_of_2(6));
        assert!(!is_power_of_2(1023));
    }

    #[test]
    fn clamp_values() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(7, 0, 5), 5);
    }
}
