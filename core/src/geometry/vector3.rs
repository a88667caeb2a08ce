//! 3-D Vectors

use crate::common::*;
use num_traits::{Num, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub};

/// A 3-D vector containing numeric values. Points in space are represented
/// by the same type.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    /// X-coordinate.
    pub x: T,

    /// Y-coordinate.
    pub y: T,

    /// Z-coordinate.
    pub z: T,
}

/// 3-D vector containing `Float` values.
pub type Vector3f = Vector3<Float>;

impl<T: Num> Vector3<T> {
    /// Creates a new 3-D vector.
    ///
    /// * `x` - X-coordinate.
    /// * `y` - Y-coordinate.
    /// * `z` - Z-coordinate.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new 3-D zero vector.
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Returns the square of the vector's length.
    pub fn length_squared(&self) -> T
    where
        T: Copy,
    {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the vector's length.
    pub fn length(&self) -> T
    where
        T: num_traits::Float,
    {
        self.length_squared().sqrt()
    }

    /// Returns the unit vector.
    pub fn normalize(&self) -> Self
    where
        T: num_traits::Float,
    {
        *self / self.length()
    }

    /// Returns the dot product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn dot(&self, other: &Self) -> T
    where
        T: Copy,
    {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product with another vector.
    ///
    /// * `other` - The other vector.
    pub fn cross(&self, other: &Self) -> Self
    where
        T: Copy,
    {
        Self::new(
            (self.y * other.z) - (self.z * other.y),
            (self.z * other.x) - (self.x * other.z),
            (self.x * other.y) - (self.y * other.x),
        )
    }

    /// Returns the squared distance to another point.
    ///
    /// * `other` - The other point.
    pub fn distance_squared(&self, other: &Self) -> T
    where
        T: Copy,
    {
        (*self - *other).length_squared()
    }
}

impl Vector3f {
    /// Returns the mirror image of the direction `self` about the normal `n`.
    /// The normal must be of unit length.
    ///
    /// * `n` - The surface normal.
    pub fn reflect(&self, n: &Vector3f) -> Vector3f {
        *self - *n * (2.0 * self.dot(n))
    }

    /// Constructs two unit vectors that together with `self` form an
    /// orthonormal basis. `self` must be normalized.
    pub fn coordinate_system(&self) -> (Vector3f, Vector3f) {
        let v2 = if abs(self.x) > abs(self.y) {
            Vector3f::new(-self.z, 0.0, self.x) / (self.x * self.x + self.z * self.z).sqrt()
        } else {
            Vector3f::new(0.0, self.z, -self.y) / (self.y * self.y + self.z * self.z).sqrt()
        };
        let v3 = self.cross(&v2);
        (v2, v3)
    }
}

impl<T: Num> Add for Vector3<T> {
    type Output = Self;

    /// Adds the given vector and returns the result.
    ///
    /// * `other` -  The vector to add.
    fn add(self, other: Self) -> Self::Output {
        Self::Output::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Num + Copy> AddAssign for Vector3<T> {
    /// Performs the `+=` operation.
    ///
    /// * `other` -  The vector to add.
    fn add_assign(&mut self, other: Self) {
        *self = Self::new(self.x + other.x, self.y + other.y, self.z + other.z);
    }
}

impl<T: Num> Sub for Vector3<T> {
    type Output = Self;

    /// Subtracts the given vector and returns the result.
    ///
    /// * `other` -  The vector to subtract.
    fn sub(self, other: Self) -> Self::Output {
        Self::Output::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Num + Copy> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;

    /// Scale the vector.
    ///
    /// * `f` -  The scaling factor.
    fn mul(self, f: T) -> Self::Output {
        Self::Output::new(f * self.x, f * self.y, f * self.z)
    }
}

impl Mul<Vector3f> for Float {
    type Output = Vector3f;

    /// Scale the vector.
    ///
    /// * `v` -  The vector.
    fn mul(self, v: Vector3f) -> Vector3f {
        Vector3f::new(self * v.x, self * v.y, self * v.z)
    }
}

impl<T: Num + Copy> Div<T> for Vector3<T> {
    type Output = Self;

    /// Scale the vector by 1/f.
    ///
    /// * `f` -  The scaling factor.
    fn div(self, f: T) -> Self::Output {
        debug_assert!(!f.is_zero());

        let inv = T::one() / f;
        Self::Output::new(inv * self.x, inv * self.y, inv * self.z)
    }
}

impl<T: Num + Neg<Output = T>> Neg for Vector3<T> {
    type Output = Vector3<T>;

    /// Flip the vector's direction (scale by -1).
    fn neg(self) -> Self::Output {
        Self::Output::new(-self.x, -self.y, -self.z)
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    /// Index the vector to get the immutable coordinate value.
    ///
    /// * `i` -  Coordinate index in [0, 2].
    fn index(&self, i: usize) -> &Self::Output {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Invalid index {i} for Vector3"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn zero_vector() {
        assert!(Vector3::new(0, 0, 0) == Vector3::zero());
        assert_eq!(Vector3f::zero().length(), 0.0);
    }

    #[test]
    fn cross_axis() {
        let x_axis = Vector3::new(1.0, 0.0, 0.0);
        let y_axis = Vector3::new(0.0, 1.0, 0.0);
        let z_axis = Vector3::new(0.0, 0.0, 1.0);

        assert!(x_axis.cross(&y_axis) == z_axis);
        assert!(y_axis.cross(&x_axis) == -z_axis);
        assert!(y_axis.cross(&z_axis) == x_axis);
        assert!(z_axis.cross(&x_axis) == y_axis);
    }

    #[test]
    fn reflect_about_normal() {
        let d = Vector3f::new(1.0, -1.0, 0.0);
        let n = Vector3f::new(0.0, 1.0, 0.0);
        assert_eq!(d.reflect(&n), Vector3f::new(1.0, 1.0, 0.0));
    }

    prop_compose! {
        fn unit_vector3()(x in -1.0..1.0f64, y in -1.0..1.0f64, z in -1.0..1.0f64)
            -> Vector3f {
            let v = Vector3f::new(x, y, z);
            if v.length_squared() < 0.01 {
                Vector3f::new(0.0, 0.0, 1.0)
            } else {
                v.normalize()
            }
        }
    }

    proptest! {
        #[test]
        fn reflect_preserves_length(d in unit_vector3(), n in unit_vector3()) {
            prop_assert!(approx_eq!(Float, d.reflect(&n).length(), 1.0, epsilon = 1e-9));
        }

        #[test]
        fn coordinate_system_is_orthonormal(v in unit_vector3()) {
            let (v2, v3) = v.coordinate_system();
            prop_assert!(approx_eq!(Float, v.dot(&v2), 0.0, epsilon = 1e-9));
            prop_assert!(approx_eq!(Float, v.dot(&v3), 0.0, epsilon = 1e-9));
            prop_assert!(approx_eq!(Float, v2.dot(&v3), 0.0, epsilon = 1e-9));
            prop_assert!(approx_eq!(Float, v2.length(), 1.0, epsilon = 1e-9));
            prop_assert!(approx_eq!(Float, v3.length(), 1.0, epsilon = 1e-9));
        }

        #[test]
        fn dot_is_symmetric(v1 in unit_vector3(), v2 in unit_vector3()) {
            prop_assert_eq!(v1.dot(&v2), v2.dot(&v1));
        }
    }
}
