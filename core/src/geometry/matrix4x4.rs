//! 4x4 Matrix

use crate::common::*;
use std::ops::Mul;

/// A 4x4 matrix containing Float values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4 {
    /// Stores a 2-D array of Float
    pub m: [[Float; 4]; 4],
}

/// Identity matrix.
pub const IDENTITY_MATRIX: Matrix4x4 = Matrix4x4 {
    m: [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ],
};

/// Create a 4x4 matrix using the following order of the parameters:
///
/// * `t00`, `t01`, `t02`, `t03` - Row 1
/// * `t10`, `t11`, `t12`, `t13` - Row 2
/// * `t20`, `t21`, `t22`, `t23` - Row 3
/// * `t30`, `t31`, `t32`, `t33` - Row 4
#[rustfmt::skip]
#[allow(clippy::too_many_arguments)]
pub fn matrix4x4(
    t00: Float, t01: Float, t02: Float, t03: Float,
    t10: Float, t11: Float, t12: Float, t13: Float,
    t20: Float, t21: Float, t22: Float, t23: Float,
    t30: Float, t31: Float, t32: Float, t33: Float,
) -> Matrix4x4 {
    Matrix4x4 {
        m: [
            [t00, t01, t02, t03],
            [t10, t11, t12, t13],
            [t20, t21, t22, t23],
            [t30, t31, t32, t33],
        ],
    }
}

impl Matrix4x4 {
    /// Returns the transpose of the matrix.
    #[rustfmt::skip]
    pub fn transpose(&self) -> Matrix4x4 {
        matrix4x4(
            self.m[0][0], self.m[1][0], self.m[2][0], self.m[3][0],
            self.m[0][1], self.m[1][1], self.m[2][1], self.m[3][1],
            self.m[0][2], self.m[1][2], self.m[2][2], self.m[3][2],
            self.m[0][3], self.m[1][3], self.m[2][3], self.m[3][3],
        )
    }
}

impl Default for Matrix4x4 {
    /// Returns the default as identity matrix.
    fn default() -> Self {
        IDENTITY_MATRIX
    }
}

impl Mul for Matrix4x4 {
    type Output = Matrix4x4;

    /// Post-multiply the given matrix.
    ///
    /// * `m2` - The matrix to multiply with.
    fn mul(self, m2: Self) -> Self::Output {
        let mut r = [[0.0; 4]; 4];
        for (i, row) in r.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = self.m[i][0] * m2.m[0][j]
                    + self.m[i][1] * m2.m[1][j]
                    + self.m[i][2] * m2.m[2][j]
                    + self.m[i][3] * m2.m[3][j];
            }
        }
        Matrix4x4 { m: r }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
