//! Transformations

use super::*;
use crate::common::*;
use std::ops::Mul;

/// A transformation for mapping from points to points and vectors to vectors.
/// The inverse is carried alongside so it never has to be computed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    /// The transformation matrix.
    pub m: Matrix4x4,

    /// The inverse transformation matrix.
    pub m_inv: Matrix4x4,
}

/// Create a transformation representing a translation.
///
/// * `delta` -  Translation.
#[rustfmt::skip]
pub fn translate(delta: &Vector3f) -> Transform {
    Transform {
        m: matrix4x4(
            1.0, 0.0, 0.0, delta.x,
            0.0, 1.0, 0.0, delta.y,
            0.0, 0.0, 1.0, delta.z,
            0.0, 0.0, 0.0, 1.0,
        ),
        m_inv: matrix4x4(
            1.0, 0.0, 0.0, -delta.x,
            0.0, 1.0, 0.0, -delta.y,
            0.0, 0.0, 1.0, -delta.z,
            0.0, 0.0, 0.0,  1.0,
        ),
    }
}

/// Create a transformation representing a scale. Factors must be non-zero.
///
/// * `x` -  Scaling factor in x-axis.
/// * `y` -  Scaling factor in y-axis.
/// * `z` -  Scaling factor in z-axis.
#[rustfmt::skip]
pub fn scale(x: Float, y: Float, z: Float) -> Transform {
    Transform {
        m: matrix4x4(
            x,   0.0, 0.0, 0.0,
            0.0, y,   0.0, 0.0,
            0.0, 0.0, z,   0.0,
            0.0, 0.0, 0.0, 1.0,
        ),
        m_inv: matrix4x4(
            1.0 / x, 0.0,     0.0,     0.0,
            0.0,     1.0 / y, 0.0,     0.0,
            0.0,     0.0,     1.0 / z, 0.0,
            0.0,     0.0,     0.0,     1.0,
        ),
    }
}

/// Create a transformation representing rotation about an axis.
///
/// * `theta` - Angle in degrees.
/// * `axis`  - Axis of rotation; it is normalized here.
pub fn rotate(theta: Float, axis: &Vector3f) -> Transform {
    let a = axis.normalize();
    let r = theta.to_radians();
    let sin_theta = r.sin();
    let cos_theta = r.cos();
    let mut m = Matrix4x4::default();

    // Compute rotation of first basis vector
    m.m[0][0] = a.x * a.x + (1.0 - a.x * a.x) * cos_theta;
    m.m[0][1] = a.x * a.y * (1.0 - cos_theta) - a.z * sin_theta;
    m.m[0][2] = a.x * a.z * (1.0 - cos_theta) + a.y * sin_theta;

    // Compute rotations of second and third basis vectors
    m.m[1][0] = a.x * a.y * (1.0 - cos_theta) + a.z * sin_theta;
    m.m[1][1] = a.y * a.y + (1.0 - a.y * a.y) * cos_theta;
    m.m[1][2] = a.y * a.z * (1.0 - cos_theta) - a.x * sin_theta;

    m.m[2][0] = a.x * a.z * (1.0 - cos_theta) - a.y * sin_theta;
    m.m[2][1] = a.y * a.z * (1.0 - cos_theta) + a.x * sin_theta;
    m.m[2][2] = a.z * a.z + (1.0 - a.z * a.z) * cos_theta;

    Transform {
        m,
        m_inv: m.transpose(),
    }
}

impl Transform {
    /// Returns the inverse transformation.
    pub fn inverse(&self) -> Transform {
        Transform {
            m: self.m_inv,
            m_inv: self.m,
        }
    }

    /// Returns true if this is the identity transformation.
    pub fn is_identity(&self) -> bool {
        self.m == IDENTITY_MATRIX
    }

    /// Applies transformation to a given point.
    ///
    /// * `p` - The point.
    pub fn transform_point(&self, p: &Vector3f) -> Vector3f {
        let m = &self.m.m;
        let xp = m[0][0] * p.x + m[0][1] * p.y + m[0][2] * p.z + m[0][3];
        let yp = m[1][0] * p.x + m[1][1] * p.y + m[1][2] * p.z + m[1][3];
        let zp = m[2][0] * p.x + m[2][1] * p.y + m[2][2] * p.z + m[2][3];
        let wp = m[3][0] * p.x + m[3][1] * p.y + m[3][2] * p.z + m[3][3];

        let p = Vector3f::new(xp, yp, zp);
        if wp == 1.0 {
            p
        } else {
            p / wp
        }
    }

    /// Applies transformation to a given vector. Translation is ignored.
    ///
    /// * `v` - The vector.
    pub fn transform_vector(&self, v: &Vector3f) -> Vector3f {
        let m = &self.m.m;
        Vector3f::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Applies transformation to a given normal using the transpose of the
    /// inverse matrix. The result is not normalized.
    ///
    /// * `n` - The normal.
    pub fn transform_normal(&self, n: &Vector3f) -> Vector3f {
        let m_inv = &self.m_inv.m;
        Vector3f::new(
            m_inv[0][0] * n.x + m_inv[1][0] * n.y + m_inv[2][0] * n.z,
            m_inv[0][1] * n.x + m_inv[1][1] * n.y + m_inv[2][1] * n.z,
            m_inv[0][2] * n.x + m_inv[1][2] * n.y + m_inv[2][2] * n.z,
        )
    }

    /// Applies transformation to a given ray.
    ///
    /// * `r` - The ray.
    pub fn transform_ray(&self, r: &Ray) -> Ray {
        Ray::new(self.transform_point(&r.o), self.transform_vector(&r.d))
    }
}

impl Mul<Transform> for Transform {
    type Output = Self;

    /// Composes this transformation with another one. The result applies
    /// `rhs` first and then `self`.
    ///
    /// * `rhs` - The transformation to compose.
    fn mul(self, rhs: Self) -> Self {
        Transform {
            m: self.m * rhs.m,
            m_inv: rhs.m_inv * self.m_inv,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
