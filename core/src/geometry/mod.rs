//! Geometry

mod bounds2;
mod matrix4x4;
mod point2;
mod ray;
mod shape;
mod transform;
mod vector3;

// Re-export
pub use bounds2::*;
pub use matrix4x4::*;
pub use point2::*;
pub use ray::*;
pub use shape::*;
pub use transform::*;
pub use vector3::*;
