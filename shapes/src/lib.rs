//! Shapes

mod plane;
mod sphere;

// Re-export
pub use plane::*;
pub use sphere::*;
