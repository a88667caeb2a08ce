//! Lights

mod point;

// Re-export
pub use point::*;
