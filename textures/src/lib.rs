//! Textures

#[macro_use]
extern crate log;

mod checkerboard;
mod constant;
mod uv;

// Re-export
pub use checkerboard::*;
pub use constant::*;
pub use uv::*;
