//! Integrators

#[macro_use]
extern crate log;

mod adaptive;
mod render_pool;
mod whitted;

// Re-export.
pub use adaptive::*;
pub use render_pool::*;
pub use whitted::*;
