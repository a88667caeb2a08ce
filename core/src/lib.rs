//! Core

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod app;
pub mod camera;
pub mod common;
pub mod error;
pub mod film;
pub mod geometry;
pub mod image_io;
pub mod integrator;
pub mod light;
pub mod material;
pub mod parallel;
pub mod rng;
pub mod scene;
pub mod shading;
pub mod solid;
pub mod spectrum;
pub mod texture;
pub mod tonemap;
