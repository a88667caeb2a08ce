//! Integrator

use crate::error::*;
use crate::geometry::*;
use crate::rng::*;
use crate::spectrum::*;

/// Turns a primary ray into a colour. The adaptive sampler is generic over
/// this so it can be driven by something other than the full shader.
pub trait RayTracer {
    /// Returns the colour seen along a primary ray.
    ///
    /// * `ray` - The primary ray.
    /// * `rng` - Random number generator owned by the calling thread.
    fn trace(&self, ray: &Ray, rng: &mut RNG) -> Result<Spectrum>;
}
