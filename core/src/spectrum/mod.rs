//! Spectrum

mod rgb_spectrum;

// Re-export
pub use rgb_spectrum::*;

/// Colours are carried as linear, unclamped RGB triples.
pub type Spectrum = RGBSpectrum;
