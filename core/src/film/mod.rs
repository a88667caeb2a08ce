//! Film

mod hdr_image;
mod shared_film;

// Re-export.
pub use hdr_image::*;
pub use shared_film::*;

use crate::error::*;
use crate::spectrum::*;
use std::sync::Arc;

/// Destination for rendered pixels. Render threads write through a shared
/// reference; implementations must tolerate concurrent writes to distinct
/// pixels.
pub trait ImageSink {
    /// Returns the image width and height in pixels.
    fn dimensions(&self) -> (usize, usize);

    /// Stores the colour of a pixel.
    ///
    /// * `x` - Column.
    /// * `y` - Row.
    /// * `c` - The colour.
    fn put(&self, x: usize, y: usize, c: Spectrum) -> Result<()>;
}

/// Atomic reference counted `ImageSink`.
pub type ArcImageSink = Arc<dyn ImageSink + Send + Sync>;

/// Returns an `OutOfRange` error unless `(x, y)` lies inside a `width` x
/// `height` image.
///
/// * `x`      - Column.
/// * `y`      - Row.
/// * `width`  - Image width.
/// * `height` - Image height.
pub(crate) fn check_pixel(x: usize, y: usize, width: usize, height: usize) -> Result<()> {
    if x < width && y < height {
        Ok(())
    } else {
        Err(Error::OutOfRange(format!(
            "pixel ({x}, {y}) outside {width}x{height} image"
        )))
    }
}
