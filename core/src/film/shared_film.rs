//! Shared Film

use super::*;
use crate::parallel::*;
use std::sync::atomic::Ordering;

/// Film written concurrently by render threads. Each channel is an
/// `AtomicFloat`, so writes need no lock; the render pool's disjoint job
/// ranges guarantee that no pixel is written twice.
pub struct SharedFilm {
    width: usize,
    height: usize,
    pixels: Vec<[AtomicFloat; 3]>,
}

impl SharedFilm {
    /// Create a black film.
    ///
    /// * `width`  - Width in pixels.
    /// * `height` - Height in pixels.
    pub fn new(width: usize, height: usize) -> Self {
        let pixels = (0..width * height)
            .map(|_| [AtomicFloat::default(), AtomicFloat::default(), AtomicFloat::default()])
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Copies the film into an `HdrImage`. Call after rendering has finished.
    pub fn to_image(&self) -> HdrImage {
        let mut img = HdrImage::new(self.width, self.height);
        for (dst, p) in img.pixels_mut().iter_mut().zip(self.pixels.iter()) {
            *dst = Spectrum::new(
                p[0].load(Ordering::Acquire),
                p[1].load(Ordering::Acquire),
                p[2].load(Ordering::Acquire),
            );
        }
        img
    }
}

impl ImageSink for SharedFilm {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn put(&self, x: usize, y: usize, c: Spectrum) -> Result<()> {
        check_pixel(x, y, self.width, self.height)?;
        let p = &self.pixels[y * self.width + x];
        for (i, channel) in p.iter().enumerate() {
            channel.store(c[i], Ordering::Release);
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn disjoint_concurrent_writes() {
        let film = Arc::new(SharedFilm::new(8, 8));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let film = Arc::clone(&film);
                thread::spawn(move || {
                    for i in (t * 16)..((t + 1) * 16) {
                        let v = i as f64;
                        film.put(i % 8, i / 8, Spectrum::new(v, v, v)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let img = film.to_image();
        for i in 0..64 {
            let v = i as f64;
            assert_eq!(img.pixels()[i], Spectrum::new(v, v, v));
        }
    }

    #[test]
    fn out_of_bounds_put() {
        let film = SharedFilm::new(2, 2);
        assert_eq!(film.dimensions(), (2, 2));
        assert!(matches!(
            film.put(2, 0, Spectrum::white()),
            Err(Error::OutOfRange(_))
        ));
    }
}
