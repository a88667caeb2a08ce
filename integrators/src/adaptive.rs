//! Adaptive Sampler

use itertools::iproduct;
use oxatrace_core::camera::*;
use oxatrace_core::common::*;
use oxatrace_core::error::*;
use oxatrace_core::geometry::*;
use oxatrace_core::integrator::*;
use oxatrace_core::rng::*;
use oxatrace_core::scene::*;
use oxatrace_core::shading::*;
use oxatrace_core::spectrum::*;

use crate::whitted::*;

/// A sample stored in a supersampling grid. A weight of 0 marks a cell that
/// holds no sample.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sample {
    /// Colour traced through the sample point.
    pub value: Spectrum,

    /// Number of grid cells the sample stands for.
    pub weight: u32,
}

/// An `S x S` grid of samples covering one pixel.
#[derive(Clone, Debug)]
pub struct SampleGrid {
    /// Samples in row-major order.
    samples: Vec<Sample>,

    /// The pixel in film coordinates.
    region: Bounds2f,

    /// Number of cells along each side.
    side: u32,
}

impl SampleGrid {
    /// Create an empty `SampleGrid`.
    ///
    /// * `region` - The pixel in film coordinates.
    /// * `side`   - Number of cells along each side; a power of 2.
    pub fn new(region: Bounds2f, side: u32) -> Self {
        debug_assert!(is_power_of_2(side));
        Self {
            samples: vec![Sample::default(); (side * side) as usize],
            region,
            side,
        }
    }

    /// Returns the pixel in film coordinates.
    pub fn region(&self) -> Bounds2f {
        self.region
    }

    /// Returns the number of cells along each side.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Returns the samples in row-major order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the sample in cell `(x, y)`.
    ///
    /// * `x` - Column.
    /// * `y` - Row.
    pub fn at(&self, x: u32, y: u32) -> &Sample {
        &self.samples[(y * self.side + x) as usize]
    }

    fn at_mut(&mut self, x: u32, y: u32) -> &mut Sample {
        &mut self.samples[(y * self.side + x) as usize]
    }

    /// Returns the sum of all sample weights.
    pub fn total_weight(&self) -> u32 {
        self.samples.iter().map(|s| s.weight).sum()
    }

    /// Returns the weighted average of all samples.
    pub fn average(&self) -> Spectrum {
        let sum = self
            .samples
            .iter()
            .fold(Spectrum::black(), |acc, s| acc + s.value * s.weight as Float);
        sum / (self.side * self.side) as Float
    }

    /// Stores a sample in the cell containing `point`. The cell is clamped
    /// into `view` so rounding at the view's edges never escapes it.
    ///
    /// * `point`  - Film coordinates of the sample.
    /// * `sample` - The sample.
    /// * `view`   - The part of the grid the sample belongs to.
    fn add(&mut self, point: &Point2f, sample: Sample, view: &SubpixelView) {
        let bucket = |offset: Float, extent: Float, low: u32| {
            let cell = (offset * self.side as Float / extent).floor() as i64;
            clamp(cell, low as i64, (low + view.side - 1) as i64) as u32
        };
        let x = bucket(point.x - self.region.p_min.x, self.region.width(), view.offset_x);
        let y = bucket(point.y - self.region.p_min.y, self.region.height(), view.offset_y);

        let cell = self.at_mut(x, y);
        debug_assert_eq!(cell.weight, 0);
        *cell = sample;
    }
}

/// Quadrants of a subpixel view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All quadrants in the order they are sampled.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

/// A square, power of 2 sized part of a `SampleGrid`. It only holds indices
/// into the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SubpixelView {
    /// Column of the top-left cell.
    pub offset_x: u32,

    /// Row of the top-left cell.
    pub offset_y: u32,

    /// Number of cells along each side.
    pub side: u32,
}

impl SubpixelView {
    /// Returns a view covering the whole grid.
    ///
    /// * `grid` - The grid.
    pub fn whole(grid: &SampleGrid) -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            side: grid.side,
        }
    }

    /// Returns the view of a quadrant. The view must be larger than a single
    /// cell.
    ///
    /// * `corner` - The quadrant.
    pub fn quadrant(&self, corner: Corner) -> Self {
        debug_assert!(self.side > 1);
        let s = self.side / 2;
        let (dx, dy) = match corner {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (s, 0),
            Corner::BottomLeft => (0, s),
            Corner::BottomRight => (s, s),
        };
        Self {
            offset_x: self.offset_x + dx,
            offset_y: self.offset_y + dy,
            side: s,
        }
    }

    /// Returns the film area covered by the view.
    ///
    /// * `grid` - The grid the view refers to.
    pub fn region(&self, grid: &SampleGrid) -> Bounds2f {
        let w = grid.region.width() / grid.side as Float;
        let h = grid.region.height() / grid.side as Float;
        let p_min = Point2f::new(
            grid.region.p_min.x + self.offset_x as Float * w,
            grid.region.p_min.y + self.offset_y as Float * h,
        );
        let p_max = Point2f::new(
            p_min.x + self.side as Float * w,
            p_min.y + self.side as Float * h,
        );
        Bounds2f { p_min, p_max }
    }

    /// Returns the first cell in the view holding a sample.
    ///
    /// * `grid` - The grid the view refers to.
    pub fn find_sample(&self, grid: &SampleGrid) -> Option<(u32, u32)> {
        iproduct!(
            self.offset_x..self.offset_x + self.side,
            self.offset_y..self.offset_y + self.side
        )
        .find(|&(x, y)| grid.at(x, y).weight > 0)
    }

    /// Returns the sum of sample weights inside the view.
    ///
    /// * `grid` - The grid the view refers to.
    pub fn total_weight(&self, grid: &SampleGrid) -> u32 {
        iproduct!(
            self.offset_x..self.offset_x + self.side,
            self.offset_y..self.offset_y + self.side
        )
        .map(|(x, y)| grid.at(x, y).weight)
        .sum()
    }
}

/// Returns the colour of a pixel with `WhittedShader`.
///
/// * `scene`  - The scene.
/// * `camera` - The camera.
/// * `pixel`  - The pixel in film coordinates.
/// * `policy` - Shading policy.
/// * `rng`    - Random number generator owned by the calling thread.
pub fn sample(
    scene: &dyn Scene,
    camera: &dyn Camera,
    pixel: &Bounds2f,
    policy: &ShadingPolicy,
    rng: &mut RNG,
) -> Result<Spectrum> {
    let shader = WhittedShader::new(scene, policy);
    sample_with(&shader, camera, pixel, policy, rng)
}

/// Returns the colour of a pixel, tracing rays with the given tracer.
///
/// * `tracer` - Turns primary rays into colours.
/// * `camera` - The camera.
/// * `pixel`  - The pixel in film coordinates.
/// * `policy` - Shading policy.
/// * `rng`    - Random number generator owned by the calling thread.
pub fn sample_with<T: RayTracer + ?Sized>(
    tracer: &T,
    camera: &dyn Camera,
    pixel: &Bounds2f,
    policy: &ShadingPolicy,
    rng: &mut RNG,
) -> Result<Spectrum> {
    Ok(sample_grid_with(tracer, camera, pixel, policy, rng)?.average())
}

/// Fills a grid of `policy.supersampling()` cells per side for a pixel. Rays
/// are cast through the four quadrants of a region; the region is refined
/// only where their colours differ by more than the variance threshold.
/// Samples already in a quadrant are reused.
///
/// * `tracer` - Turns primary rays into colours.
/// * `camera` - The camera.
/// * `pixel`  - The pixel in film coordinates.
/// * `policy` - Shading policy.
/// * `rng`    - Random number generator owned by the calling thread.
pub fn sample_grid_with<T: RayTracer + ?Sized>(
    tracer: &T,
    camera: &dyn Camera,
    pixel: &Bounds2f,
    policy: &ShadingPolicy,
    rng: &mut RNG,
) -> Result<SampleGrid> {
    let mut grid = SampleGrid::new(*pixel, policy.supersampling());
    let mut sampler = Subsampler {
        tracer,
        camera,
        policy,
        rng,
    };
    let whole = SubpixelView::whole(&grid);
    sampler.subpixel_sample(&mut grid, whole)?;
    debug_assert_eq!(grid.total_weight(), grid.side * grid.side);
    Ok(grid)
}

/// State shared by the recursive steps of one pixel evaluation.
struct Subsampler<'a, T: RayTracer + ?Sized> {
    tracer: &'a T,
    camera: &'a dyn Camera,
    policy: &'a ShadingPolicy,
    rng: &'a mut RNG,
}

impl<'a, T: RayTracer + ?Sized> Subsampler<'a, T> {
    fn subpixel_sample(&mut self, grid: &mut SampleGrid, view: SubpixelView) -> Result<()> {
        let weight = view.side * view.side;

        if view.side == 1 {
            match view.find_sample(grid) {
                Some((x, y)) => grid.at_mut(x, y).weight = weight,
                None => {
                    self.sample_one(grid, &view, weight)?;
                }
            }
            return Ok(());
        }

        let quarter = weight / 4;
        let mut lo = Spectrum::splat(INFINITY);
        let mut hi = Spectrum::splat(-INFINITY);

        for corner in Corner::ALL {
            let quadrant = view.quadrant(corner);
            let value = match quadrant.find_sample(grid) {
                Some((x, y)) => {
                    let s = grid.at_mut(x, y);
                    s.weight = quarter;
                    s.value
                }
                None => self.sample_one(grid, &quadrant, quarter)?,
            };
            lo = lo.min(&value);
            hi = hi.max(&value);
        }

        if lo.distance(&hi) > self.policy.variance_threshold() {
            for corner in Corner::ALL {
                self.subpixel_sample(grid, view.quadrant(corner))?;
            }
        }
        Ok(())
    }

    /// Casts one ray through the centre of the view, jittered when enabled,
    /// and stores the result with the given weight.
    fn sample_one(&mut self, grid: &mut SampleGrid, view: &SubpixelView, weight: u32) -> Result<Spectrum> {
        let (jx, jy) = if self.policy.jitter() {
            (
                self.rng.uniform_range(-0.25, 0.25),
                self.rng.uniform_range(-0.25, 0.25),
            )
        } else {
            (0.0, 0.0)
        };
        let point = view.region(grid).lerp(&Point2f::new(0.5 + jx, 0.5 + jy));

        let ray = self.camera.make_ray(point.x, point.y)?;
        let value = self.tracer.trace(&ray, self.rng)?;
        grid.add(&point, Sample { value, weight }, view);
        Ok(value)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use cameras::*;
    use float_cmp::approx_eq;
    use proptest::prelude::*;
    use std::cell::{Cell, RefCell};

    /// Rays start on the film point they were made for.
    struct FilmCamera;

    impl Camera for FilmCamera {
        fn make_ray(&self, u: Float, v: Float) -> Result<Ray> {
            check_film_coordinates(u, v)?;
            Ok(Ray::new(Vector3f::new(u, v, 0.0), Vector3f::new(0.0, 0.0, 1.0)))
        }
    }

    /// White left of `edge`, black right of it. Counts and records casts.
    struct Edge {
        edge: Float,
        casts: Cell<usize>,
        points: RefCell<Vec<Point2f>>,
    }

    impl Edge {
        fn new(edge: Float) -> Self {
            Self {
                edge,
                casts: Cell::new(0),
                points: RefCell::new(vec![]),
            }
        }
    }

    impl RayTracer for Edge {
        fn trace(&self, ray: &Ray, _rng: &mut RNG) -> Result<Spectrum> {
            self.casts.set(self.casts.get() + 1);
            self.points.borrow_mut().push(Point2f::new(ray.o.x, ray.o.y));
            Ok(if ray.o.x < self.edge {
                Spectrum::white()
            } else {
                Spectrum::black()
            })
        }
    }

    /// Alternates between white and black so every region looks noisy.
    struct Flicker {
        casts: Cell<usize>,
    }

    impl RayTracer for Flicker {
        fn trace(&self, _ray: &Ray, _rng: &mut RNG) -> Result<Spectrum> {
            let n = self.casts.get();
            self.casts.set(n + 1);
            Ok(if n % 2 == 0 {
                Spectrum::white()
            } else {
                Spectrum::black()
            })
        }
    }

    fn policy(supersampling: u32, jitter: bool) -> ShadingPolicy {
        ShadingPolicy::new(Spectrum::black(), 4, DEFAULT_MIN_IMPORTANCE, jitter, supersampling).unwrap()
    }

    fn pixel(x: Float, y: Float, w: Float, h: Float) -> Bounds2f {
        Bounds2f::new(Point2f::new(x, y), Point2f::new(x + w, y + h))
    }

    #[test]
    fn single_sample_without_supersampling() {
        let tracer = Edge::new(2.0);
        let px = pixel(0.25, 0.5, 0.125, 0.125);
        let grid = sample_grid_with(&tracer, &FilmCamera, &px, &policy(1, false), &mut RNG::new(1)).unwrap();
        assert_eq!(tracer.casts.get(), 1);
        assert_eq!(grid.total_weight(), 1);
        assert_eq!(tracer.points.borrow()[0], Point2f::new(0.3125, 0.5625));
    }

    #[test]
    fn uniform_colour_needs_four_rays() {
        let tracer = Edge::new(2.0);
        let px = pixel(0.0, 0.0, 0.5, 0.5);
        let grid = sample_grid_with(&tracer, &FilmCamera, &px, &policy(8, true), &mut RNG::new(2)).unwrap();
        assert_eq!(tracer.casts.get(), 4);
        assert_eq!(grid.total_weight(), 64);
        assert!(grid.samples().iter().filter(|s| s.weight > 0).all(|s| s.weight == 16));

        let c = grid.average();
        for i in 0..3 {
            assert!(approx_eq!(f64, c[i], 1.0, epsilon = 1e-12));
        }
    }

    #[test]
    fn noisy_pixel_is_fully_refined() {
        let tracer = Flicker {
            casts: Cell::new(0),
        };
        let px = pixel(0.0, 0.0, 0.5, 0.5);
        let grid = sample_grid_with(&tracer, &FilmCamera, &px, &policy(8, false), &mut RNG::new(3)).unwrap();
        assert_eq!(tracer.casts.get(), 64);
        assert!(grid.samples().iter().all(|s| s.weight == 1));
    }

    #[test]
    fn refinement_stops_where_quadrants_agree() {
        // The top level straddles x = 0.2 and is refined once; each of the
        // four halves is uniform at the next level.
        let tracer = Edge::new(0.2);
        let px = pixel(0.0, 0.0, 0.5, 0.5);
        let grid = sample_grid_with(&tracer, &FilmCamera, &px, &policy(8, false), &mut RNG::new(4)).unwrap();
        assert_eq!(grid.total_weight(), 64);
        assert_eq!(tracer.casts.get(), 16);
        assert!(grid.samples().iter().filter(|s| s.weight > 0).all(|s| s.weight == 4));
    }

    #[test]
    fn jittered_samples_land_in_their_quadrant() {
        let tracer = Flicker {
            casts: Cell::new(0),
        };
        let px = pixel(0.5, 0.25, 0.25, 0.25);
        let grid = sample_grid_with(&tracer, &FilmCamera, &px, &policy(2, true), &mut RNG::new(5)).unwrap();
        let view = SubpixelView::whole(&grid);
        for corner in Corner::ALL {
            assert_eq!(view.quadrant(corner).total_weight(&grid), 1);
        }
    }

    #[test]
    fn quadrants_tile_the_view() {
        let grid = SampleGrid::new(pixel(0.0, 0.0, 1.0, 1.0), 8);
        let view = SubpixelView::whole(&grid);
        assert_eq!(
            view.quadrant(Corner::BottomRight).quadrant(Corner::TopRight),
            SubpixelView {
                offset_x: 6,
                offset_y: 4,
                side: 2
            }
        );
        let r = view.quadrant(Corner::BottomLeft).region(&grid);
        assert_eq!(r, pixel(0.0, 0.5, 0.5, 0.5));
    }

    #[test]
    fn camera_errors_propagate() {
        let camera = PinholeCamera::new(1.0, PI / 3.0).unwrap();
        let scene = SimpleScene::new(SceneDefinition::new());
        let px = pixel(1.0, 0.0, 0.5, 0.5);
        let r = sample(&scene, &camera, &px, &policy(2, false), &mut RNG::new(6));
        assert!(matches!(r, Err(Error::OutOfRange(_))));
    }

    #[test]
    fn empty_scene_averages_to_background() {
        let camera = PinholeCamera::new(4.0 / 3.0, PI / 3.0).unwrap();
        let scene = SimpleScene::new(SceneDefinition::new());
        let mut p = policy(4, true);
        p.set_background(Spectrum::new(0.2, 0.4, 0.6));
        let c = sample(&scene, &camera, &pixel(0.5, 0.5, 0.01, 0.01), &p, &mut RNG::new(7)).unwrap();
        assert!(approx_eq!(f64, c.r(), 0.2, epsilon = 1e-12));
        assert!(approx_eq!(f64, c.g(), 0.4, epsilon = 1e-12));
        assert!(approx_eq!(f64, c.b(), 0.6, epsilon = 1e-12));
    }

    proptest! {
        #[test]
        fn weights_sum_to_grid_size(
            exponent in 0u32..4,
            x in 0.0..0.5f64,
            y in 0.0..0.5f64,
            w in 0.001..0.5f64,
            h in 0.001..0.5f64,
            edge in 0.0..1.0f64,
            jitter in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let s = 1 << exponent;
            let tracer = Edge::new(edge);
            let px = pixel(x, y, w, h);
            let grid = sample_grid_with(&tracer, &FilmCamera, &px, &policy(s, jitter), &mut RNG::new(seed)).unwrap();

            prop_assert_eq!(grid.total_weight(), s * s);
            prop_assert!(tracer.casts.get() <= (s * s) as usize);

            let filled = grid.samples().iter().filter(|sample| sample.weight > 0).count();
            prop_assert_eq!(filled, tracer.casts.get());

            for p in tracer.points.borrow().iter() {
                prop_assert!(p.x >= px.p_min.x && p.x < px.p_max.x);
                prop_assert!(p.y >= px.p_min.y && p.y < px.p_max.y);
            }
        }
    }
}
