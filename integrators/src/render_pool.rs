//! Render Pool

use oxatrace_core::camera::*;
use oxatrace_core::common::*;
use oxatrace_core::error::*;
use oxatrace_core::film::*;
use oxatrace_core::geometry::*;
use oxatrace_core::rng::*;
use oxatrace_core::scene::*;
use oxatrace_core::shading::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::adaptive::*;

/// Number of consecutive pixels a worker claims at a time.
pub const JOB_SIZE: usize = 1024;

/// Everything the workers share. Only the job counter and the failure flag
/// change during a render.
struct RenderJob {
    sink: ArcImageSink,
    scene: ArcScene,
    camera: ArcCamera,
    policy: ShadingPolicy,
    width: usize,
    height: usize,
    next_job: AtomicUsize,
    failed: AtomicBool,
}

/// Raises the failure flag if the worker thread unwinds.
struct PanicFlag<'a>(&'a AtomicBool);

impl Drop for PanicFlag<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.store(true, Ordering::Release);
        }
    }
}

impl RenderJob {
    fn total_pixels(&self) -> usize {
        self.width * self.height
    }

    fn claimed_pixels(&self) -> usize {
        self.next_job.load(Ordering::Relaxed).saturating_mul(JOB_SIZE)
    }

    /// Renders jobs until none are left or any worker fails.
    fn work(&self) -> Result<()> {
        let _flag = PanicFlag(&self.failed);
        let result = self.render_jobs();
        if result.is_err() {
            self.failed.store(true, Ordering::Release);
        }
        result
    }

    fn render_jobs(&self) -> Result<()> {
        let mut hasher = DefaultHasher::new();
        thread::current().id().hash(&mut hasher);
        let mut rng = RNG::new(hasher.finish());

        let total = self.total_pixels();
        let (w, h) = (self.width as Float, self.height as Float);

        loop {
            if self.failed.load(Ordering::Acquire) {
                debug!("Stopping after another worker failed");
                return Ok(());
            }
            let ordinal = self.next_job.fetch_add(1, Ordering::Relaxed);
            let start = ordinal.saturating_mul(JOB_SIZE);
            if start >= total {
                return Ok(());
            }
            let end = min(start + JOB_SIZE, total);
            debug!("Job {ordinal}: pixels {start}..{end}");

            for i in start..end {
                let (x, y) = (i % self.width, i / self.width);
                let pixel = Bounds2f::new(
                    Point2f::new(x as Float / w, y as Float / h),
                    Point2f::new((x + 1) as Float / w, (y + 1) as Float / h),
                );
                let c = sample(
                    self.scene.as_ref(),
                    self.camera.as_ref(),
                    &pixel,
                    &self.policy,
                    &mut rng,
                )?;
                self.sink.put(x, y, c)?;
            }
        }
    }
}

/// A fixed pool of OS threads rendering an image. Workers claim pixel ranges
/// of `JOB_SIZE` from a shared atomic counter and write straight into the
/// image sink; ranges never overlap so writes need no locking.
pub struct RenderPool {
    /// Number of worker threads.
    thread_count: usize,

    /// State shared with the workers.
    job: Arc<RenderJob>,

    /// Running workers; empty before `run()` and after `finish()`.
    workers: Vec<JoinHandle<Result<()>>>,

    /// Whether `run()` was called.
    started: bool,
}

impl RenderPool {
    /// Create a new `RenderPool`. No threads are started until `run()`.
    ///
    /// * `thread_count` - Number of worker threads; at least 1.
    /// * `sink`         - Destination for rendered pixels.
    /// * `scene`        - The scene.
    /// * `camera`       - The camera.
    /// * `policy`       - Shading policy.
    pub fn new(
        thread_count: usize,
        sink: ArcImageSink,
        scene: ArcScene,
        camera: ArcCamera,
        policy: ShadingPolicy,
    ) -> Result<Self> {
        if thread_count == 0 {
            return Err(Error::OutOfRange(
                "render pool needs at least one thread".to_string(),
            ));
        }

        let (width, height) = sink.dimensions();
        Ok(Self {
            thread_count,
            job: Arc::new(RenderJob {
                sink,
                scene,
                camera,
                policy,
                width,
                height,
                next_job: AtomicUsize::new(0),
                failed: AtomicBool::new(false),
            }),
            workers: Vec::with_capacity(thread_count),
            started: false,
        })
    }

    /// Starts the worker threads. Calling it again has no effect.
    pub fn run(&mut self) -> Result<()> {
        if self.started {
            warn!("Render pool already running");
            return Ok(());
        }
        self.started = true;

        info!(
            "Rendering {}x{} image on {} threads",
            self.job.width, self.job.height, self.thread_count
        );

        for i in 0..self.thread_count {
            let job = Arc::clone(&self.job);
            let handle = thread::Builder::new()
                .name(format!("render-{i}"))
                .spawn(move || {
                    let result = job.work();
                    if let Err(e) = &result {
                        error!("Render worker failed: {e}");
                    }
                    result
                })?;
            self.workers.push(handle);
        }
        Ok(())
    }

    /// Waits for all workers. Returns the first error a worker reported.
    /// Calling it again returns `Ok(())`.
    pub fn finish(&mut self) -> Result<()> {
        let mut first_error = None;
        let joining = !self.workers.is_empty();

        for handle in self.workers.drain(..) {
            let result = match handle.join() {
                Ok(result) => result,
                Err(panic) => {
                    let msg = panic
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| panic.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    Err(Error::WorkerPanicked(msg))
                }
            };
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                if joining {
                    info!("Render finished");
                }
                Ok(())
            }
        }
    }

    /// Returns the fraction of pixels claimed by workers. Jobs in progress
    /// count as done.
    pub fn percent_complete(&self) -> Float {
        let total = self.job.total_pixels();
        if total == 0 {
            return 1.0;
        }
        min(1.0, self.job.claimed_pixels() as Float / total as Float)
    }

    /// Returns true once every job has been claimed or a worker has failed.
    /// Jobs may still be running; use `finish()` to wait for them.
    pub fn done(&self) -> bool {
        self.failed() || self.job.claimed_pixels() >= self.job.total_pixels()
    }

    /// Returns true if a worker returned an error or panicked.
    pub fn failed(&self) -> bool {
        self.job.failed.load(Ordering::Acquire)
    }
}

impl Drop for RenderPool {
    fn drop(&mut self) {
        if let Err(e) = self.finish() {
            error!("Render pool: {e}");
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
