#[macro_use]
extern crate log;

mod scenes;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use integrators::*;
use oxatrace_core::app::*;
use oxatrace_core::error::*;
use oxatrace_core::film::*;
use oxatrace_core::image_io::*;
use scenes::*;
use std::process;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Progress bar resolution.
const PROGRESS_STEPS: u64 = 1000;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = render(&options) {
        error!("{e}");
        process::exit(1);
    }
}

fn render(options: &Options) -> Result<()> {
    // Fail before rendering rather than after.
    if !is_supported_output(&options.image_file) {
        return Err(Error::Io(format!(
            "unsupported output format '{}'",
            options.image_file
        )));
    }

    let policy = options.shading_policy()?;
    let (scene, camera) = build_scene(
        options.scene,
        options.aspect_ratio()?,
        options.fov.to_radians(),
    )?;

    let film = Arc::new(SharedFilm::new(options.width, options.height));
    let mut pool = RenderPool::new(
        options.threads(),
        Arc::clone(&film) as ArcImageSink,
        Arc::new(scene),
        Arc::new(camera),
        policy,
    )?;

    let progress = if options.quiet {
        None
    } else {
        Some(create_progress_bar()?)
    };

    let start = Instant::now();
    pool.run()?;
    while !pool.done() {
        if let Some(pb) = &progress {
            pb.set_position((pool.percent_complete() * PROGRESS_STEPS as f64) as u64);
        }
        thread::sleep(Duration::from_millis(100));
    }
    pool.finish()?;

    if let Some(pb) = progress {
        pb.set_position(PROGRESS_STEPS);
        pb.finish_with_message("done");
    }
    info!("Rendered in {:.2?}", start.elapsed());

    write_image(&options.image_file, &film.to_image(), &options.tone_mapping())?;
    info!("Wrote {}", options.image_file);
    Ok(())
}

fn create_progress_bar() -> Result<ProgressBar> {
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {percent}% {msg}",
    )
    .map_err(|e| Error::InvalidArgument(format!("progress bar template: {e}")))?
    .progress_chars("#>-");

    let pb = ProgressBar::new(PROGRESS_STEPS);
    pb.set_style(style);
    pb.set_message("Rendering");
    Ok(pb)
}
