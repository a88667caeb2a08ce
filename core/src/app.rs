//! Application related stuff

use crate::common::*;
use crate::error::*;
use crate::shading::*;
use crate::spectrum::*;
use crate::tonemap::*;
use clap::{Parser, ValueEnum};

/// Built-in demo scenes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenePreset {
    /// Three spheres on a checkerboard floor under two lights.
    Spheres,

    /// A mirror sphere between two textured planes.
    Mirrors,

    /// A single sphere lit by a single light.
    Single,
}

/// System wide options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about = "Offline ray tracer", long_about = None)]
pub struct Options {
    /// Number of threads to use for rendering.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        help = "Use specified number of threads for rendering (default: all logical CPUs)."
    )]
    n_threads: Option<usize>,

    /// Suppress all text output other than error messages.
    #[arg(long, short = 'q', help = "Suppress the progress bar.")]
    pub quiet: bool,

    /// Path to the image file.
    #[arg(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        help = "Write the final image to the given filename (.png, .tga, .ppm, .exr, .pfm)."
    )]
    pub image_file: String,

    /// Image width.
    #[arg(long, short = 'W', value_name = "PIXELS", default_value_t = 800)]
    pub width: usize,

    /// Image height.
    #[arg(long, short = 'H', value_name = "PIXELS", default_value_t = 600)]
    pub height: usize,

    /// Scene to render.
    #[arg(long, value_enum, default_value_t = ScenePreset::Spheres)]
    pub scene: ScenePreset,

    /// Horizontal field of view.
    #[arg(long, value_name = "DEGREES", default_value_t = 60.0)]
    pub fov: Float,

    /// Supersampling grid size.
    #[arg(
        long,
        short = 's',
        value_name = "NUM",
        default_value_t = DEFAULT_SUPERSAMPLING,
        help = "Maximum samples per pixel along each axis; a power of 2."
    )]
    pub supersampling: u32,

    /// Maximum reflection depth.
    #[arg(long, short = 'd', value_name = "NUM", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Importance floor.
    #[arg(
        long,
        value_name = "FLOAT",
        default_value_t = DEFAULT_MIN_IMPORTANCE,
        help = "Stop tracing reflected rays whose importance drops below this value."
    )]
    pub min_importance: Float,

    /// Disable jittering.
    #[arg(long, help = "Sample at cell centres instead of jittered positions.")]
    pub no_jitter: bool,

    /// Enable glossy reflection.
    #[arg(long, help = "Perturb reflections around the mirror direction.")]
    pub glossy: bool,

    /// Adaptive sampling threshold.
    #[arg(
        long,
        value_name = "FLOAT",
        default_value_t = DEFAULT_VARIANCE_THRESHOLD,
        help = "Colour distance above which a pixel region is refined."
    )]
    pub variance_threshold: Float,

    /// Background colour.
    #[arg(
        long,
        value_name = "FLOAT",
        num_args = 3,
        default_values_t = [0.0, 0.0, 0.0],
        help = "Background colour (r g b)."
    )]
    pub background: Vec<Float>,

    /// Exposure.
    #[arg(long, value_name = "FLOAT", help = "Apply exposure before writing 8-bit images.")]
    pub exposure: Option<Float>,

    /// Reinhard key.
    #[arg(
        long,
        value_name = "FLOAT",
        help = "Apply Reinhard's operator with this key before writing 8-bit images."
    )]
    pub reinhard_key: Option<Float>,

    /// Display gamma.
    #[arg(long, value_name = "FLOAT", default_value_t = DEFAULT_GAMMA)]
    pub gamma: Float,
}

impl Options {
    /// Returns the number of threads to use. Zero is passed through for the
    /// render pool to reject.
    pub fn threads(&self) -> usize {
        let max_threads = num_cpus::get();
        match self.n_threads {
            None => max_threads,
            Some(n) if n > max_threads => {
                warn!("Num threads > max logical CPUs {}", max_threads);
                max_threads
            }
            Some(n) => n,
        }
    }

    /// Returns the image aspect ratio.
    pub fn aspect_ratio(&self) -> Result<Float> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::OutOfRange(format!(
                "image resolution {}x{} is empty",
                self.width, self.height
            )));
        }
        Ok(self.width as Float / self.height as Float)
    }

    /// Returns the shading policy described by the options.
    pub fn shading_policy(&self) -> Result<ShadingPolicy> {
        let background = match self.background.as_slice() {
            [r, g, b] => Spectrum::new(*r, *g, *b),
            _ => {
                return Err(Error::InvalidArgument(
                    "background needs 3 values".to_string(),
                ))
            }
        };

        let mut policy = ShadingPolicy::new(
            background,
            self.max_depth,
            self.min_importance,
            !self.no_jitter,
            self.supersampling,
        )?;
        policy.set_variance_threshold(self.variance_threshold)?;
        policy.set_glossy(self.glossy);
        Ok(policy)
    }

    /// Returns the tone mapping for 8-bit output.
    pub fn tone_mapping(&self) -> ToneMapping {
        ToneMapping {
            exposure: self.exposure,
            reinhard_key: self.reinhard_key,
            gamma: self.gamma,
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::try_parse_from(["oxatrace", "-o", "out.png"]).unwrap();
        assert_eq!(opts.image_file, "out.png");
        assert_eq!(opts.scene, ScenePreset::Spheres);
        assert_eq!(opts.threads(), num_cpus::get());
        assert_eq!(opts.shading_policy().unwrap(), ShadingPolicy::default());
        assert_eq!(opts.tone_mapping(), ToneMapping::default());
        assert_eq!(opts.aspect_ratio().unwrap(), 800.0 / 600.0);
    }

    #[test]
    fn outfile_is_required() {
        assert!(Options::try_parse_from(["oxatrace"]).is_err());
    }

    #[test]
    fn policy_options() {
        let opts = Options::try_parse_from([
            "oxatrace",
            "-o",
            "out.exr",
            "-s",
            "4",
            "-d",
            "3",
            "--no-jitter",
            "--glossy",
            "--background",
            "0.1",
            "0.2",
            "0.3",
            "--scene",
            "mirrors",
            "-t",
            "0",
        ])
        .unwrap();
        let policy = opts.shading_policy().unwrap();
        assert_eq!(policy.supersampling(), 4);
        assert_eq!(policy.max_depth(), 3);
        assert!(!policy.jitter());
        assert!(policy.glossy());
        assert_eq!(policy.background(), Spectrum::new(0.1, 0.2, 0.3));
        assert_eq!(opts.scene, ScenePreset::Mirrors);
        assert_eq!(opts.threads(), 0);
    }

    #[test]
    fn thread_count_above_cpus_is_clamped_but_zero_is_kept() {
        let opts = Options::try_parse_from(["oxatrace", "-o", "out.png", "-t", "0"]).unwrap();
        assert_eq!(opts.threads(), 0);

        let n = (num_cpus::get() + 1).to_string();
        let opts = Options::try_parse_from(["oxatrace", "-o", "out.png", "-t", n.as_str()]).unwrap();
        assert_eq!(opts.threads(), num_cpus::get());
    }

    #[test]
    fn invalid_supersampling_is_reported() {
        let opts = Options::try_parse_from(["oxatrace", "-o", "x.png", "-s", "3"]).unwrap();
        assert!(matches!(opts.shading_policy(), Err(Error::OutOfRange(_))));
    }
}
