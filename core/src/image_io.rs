//! Image I/O

use crate::error::*;
use crate::film::*;
use crate::tonemap::*;
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use exr::prelude::{
    Encoding, Image, ImageAttributes, IntegerBounds, Layer, LayerAttributes, SpecificChannels, Vec2,
    WritableImage,
};
use image::{ImageBuffer, ImageFormat, Rgb};
use regex::Regex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::OnceLock;

/// Write a rendered image. The format is chosen from the file extension:
/// `.exr` and `.pfm` store the raw HDR values, `.png`, `.tga` and `.ppm` store
/// the tone mapped 8-bit image.
///
/// * `path`        - Output file path.
/// * `image`       - The rendered image.
/// * `tone_mapping` - Operators used for 8-bit formats.
pub fn write_image(path: &str, image: &HdrImage, tone_mapping: &ToneMapping) -> Result<()> {
    match get_extension_from_filename(path) {
        Some(".exr") => write_exr(path, image),
        Some(".pfm") => write_pfm(path, image),
        Some(".png") => write_8_bit(path, &tone_mapping.apply(image.clone())?, ImageFormat::Png),
        Some(".tga") => write_8_bit(path, &tone_mapping.apply(image.clone())?, ImageFormat::Tga),
        Some(".ppm") => write_8_bit(path, &tone_mapping.apply(image.clone())?, ImageFormat::Pnm),
        Some(extension) => Err(Error::Io(format!("Extension {extension} is not supported"))),
        None => Err(Error::Io(format!(
            "Can't determine file type from suffix of filename {path}"
        ))),
    }
}

/// Returns true if the file extension names a supported output format.
///
/// * `path` - The file path.
pub fn is_supported_output(path: &str) -> bool {
    matches!(
        get_extension_from_filename(path),
        Some(".exr" | ".pfm" | ".png" | ".tga" | ".ppm")
    )
}

/// Returns the regular expression that captures a file extension.
fn regex_file_ext() -> &'static Regex {
    static DATA: OnceLock<Regex> = OnceLock::new();
    DATA.get_or_init(|| Regex::new(r"(\.[^./\\]+)$").unwrap())
}

/// Retrieve the extension from a file path.
///
/// * `path` - The file path.
fn get_extension_from_filename(path: &str) -> Option<&str> {
    regex_file_ext()
        .captures(path)
        .and_then(|c| c.get(1).map(|m| m.as_str()))
}

/// Writes the image in OpenEXR format.
///
/// * `path`  - Output file path.
/// * `image` - The image.
fn write_exr(path: &str, image: &HdrImage) -> Result<()> {
    let (res_x, res_y) = (image.width(), image.height());
    info!("Writing image {path} with resolution {res_x}x{res_y}");

    let size = Vec2(res_x, res_y);
    let pixels = image.pixels();

    let layer = Layer::new(
        size,
        LayerAttributes::named("render"),
        Encoding::SMALL_LOSSLESS,
        SpecificChannels::rgb(|pos: Vec2<usize>| {
            let p = pixels[pos.1 * res_x + pos.0];
            (p.r() as f32, p.g() as f32, p.b() as f32)
        }),
    );

    let attributes = ImageAttributes::new(IntegerBounds::from_dimensions(size));
    Image::empty(attributes)
        .with_layer(layer)
        .write()
        .to_file(path)
        .map_err(|err| Error::Io(format!("Error saving output image {path}: {err}")))
}

/// Writes the image in PFM (Portable FloatMap) format in native byte order.
///
/// * `path`  - Output file path.
/// * `image` - The image.
fn write_pfm(path: &str, image: &HdrImage) -> Result<()> {
    let (width, height) = (image.width(), image.height());
    info!("Writing image {path} with resolution {width}x{height}");

    let map_err = |e: std::io::Error| Error::Io(format!("Error writing PFM file '{path}': {e}"));
    let mut file = BufWriter::new(File::create(path).map_err(map_err)?);

    // The sign of the scale encodes endianness.
    let big_endian = cfg!(target_endian = "big");
    let scale = if big_endian { 1.0 } else { -1.0 };
    write!(file, "PF\n{width} {height}\n{scale}\n").map_err(map_err)?;

    // Rows are stored bottom to top.
    for y in (0..height).rev() {
        for p in &image.pixels()[y * width..(y + 1) * width] {
            for i in 0..3 {
                let f = p[i] as f32;
                if big_endian {
                    file.write_f32::<BigEndian>(f).map_err(map_err)?;
                } else {
                    file.write_f32::<LittleEndian>(f).map_err(map_err)?;
                }
            }
        }
    }

    file.flush().map_err(map_err)
}

/// Writes the image in an 8-bit image format.
///
/// * `path`         - Output file path.
/// * `image`        - Tone mapped image.
/// * `image_format` - Image format.
fn write_8_bit(path: &str, image: &LdrImage, image_format: ImageFormat) -> Result<()> {
    let (res_x, res_y) = (image.width as u32, image.height as u32);
    info!("Writing image {path} with resolution {res_x}x{res_y}");

    let mut imgbuf: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(res_x, res_y);
    for (pixel, rgb) in imgbuf.pixels_mut().zip(image.pixels.iter()) {
        *pixel = Rgb(*rgb);
    }

    imgbuf
        .save_with_format(path, image_format)
        .map_err(|err| Error::Io(format!("Error saving output image {path}: {err}.")))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        env::temp_dir()
            .join(format!("oxatrace-{}-{name}", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }

    fn small_image() -> HdrImage {
        HdrImage::from_pixels(
            2,
            2,
            vec![
                Spectrum::black(),
                Spectrum::white(),
                Spectrum::new(2.0, 0.5, 0.25),
                Spectrum::splat(0.5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn extension_detection() {
        assert_eq!(get_extension_from_filename("out/render.png"), Some(".png"));
        assert_eq!(get_extension_from_filename("a.b/render"), None);
        assert_eq!(get_extension_from_filename("render.tar.exr"), Some(".exr"));
        assert!(is_supported_output("x.ppm"));
        assert!(!is_supported_output("x.jpg"));
    }

    #[test]
    fn unsupported_extension_is_io_error() {
        let r = write_image("render.bmp", &small_image(), &ToneMapping::default());
        assert!(matches!(r, Err(Error::Io(_))));
        let r = write_image("render", &small_image(), &ToneMapping::default());
        assert!(matches!(r, Err(Error::Io(_))));
    }

    #[test]
    fn writes_png() {
        let path = temp_path("test.png");
        write_image(&path, &small_image(), &ToneMapping::default()).unwrap();
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(1, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 0]));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn writes_pfm_header() {
        let path = temp_path("test.pfm");
        write_image(&path, &small_image(), &ToneMapping::default()).unwrap();
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"PF\n2 2\n"));
        // Header plus 4 pixels of 3 f32 channels.
        let header_len = bytes.len() - 4 * 3 * 4;
        assert!(header_len > 7);
        let _ = fs::remove_file(&path);
    }
}
