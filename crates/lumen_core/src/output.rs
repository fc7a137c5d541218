//! Image output.
//!
//! PPM (ASCII `P3`) is written directly; any other extension is encoded
//! through the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::Image;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(#[from] ::image::ImageError),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Map a channel in [0, 1] to [0, 255], rounding and clamping out-of-range values.
#[inline]
pub fn to_byte(value: f32) -> u8 {
    (255.0 * value).round().clamp(0.0, 255.0) as u8
}

/// Write `image` as an ASCII PPM to any writer.
pub fn write_ppm_to<W: Write>(writer: &mut W, image: &Image) -> OutputResult<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for row in image.rows() {
        let line = row
            .iter()
            .flat_map(|p| [p.color.x, p.color.y, p.color.z])
            .map(|v| to_byte(v).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }

    Ok(())
}

/// Write `image` as an ASCII PPM file.
pub fn write_ppm(path: impl AsRef<Path>, image: &Image) -> OutputResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm_to(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Save `image`, picking the format from the file extension.
pub fn save_image(path: impl AsRef<Path>, image: &Image) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        write_ppm(path, image)?;
    } else {
        let rgb = ::image::RgbImage::from_fn(image.width, image.height, |x, y| {
            let c = image.get(x, y);
            ::image::Rgb([to_byte(c.x), to_byte(c.y), to_byte(c.z)])
        });
        rgb.save(path)?;
    }

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
