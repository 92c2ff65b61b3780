//! Image to ASCII conversion pipeline.
//!
//! Stages run in a fixed order: resize on the colour image, convert to
//! luminance, quantize against the ramp, then fold into rows.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::{AsciiError, Result};
use crate::render::{fold_lines, quantize, scale, to_luminance};
use crate::types::{AsciiCanvas, Ramp};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 100;

/// Options for a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Output width in characters.
    pub width: u32,
    /// Reverse the brightness ramp.
    pub reverse: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            reverse: false,
        }
    }
}

impl ConvertOptions {
    /// The reference ramp, reversed if requested.
    pub fn ramp(&self) -> Ramp {
        let ramp = Ramp::reference();
        if self.reverse {
            ramp.reversed()
        } else {
            ramp
        }
    }
}

/// Decode an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| AsciiError::ImageDecode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Convert an image file to ASCII art.
pub fn convert_path(path: &Path, options: &ConvertOptions) -> Result<AsciiCanvas> {
    let image = load_image(path)?;
    convert_image(&image, options)
}

/// Convert encoded image bytes (any format `image` can sniff) to ASCII art.
pub fn convert_bytes(bytes: &[u8], options: &ConvertOptions) -> Result<AsciiCanvas> {
    let image = image::load_from_memory(bytes).map_err(|e| AsciiError::ImageDecode {
        path: PathBuf::from("<memory>"),
        message: e.to_string(),
    })?;
    convert_image(&image, options)
}

/// Convert a decoded image to ASCII art.
pub fn convert_image(image: &DynamicImage, options: &ConvertOptions) -> Result<AsciiCanvas> {
    convert_with_ramp(image, options.width, &options.ramp())
}

/// Convert a decoded image using an explicit ramp.
pub fn convert_with_ramp(image: &DynamicImage, width: u32, ramp: &Ramp) -> Result<AsciiCanvas> {
    let scaled = scale(image, width)?;
    let luma = to_luminance(&scaled);
    let chars = quantize(luma.into_raw(), ramp);

    Ok(AsciiCanvas::new(fold_lines(&chars, width as usize)))
}
