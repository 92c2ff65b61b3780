//! asciify - Image to ASCII art converter
//!
//! Resizes an image to a fixed character width, reduces it to luminance and
//! maps every pixel onto a brightness ramp, producing rows of monospace text.

pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod types;

pub use config::{Config, CONFIG_FILENAME};
pub use error::{AsciiError, Result};
pub use files::{check_file, output_name, SUPPORTED_IMAGE_TYPES};
pub use pipeline::{
    convert_bytes, convert_image, convert_path, convert_with_ramp, load_image, ConvertOptions,
    DEFAULT_WIDTH,
};
pub use render::{fold_lines, quantize, scale, target_dimensions, to_luminance};
pub use types::{AsciiCanvas, Ramp, REFERENCE_BUCKET_WIDTH, REFERENCE_CHARS};
