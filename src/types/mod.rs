//! Core domain types for asciify.
//!
//! - `Ramp` - Ordered brightness characters with bucket quantization
//! - `AsciiCanvas` - The rendered rows of text

mod canvas;
mod ramp;

pub use canvas::AsciiCanvas;
pub use ramp::{Ramp, REFERENCE_BUCKET_WIDTH, REFERENCE_CHARS};
