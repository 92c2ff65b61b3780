//! Rendering stages for asciify.
//!
//! Each stage is a pure transform: resize, luminance, quantize, fold.

mod fold;
mod luma;
mod quantize;
mod scale;

pub use fold::fold_lines;
pub use luma::to_luminance;
pub use quantize::quantize;
pub use scale::{scale, target_dimensions};
