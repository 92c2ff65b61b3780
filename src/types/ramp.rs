//! Brightness ramp type.

use std::fmt;

use crate::error::{AsciiError, Result};

/// Reference ramp characters, darkest to lightest.
pub const REFERENCE_CHARS: [char; 11] = ['#', '?', '%', '.', 'S', '+', '.', '*', ':', ',', '@'];

/// Reference bucket width. 11 buckets of 25 cover 0-274, so the top
/// bucket (250-255) only holds six intensities.
pub const REFERENCE_BUCKET_WIDTH: u32 = 25;

/// Number of distinct 8-bit intensities a ramp has to cover.
const INTENSITY_LEVELS: u32 = 256;

/// An ordered, immutable sequence of characters used to quantize brightness.
///
/// Each character owns an equal-width bucket of the 0-255 intensity range.
/// Intensities past the last bucket clamp to the last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
    bucket_width: u32,
}

impl Ramp {
    /// Create a ramp from characters and a bucket width.
    ///
    /// The buckets must cover every intensity: `len * bucket_width >= 256`.
    pub fn new(chars: impl IntoIterator<Item = char>, bucket_width: u32) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();

        if chars.is_empty() {
            return Err(AsciiError::Config {
                message: "Ramp must contain at least one character".to_string(),
                help: None,
            });
        }

        if bucket_width == 0 {
            return Err(AsciiError::Config {
                message: "Ramp bucket width must be positive".to_string(),
                help: None,
            });
        }

        let coverage = chars.len() as u64 * bucket_width as u64;
        if coverage < INTENSITY_LEVELS as u64 {
            return Err(AsciiError::Config {
                message: format!(
                    "Ramp of {} characters with bucket width {} covers only {} intensities",
                    chars.len(),
                    bucket_width,
                    coverage
                ),
                help: Some(format!(
                    "Use a bucket width of at least {}",
                    INTENSITY_LEVELS.div_ceil(chars.len() as u32)
                )),
            });
        }

        Ok(Self {
            chars,
            bucket_width,
        })
    }

    /// The reference ramp: `#?%.S+.*:,@` with buckets of 25.
    pub fn reference() -> Self {
        Self {
            chars: REFERENCE_CHARS.to_vec(),
            bucket_width: REFERENCE_BUCKET_WIDTH,
        }
    }

    /// Return a new ramp with the character order reversed.
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
            bucket_width: self.bucket_width,
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn bucket_width(&self) -> u32 {
        self.bucket_width
    }

    /// Bucket index for an intensity, clamped to the last character.
    pub fn index_for(&self, intensity: u8) -> usize {
        let bucket = (intensity as u32 / self.bucket_width) as usize;
        bucket.min(self.chars.len() - 1)
    }

    /// Character for an intensity.
    pub fn char_for(&self, intensity: u8) -> char {
        self.chars[self.index_for(intensity)]
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::reference()
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
