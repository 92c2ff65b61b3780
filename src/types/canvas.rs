//! The rendered text artifact.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{AsciiError, Result};

/// Rows of ASCII art in raster order.
///
/// Every row has the canvas width except possibly the last one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiCanvas {
    lines: Vec<String>,
}

impl AsciiCanvas {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width in characters (length of the first row).
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |l| l.chars().count())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Write the canvas to a text file, rows joined by newlines.
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err = |e: std::io::Error| AsciiError::OutputWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut file = File::create(path).map_err(write_err)?;
        file.write_all(self.to_string().as_bytes())
            .map_err(write_err)?;

        Ok(())
    }
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
