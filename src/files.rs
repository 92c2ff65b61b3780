//! Input allow-listing and output naming.

use std::path::{Path, PathBuf};

use crate::error::{AsciiError, Result};

/// Image extensions accepted on the command line.
pub const SUPPORTED_IMAGE_TYPES: &[&str] = &[".png"];

/// Check that a path has a supported image extension (case-insensitive).
pub fn check_file(path: &Path) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default();

    if SUPPORTED_IMAGE_TYPES.contains(&ext.as_str()) {
        return Ok(());
    }

    Err(AsciiError::UnsupportedFileType {
        path: path.to_path_buf(),
        help: format!("Supported file types: {}", SUPPORTED_IMAGE_TYPES.join(", ")),
    })
}

/// Default output file for an input: `<input without extension>_output.txt`,
/// next to the input.
pub fn output_name(input: &Path) -> PathBuf {
    match input.file_stem() {
        Some(stem) => {
            let mut name = stem.to_os_string();
            name.push("_output.txt");
            input.with_file_name(name)
        }
        None => PathBuf::from("output.txt"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_file_png() {
        assert!(check_file(Path::new("photo.png")).is_ok());
        assert!(check_file(Path::new("dir/photo.PNG")).is_ok());
    }

    #[test]
    fn test_check_file_unsupported() {
        let err = check_file(Path::new("photo.jpg")).unwrap_err();
        match err {
            AsciiError::UnsupportedFileType { help, .. } => {
                assert_eq!(help, "Supported file types: .png");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_check_file_no_extension() {
        assert!(check_file(Path::new("photo")).is_err());
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name(Path::new("photo.png")), PathBuf::from("photo_output.txt"));
    }

    #[test]
    fn test_output_name_keeps_directory() {
        assert_eq!(
            output_name(Path::new("images/cat.png")),
            PathBuf::from("images/cat_output.txt")
        );
    }

    #[test]
    fn test_output_name_empty() {
        assert_eq!(output_name(Path::new("")), PathBuf::from("output.txt"));
    }
}
