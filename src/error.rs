use miette::Diagnostic;
use thiserror::Error;

/// Main error type for asciify operations
#[derive(Error, Diagnostic, Debug)]
pub enum AsciiError {
    #[error("{} is not supported", .path.display())]
    #[diagnostic(code(asciify::unsupported))]
    UnsupportedFileType {
        path: std::path::PathBuf,
        #[help]
        help: String,
    },

    #[error("Unable to open image file {}: {message}", .path.display())]
    #[diagnostic(code(asciify::decode))]
    ImageDecode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid dimension: {message}")]
    #[diagnostic(code(asciify::dimension))]
    InvalidDimension { message: String },

    #[error("Failed to write {}: {message}", .path.display())]
    #[diagnostic(code(asciify::write))]
    OutputWrite {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(asciify::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(asciify::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, AsciiError>;
