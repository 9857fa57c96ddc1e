//! Errors surfaced by the command-line driver.

use std::path::PathBuf;

use image_ops::ImageOpsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("File {} does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("Output file {} already exists", .0.display())]
    OutputExists(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("No supported image files were found in {}", .0.display())]
    NoSupportedImages(PathBuf),

    #[error("File {} is not a supported image file", .0.display())]
    UnsupportedFile(PathBuf),

    #[error("Could not load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Could not save image {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save {failed} of {total} slices")]
    SaveFailed { failed: usize, total: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Ops(#[from] ImageOpsError),

    #[error("Invalid setting {key}: {message}")]
    Config { key: String, message: String },
}

/// Result type alias for driver operations.
pub type Result<T> = std::result::Result<T, CliError>;
