//! Custom error types for logokit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the logokit library.
#[derive(Error, Debug)]
pub enum Error {
    /// Input file does not exist.
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    /// Failed to decode an image file.
    #[error("failed to load image from {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to save image to {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Image dimensions are not supported by the requested transform.
    #[error("unsupported image dimensions {width}x{height}: {reason}")]
    UnsupportedDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl Error {
    /// Whether the input could not be read as an image, either because it
    /// is missing or because decoding failed.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Decode { .. })
    }
}

/// Result type alias for logokit operations.
pub type Result<T> = std::result::Result<T, Error>;
