/// Error types for the gallery
///
/// Nothing here is ever shown to the user. Config problems fall back to
/// defaults, thumbnail problems fall back to the original asset, and a
/// rejected modal index simply leaves the modal closed.
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using GalleryError
pub type Result<T> = std::result::Result<T, GalleryError>;

#[derive(Debug, Error)]
pub enum GalleryError {
    /// The config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `Config`
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A modal was requested for an index outside the visible list
    #[error("no visible image at index {index} ({len} visible)")]
    NoSuchImage { index: usize, len: usize },

    /// Decoding, resizing or encoding a thumbnail failed
    #[error("thumbnail for {path}: {source}")]
    Thumbnail {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Neither a cache nor a home directory could be determined
    #[error("could not determine a cache directory")]
    NoCacheDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
