//! Error types shared by the drawing core and the background loader.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing a [`crate::Draw`] or handling its input.
#[derive(Debug, Error)]
pub enum DrawError {
    /// A resolved setting was empty or unusable when a stroke started.
    #[error("Invalid drawing configuration: {0}")]
    Config(String),

    /// A stroke was attempted before both buffers finished loading.
    #[error("Background is still loading; strokes are not accepted yet")]
    NotReady,

    /// The background image failed to load, so strokes are never accepted.
    #[error("Background failed to load: {0}")]
    BackgroundFailed(String),

    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Surface pixels are not accessible: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),

    #[error("Failed to save snapshot: {0}")]
    Save(#[from] std::io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Errors raised while resolving or decoding a background image.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid image location '{0}'")]
    InvalidLocation(String),

    #[error("Unsupported image scheme '{0}' (only local paths and file:// URLs)")]
    UnsupportedScheme(String),

    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode PNG: {0}")]
    Decode(#[from] cairo::IoError),

    #[error("Decoded image pixels are not accessible: {0}")]
    Pixels(#[from] cairo::BorrowError),

    #[error("Failed to build image surface: {0}")]
    Surface(#[from] cairo::Error),

    /// The loader task ended without delivering a result.
    #[error("Image load was abandoned before completing")]
    Abandoned,
}
