//! Error types for sprite sheet and outline store operations

use shape_outline::OutlineError;
use std::path::PathBuf;
use thiserror::Error;

/// Asset-level errors
#[derive(Debug, Error)]
pub enum AssetError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Texture could not be decoded
    #[error("Failed to decode image {path:?}: {message}")]
    Image { path: PathBuf, message: String },

    /// Atlas or store contents could not be parsed
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Store contents could not be written
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// No sprite with this name in the sheet
    #[error("Sprite not found: {0}")]
    SpriteNotFound(String),

    /// Sheet has no sprites at all
    #[error("No sprites found in {0}")]
    NoSprites(String),

    /// Outline generation failed
    #[error(transparent)]
    Outline(#[from] OutlineError),
}

/// Result type for asset operations
pub type Result<T> = std::result::Result<T, AssetError>;
