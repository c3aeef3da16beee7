//! Tool errors

use shape_asset::AssetError;
use shape_outline::OutlineError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Bad command line
    #[error("{0}")]
    Usage(String),

    /// Config file could not be read
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this tool
    #[error("Invalid config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A flag or environment variable has an unparseable value
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}

/// Errors while running a command
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Outline(#[from] OutlineError),

    /// `--ignore-at` point outside the sprite
    #[error("Pixel ({x}, {y}) is outside sprite '{sprite}'")]
    PickOutside { sprite: String, x: u32, y: u32 },
}
