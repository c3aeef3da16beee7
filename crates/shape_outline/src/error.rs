//! Error types for outline extraction

use thiserror::Error;

/// Outline extraction errors.
///
/// `InvalidRegion`, `EmptyOutline` and `OverSimplified` are expected outcomes
/// of parameter exploration; callers decide whether to report or skip.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlineError {
    /// Requested pixel rectangle does not fit inside the source buffer
    #[error(
        "Region {width}x{height} at ({x}, {y}) lies outside the {buffer_width}x{buffer_height} pixel buffer"
    )]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buffer_width: u32,
        buffer_height: u32,
    },

    /// Nothing solid, or the traced loop is shorter than a triangle
    #[error("No outline found (sprite may be fully transparent or all colors ignored)")]
    EmptyOutline,

    /// Simplification collapsed the outline below a triangle
    #[error("Outline too simple after simplification ({vertices} vertices), try a lower tolerance")]
    OverSimplified { vertices: usize },

    /// Settings outside their accepted ranges
    #[error("Invalid outline settings: {0}")]
    InvalidSettings(String),
}

/// Result type for outline operations
pub type Result<T> = std::result::Result<T, OutlineError>;
