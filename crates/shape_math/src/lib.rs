//! # shape_math - 2D Geometry Primitives
//!
//! Small, dependency-free math for outline extraction: a `Vec2` point type
//! and the point/line distance functions used by polygon simplification.

pub mod line;
pub mod vector;

pub use line::*;
pub use vector::*;

/// Common math constants
pub mod consts {
    /// Diagonal of the unit RGB cube
    #[allow(clippy::excessive_precision)]
    pub const SQRT_3: f32 = 1.732_050_807_568_877_2;
    /// Segment lengths below this are treated as a single point
    pub const DEGENERATE_LENGTH: f32 = 1e-4;
}
