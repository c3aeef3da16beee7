//! # shape_outline - Sprite Physics Outlines
//!
//! Turns a block of RGBA pixels into a simplified collision polygon.
//!
//! # Pipeline
//!
//! ```text
//!  PixelBuffer ──classify──▶ SolidMask ──trace──▶ Polygon ──simplify──▶ Polygon
//!   (RGBA8)     alpha +        (bool grid)    (unit-step      (Douglas-Peucker)
//!               ignored colors                 boundary loop)
//! ```
//!
//! Every stage is a pure function of its inputs. Nothing is cached between
//! calls, so independent inputs can be processed from independent threads.
//!
//! # Example
//!
//! ```
//! use shape_outline::prelude::*;
//!
//! // 2x2 opaque block
//! let pixels = vec![255u8; 2 * 2 * 4];
//! let buffer = PixelBuffer::new(&pixels, 2, 2);
//!
//! let generator = OutlineGenerator::new(OutlineSettings::default()).unwrap();
//! let outline = generator.generate(&buffer, buffer.full_region()).unwrap();
//! assert!(outline.is_usable());
//! ```

pub mod classifier;
pub mod color;
pub mod error;
pub mod generator;
pub mod mask;
pub mod polygon;
pub mod settings;
pub mod simplify;
pub mod tracer;

pub mod prelude {
    //! Common imports for outline generation
    pub use crate::classifier::{is_solid, SolidityClassifier};
    pub use crate::color::{PixelSample, Rgb};
    pub use crate::error::{OutlineError, Result};
    pub use crate::generator::OutlineGenerator;
    pub use crate::mask::{PixelBuffer, Region, SolidMask};
    pub use crate::polygon::{Polygon, MIN_VERTICES};
    pub use crate::settings::OutlineSettings;
    pub use crate::simplify::simplify;
    pub use crate::tracer::{boundary_edges, trace, trace_all, Edge};
    pub use shape_math::Vec2;
}

pub use prelude::*;
