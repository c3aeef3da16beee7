//! # shape_asset - Sprite Sheet Physics Shapes
//!
//! Applies [`shape_outline`] to every sprite of a sprite sheet and keeps the
//! resulting outlines in a store.
//!
//! ## Features
//!
//! - **Sprite sheets**: PNG/JPEG/BMP textures with a JSON atlas of named rects
//! - **Outline stores**: in-memory or a JSON file next to the texture
//! - **Batch apply/remove**: whole sheet or a single sprite
//! - **Previews**: per-sprite summaries without touching the store
//!
//! ## Example
//!
//! ```ignore
//! use shape_asset::prelude::*;
//! use std::path::Path;
//!
//! let sheet = SpriteSheet::load("hero.png", Some(Path::new("hero.atlas.json")))?;
//! let generator = OutlineGenerator::new(OutlineSettings::default())?;
//! let mut store = JsonOutlineStore::open("hero.outlines.json")?;
//!
//! let count = apply_outlines(&sheet, &generator, &mut store, None)?;
//! println!("Applied physics shapes to {} sprites", count);
//! ```

pub mod batch;
pub mod error;
pub mod report;
pub mod sheet;
pub mod store;

pub use batch::{apply_outlines, preview, remove_outlines};
pub use error::{AssetError, Result};
pub use report::OutlineReport;
pub use sheet::{SpriteAtlas, SpriteRect, SpriteSheet};
pub use store::{JsonOutlineStore, MemoryOutlineStore, OutlineStore};

pub mod prelude {
    //! Common imports for sprite sheet processing
    pub use crate::batch::{apply_outlines, preview, remove_outlines};
    pub use crate::error::{AssetError, Result};
    pub use crate::report::OutlineReport;
    pub use crate::sheet::{SpriteAtlas, SpriteRect, SpriteSheet};
    pub use crate::store::{JsonOutlineStore, MemoryOutlineStore, OutlineStore};
    pub use shape_outline::{OutlineGenerator, OutlineSettings, Polygon, Rgb};
}
