//! Sprite sheets: a decoded texture plus named sprite rectangles

use crate::error::{AssetError, Result};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use shape_outline::{PixelBuffer, PixelSample, Region, Rgb};
use std::fs;
use std::path::Path;

/// A named rectangle inside a sprite sheet texture, in image coordinates
/// (origin top-left)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRect {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SpriteRect {
    pub fn new(name: impl Into<String>, x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }

    pub fn region(&self) -> Region {
        Region::new(self.x, self.y, self.width, self.height)
    }
}

/// Sprite layout description, stored as JSON next to the texture
///
/// ```json
/// { "sprites": [ { "name": "idle_0", "x": 0, "y": 0, "width": 32, "height": 32 } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteAtlas {
    pub sprites: Vec<SpriteRect>,
}

impl SpriteAtlas {
    /// Parse an atlas from JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| AssetError::Deserialization(e.to_string()))
    }

    /// Load an atlas file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let atlas = Self::from_json(&text)?;
        log::debug!(
            "Loaded atlas {:?} ({} sprites)",
            path.as_ref(),
            atlas.sprites.len()
        );
        Ok(atlas)
    }

    /// Atlas with one sprite covering a whole texture
    pub fn single(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            sprites: vec![SpriteRect::new(name, 0, 0, width, height)],
        }
    }
}

/// Decoded RGBA8 texture with its sprites, sorted by name
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    name: String,
    texture: RgbaImage,
    sprites: Vec<SpriteRect>,
}

impl SpriteSheet {
    pub fn new(name: impl Into<String>, texture: RgbaImage, mut sprites: Vec<SpriteRect>) -> Self {
        sprites.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            name: name.into(),
            texture,
            sprites,
        }
    }

    /// Decode texture bytes (PNG, JPEG, BMP).
    ///
    /// Without an atlas the whole texture is a single sprite called `name`.
    pub fn decode(name: &str, bytes: &[u8], atlas: Option<SpriteAtlas>) -> Result<Self> {
        let texture = image::load_from_memory(bytes)
            .map_err(|e| AssetError::Image {
                path: name.into(),
                message: e.to_string(),
            })?
            .to_rgba8();

        let atlas = atlas
            .unwrap_or_else(|| SpriteAtlas::single(name, texture.width(), texture.height()));
        if atlas.sprites.is_empty() {
            return Err(AssetError::NoSprites(name.to_string()));
        }

        Ok(Self::new(name, texture, atlas.sprites))
    }

    /// Load a texture and its atlas.
    ///
    /// Without an atlas the whole texture is a single sprite named after
    /// the file stem.
    pub fn load(texture_path: impl AsRef<Path>, atlas_path: Option<&Path>) -> Result<Self> {
        let texture_path = texture_path.as_ref();
        let bytes = fs::read(texture_path)?;
        let name = texture_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "texture".to_string());

        let atlas = atlas_path.map(SpriteAtlas::load).transpose()?;

        // Report the file path rather than the sheet name
        let sheet = Self::decode(&name, &bytes, atlas).map_err(|e| match e {
            AssetError::Image { message, .. } => AssetError::Image {
                path: texture_path.to_path_buf(),
                message,
            },
            AssetError::NoSprites(_) => AssetError::NoSprites(texture_path.display().to_string()),
            other => other,
        })?;

        log::info!(
            "Loaded sprite sheet {:?} ({}x{}, {} sprites)",
            texture_path,
            sheet.width(),
            sheet.height(),
            sheet.sprites.len()
        );

        Ok(sheet)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.texture.width()
    }

    pub fn height(&self) -> u32 {
        self.texture.height()
    }

    /// Sprites in name order
    pub fn sprites(&self) -> &[SpriteRect] {
        &self.sprites
    }

    pub fn sprite(&self, name: &str) -> Result<&SpriteRect> {
        self.sprites
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| AssetError::SpriteNotFound(name.to_string()))
    }

    /// Sprites to process: all of them, or just `only`
    pub fn select(&self, only: Option<&str>) -> Result<Vec<&SpriteRect>> {
        match only {
            Some(name) => Ok(vec![self.sprite(name)?]),
            None => Ok(self.sprites.iter().collect()),
        }
    }

    /// Borrow the texture as a pixel buffer
    pub fn pixels(&self) -> PixelBuffer<'_> {
        PixelBuffer::new(self.texture.as_raw(), self.texture.width(), self.texture.height())
    }

    /// Color of a sprite-local pixel, for adding to the ignore list.
    ///
    /// `None` when the point falls outside the sprite or the texture.
    pub fn pick_color(&self, sprite: &SpriteRect, x: u32, y: u32) -> Option<Rgb> {
        if x >= sprite.width || y >= sprite.height {
            return None;
        }

        let rgba = self.pixels().rgba(sprite.x + x, sprite.y + y)?;
        Some(PixelSample::from_rgba8(rgba).rgb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sheet() -> SpriteSheet {
        let mut texture = RgbaImage::new(4, 2);
        texture.put_pixel(3, 1, Rgba([255, 0, 128, 255]));
        SpriteSheet::new(
            "test",
            texture,
            vec![SpriteRect::new("b", 2, 0, 2, 2), SpriteRect::new("a", 0, 0, 2, 2)],
        )
    }

    #[test]
    fn test_sprites_sorted_by_name() {
        let sheet = sheet();
        let names: Vec<_> = sheet.sprites().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_lookup() {
        let sheet = sheet();
        assert_eq!(sheet.sprite("b").unwrap().x, 2);
        assert!(matches!(sheet.sprite("zzz"), Err(AssetError::SpriteNotFound(_))));
        assert_eq!(sheet.select(None).unwrap().len(), 2);
        assert_eq!(sheet.select(Some("a")).unwrap().len(), 1);
    }

    #[test]
    fn test_pick_color_is_sprite_local() {
        let sheet = sheet();
        let b = sheet.sprite("b").unwrap().clone();
        assert_eq!(sheet.pick_color(&b, 1, 1), Some(Rgb::from_rgb8(255, 0, 128)));
        assert_eq!(sheet.pick_color(&b, 0, 0), Some(Rgb::BLACK));
        assert_eq!(sheet.pick_color(&b, 2, 0), None);
    }

    #[test]
    fn test_atlas_json() {
        let atlas = SpriteAtlas::from_json(
            r#"{ "sprites": [ { "name": "idle", "x": 0, "y": 16, "width": 16, "height": 16 } ] }"#,
        )
        .unwrap();
        assert_eq!(atlas.sprites[0], SpriteRect::new("idle", 0, 16, 16, 16));
        assert!(SpriteAtlas::from_json("{").is_err());
    }

    fn png_bytes(texture: &RgbaImage) -> Vec<u8> {
        let mut bytes = std::io::Cursor::new(Vec::new());
        texture
            .write_to(&mut bytes, image::ImageFormat::Png)
            .unwrap();
        bytes.into_inner()
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result = SpriteSheet::decode("bad.png", b"not an image", None);
        assert!(matches!(result, Err(AssetError::Image { .. })));
    }

    #[test]
    fn test_decode_without_atlas_is_one_sprite() {
        let bytes = png_bytes(&RgbaImage::new(5, 3));
        let sheet = SpriteSheet::decode("crate", &bytes, None).unwrap();
        assert_eq!(sheet.sprites(), &[SpriteRect::new("crate", 0, 0, 5, 3)]);
    }

    #[test]
    fn test_decode_empty_atlas() {
        let bytes = png_bytes(&RgbaImage::new(2, 2));
        let result = SpriteSheet::decode("crate", &bytes, Some(SpriteAtlas::default()));
        assert!(matches!(result, Err(AssetError::NoSprites(name)) if name == "crate"));
    }
}
