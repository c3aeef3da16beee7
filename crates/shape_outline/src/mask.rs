//! Solid masks and the pixel buffers they are sampled from

use crate::classifier::SolidityClassifier;
use crate::error::{OutlineError, Result};
use crate::settings::OutlineSettings;
use serde::{Deserialize, Serialize};

/// Borrowed, row-major RGBA8 pixel buffer
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw RGBA8 bytes.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * 4`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "pixel buffer length does not match {}x{} RGBA8",
            width,
            height
        );
        Self { data, width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The region covering the whole buffer
    pub fn full_region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }

    /// RGBA of the pixel at `(x, y)`, `None` outside the buffer
    pub fn rgba(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Check that `region` lies entirely inside this buffer
    pub fn check_region(&self, region: Region) -> Result<()> {
        let fits_x = region
            .x
            .checked_add(region.width)
            .map_or(false, |right| right <= self.width);
        let fits_y = region
            .y
            .checked_add(region.height)
            .map_or(false, |bottom| bottom <= self.height);

        if fits_x && fits_y {
            Ok(())
        } else {
            Err(OutlineError::InvalidRegion {
                x: region.x,
                y: region.y,
                width: region.width,
                height: region.height,
                buffer_width: self.width,
                buffer_height: self.height,
            })
        }
    }
}

/// Rectangle of pixels inside a buffer, origin at the top-left
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Boolean occupancy grid, row-major, `true` = solid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolidMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl SolidMask {
    /// Build a mask from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != width * height`.
    pub fn new(width: u32, height: u32, cells: Vec<bool>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "mask storage does not match {}x{}",
            width,
            height
        );
        Self { width, height, cells }
    }

    /// Fully transparent mask
    pub fn empty(width: u32, height: u32) -> Self {
        Self::new(width, height, vec![false; width as usize * height as usize])
    }

    /// Build a mask by evaluating `f(x, y)` for every cell
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self { width, height, cells }
    }

    /// Build a mask from text rows where `#` marks a solid cell.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for row in rows {
            assert_eq!(row.chars().count(), width, "ragged mask rows");
            cells.extend(row.chars().map(|c| c == '#'));
        }
        Self::new(width as u32, rows.len() as u32, cells)
    }

    /// Classify every pixel of `region` with the given settings
    pub fn classify(
        pixels: &PixelBuffer<'_>,
        region: Region,
        settings: &OutlineSettings,
    ) -> Result<Self> {
        pixels.check_region(region)?;

        let classifier = SolidityClassifier::new(settings);
        let mask = Self::from_fn(region.width, region.height, |x, y| {
            pixels
                .rgba(region.x + x, region.y + y)
                .map_or(false, |rgba| classifier.is_solid_rgba8(rgba))
        });

        Ok(mask)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at `(x, y)`; out-of-bounds cells (including negative
    /// coordinates) are never solid
    #[inline]
    pub fn is_solid(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Number of solid cells
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// No solid cell at all
    pub fn is_transparent(&self) -> bool {
        !self.cells.iter().any(|&c| c)
    }
}
