//! Preview summaries for a single sprite

use shape_outline::Polygon;
use std::fmt;

/// Result of previewing a sprite's outline without storing it.
///
/// `outlines` are in sprite-local pixel coordinates, as are `existing`
/// (stored outlines shifted back from the sprite centre).
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineReport {
    pub sprite: String,
    pub width: u32,
    pub height: u32,
    pub outlines: Vec<Polygon>,
    pub ignored_colors: usize,
    pub existing: Vec<Polygon>,
}

impl OutlineReport {
    /// Total vertices over all generated outlines
    pub fn vertex_count(&self) -> usize {
        self.outlines.iter().map(Polygon::len).sum()
    }

    pub fn has_existing(&self) -> bool {
        !self.existing.is_empty()
    }
}

impl fmt::Display for OutlineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sprite: {}  |  {} vertices  |  {}×{} px",
            self.sprite,
            self.vertex_count(),
            self.width,
            self.height
        )?;

        if self.ignored_colors > 0 {
            write!(f, "  |  {} color(s) ignored", self.ignored_colors)?;
        }

        if self.has_existing() {
            write!(f, "  |  Has existing shape")
        } else {
            write!(f, "  |  No existing shape")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shape_outline::Vec2;

    fn report() -> OutlineReport {
        OutlineReport {
            sprite: "idle_0".to_string(),
            width: 32,
            height: 16,
            outlines: vec![Polygon::new(vec![
                Vec2::ZERO,
                Vec2::new(32.0, 0.0),
                Vec2::new(32.0, 16.0),
                Vec2::new(0.0, 16.0),
            ])],
            ignored_colors: 0,
            existing: Vec::new(),
        }
    }

    #[test]
    fn test_display_without_ignored_colors() {
        assert_eq!(
            report().to_string(),
            "Sprite: idle_0  |  4 vertices  |  32×16 px  |  No existing shape"
        );
    }

    #[test]
    fn test_display_with_ignored_and_existing() {
        let mut report = report();
        report.ignored_colors = 2;
        report.existing = report.outlines.clone();
        assert_eq!(
            report.to_string(),
            "Sprite: idle_0  |  4 vertices  |  32×16 px  |  2 color(s) ignored  |  Has existing shape"
        );
    }
}
