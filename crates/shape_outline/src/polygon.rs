//! Closed polygon outlines

use crate::simplify::simplify;
use serde::{Deserialize, Serialize};
use shape_math::{is_collinear, Vec2};

/// Fewest vertices a usable outline can have
pub const MIN_VERTICES: usize = 3;

/// Ordered vertices of an implicitly closed polygon; the last point
/// connects back to the first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    points: Vec<Vec2>,
}

impl Polygon {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// At least [`MIN_VERTICES`] points
    pub fn is_usable(&self) -> bool {
        self.points.len() >= MIN_VERTICES
    }

    /// Douglas-Peucker simplification of the vertex sequence
    pub fn simplified(&self, epsilon: f32) -> Self {
        Self::new(simplify(&self.points, epsilon))
    }

    /// Drop every vertex lying exactly on the line through its two
    /// neighbours, including across the closing edge.
    ///
    /// Turns the unit-step output of the tracer into corner-only vertices.
    pub fn merge_collinear(&self) -> Self {
        let mut points = self.points.clone();

        // Removing one vertex can make its neighbour collinear, so sweep
        // until nothing changes.
        loop {
            let n = points.len();
            if n < MIN_VERTICES {
                break;
            }

            let keep: Vec<bool> = (0..n)
                .map(|i| {
                    let prev = points[(i + n - 1) % n];
                    let next = points[(i + 1) % n];
                    !is_collinear(prev, points[i], next)
                })
                .collect();

            if keep.iter().all(|&k| k) {
                break;
            }

            points = points
                .iter()
                .zip(&keep)
                .filter_map(|(p, &k)| k.then_some(*p))
                .collect();
        }

        Self::new(points)
    }

    /// Every vertex shifted by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.points.iter().map(|&p| p + offset).collect())
    }

    /// Convert from pixel space (`0..width`, `0..height`) to coordinates
    /// relative to the sprite centre
    pub fn centered(&self, width: u32, height: u32) -> Self {
        self.translated(-half_extents(width, height))
    }

    /// Inverse of [`Polygon::centered`]
    pub fn uncentered(&self, width: u32, height: u32) -> Self {
        self.translated(half_extents(width, height))
    }

    /// Shoelace area; the sign gives the winding direction
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        if n < MIN_VERTICES {
            return 0.0;
        }

        let twice: f32 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();

        twice * 0.5
    }
}

impl From<Vec<Vec2>> for Polygon {
    fn from(points: Vec<Vec2>) -> Self {
        Self::new(points)
    }
}

fn half_extents(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 * 0.5, height as f32 * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_with_midpoints() -> Polygon {
        Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_merge_collinear_keeps_corners() {
        let merged = square_with_midpoints().merge_collinear();
        assert_eq!(
            merged.points(),
            &[
                Vec2::new(0.0, 0.0),
                Vec2::new(2.0, 0.0),
                Vec2::new(2.0, 2.0),
                Vec2::new(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_merge_collinear_across_closing_edge() {
        // Start vertex sits in the middle of the left side
        let mut points = square_with_midpoints().into_points();
        points.rotate_left(7);
        let merged = Polygon::new(points).merge_collinear();
        assert_eq!(merged.len(), 4);
        assert!(!merged.points().contains(&Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn test_centering_round_trip() {
        let square = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 2.0),
        ]);
        let centered = square.centered(4, 2);
        assert_eq!(centered.points()[0], Vec2::new(-2.0, -1.0));
        assert_eq!(centered.uncentered(4, 2), square);
    }

    #[test]
    fn test_signed_area() {
        let square = square_with_midpoints();
        assert_eq!(square.signed_area().abs(), 4.0);
        assert_eq!(Polygon::default().signed_area(), 0.0);
    }

    #[test]
    fn test_usable() {
        assert!(!Polygon::new(vec![Vec2::ZERO, Vec2::X]).is_usable());
        assert!(square_with_midpoints().is_usable());
    }
}
