//! Point / line distance helpers

use crate::consts::DEGENERATE_LENGTH;
use crate::vector::Vec2;

/// Z component of the 2D cross product
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Distance from `point` to the infinite line through `start` and `end`.
///
/// When the two reference points (nearly) coincide the line is undefined and
/// the plain distance to `start` is returned instead.
#[inline]
pub fn perpendicular_distance(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let line = end - start;
    let len = line.length();

    if len < DEGENERATE_LENGTH {
        return point.distance(start);
    }

    cross(point - start, line).abs() / len
}

/// True when `b` lies exactly on the line through `a` and `c`
#[inline]
pub fn is_collinear(a: Vec2, b: Vec2, c: Vec2) -> bool {
    cross(b - a, c - a) == 0.0
}
