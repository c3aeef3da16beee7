//! Douglas-Peucker polyline simplification

use shape_math::{perpendicular_distance, Vec2};

/// Simplify an ordered point sequence so no removed point deviates more than
/// `epsilon` from the kept polyline.
///
/// The sequence is treated as an open polyline from its first to its last
/// point; the implicit closing edge of a polygon is not considered. Fewer
/// than three points are returned unchanged. A negative or NaN `epsilon` is
/// treated as zero. Ties for the farthest point go to the lowest index, so
/// the result is deterministic.
pub fn simplify(points: &[Vec2], epsilon: f32) -> Vec<Vec2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let epsilon = epsilon.max(0.0);
    let last = points.len() - 1;

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    // Explicit stack of open spans instead of recursion; long traced
    // outlines would otherwise recurse once per vertex in the worst case.
    let mut spans = vec![(0usize, last)];

    while let Some((start, end)) = spans.pop() {
        if end - start < 2 {
            continue;
        }

        let (index, distance) = farthest_point(points, start, end);
        if distance <= epsilon {
            continue;
        }

        keep[index] = true;
        spans.push((index, end));
        spans.push((start, index));
    }

    points
        .iter()
        .zip(&keep)
        .filter_map(|(p, &k)| k.then_some(*p))
        .collect()
}

/// Index and distance of the interior point farthest from the chord
/// `points[start]..points[end]`, first occurrence on ties
fn farthest_point(points: &[Vec2], start: usize, end: usize) -> (usize, f32) {
    let (a, b) = (points[start], points[end]);
    let mut best = (start, 0.0f32);

    for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
        let d = perpendicular_distance(p, a, b);
        if d > best.1 {
            best = (i, d);
        }
    }

    best
}
