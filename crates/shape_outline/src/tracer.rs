//! Boundary edge tracing over a solid mask
//!
//! Every solid cell contributes one directed unit edge per side that faces a
//! non-solid cell or the mask border. Sides are oriented so each connected
//! solid region is wound the same way, which lets the edges be chained
//! end-to-start into closed loops:
//!
//! ```text
//!   (x,y) ──top──▶ (x+1,y)
//!     ▲               │
//!   left            right
//!     │               ▼
//!  (x,y+1) ◀─bottom─ (x+1,y+1)
//! ```

use crate::mask::SolidMask;
use crate::polygon::Polygon;
use shape_math::{PointKey, Vec2};
use std::collections::HashMap;

/// Directed unit segment separating a solid cell from a non-solid one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: Vec2,
    pub to: Vec2,
}

impl Edge {
    fn new(from: (u32, u32), to: (u32, u32)) -> Self {
        Self {
            from: Vec2::from_grid(from.0, from.1),
            to: Vec2::from_grid(to.0, to.1),
        }
    }
}

/// Collect boundary edges in row-major cell order, each cell emitting
/// top, bottom, left, right
pub fn boundary_edges(mask: &SolidMask) -> Vec<Edge> {
    let mut edges = Vec::new();

    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let (xi, yi) = (x as i64, y as i64);
            if !mask.is_solid(xi, yi) {
                continue;
            }

            if !mask.is_solid(xi, yi - 1) {
                edges.push(Edge::new((x, y), (x + 1, y)));
            }
            if !mask.is_solid(xi, yi + 1) {
                edges.push(Edge::new((x + 1, y + 1), (x, y + 1)));
            }
            if !mask.is_solid(xi - 1, yi) {
                edges.push(Edge::new((x, y + 1), (x, y)));
            }
            if !mask.is_solid(xi + 1, yi) {
                edges.push(Edge::new((x + 1, y), (x + 1, y + 1)));
            }
        }
    }

    edges
}

/// Trace a single boundary loop, starting from the first boundary edge.
///
/// Only one loop is produced: with several disjoint regions (or holes) the
/// rest of the boundary is left untraced. Use [`trace_all`] for every loop.
/// Returns an empty polygon when nothing in the mask is solid.
pub fn trace(mask: &SolidMask) -> Polygon {
    let edges = boundary_edges(mask);
    if edges.is_empty() {
        return Polygon::default();
    }

    let mut walker = EdgeWalker::new(&edges);
    Polygon::new(walker.walk_from(0))
}

/// Trace every boundary loop in discovery order.
///
/// After each loop closes the walk restarts from the first edge not yet
/// used, until all edges are consumed. Outer boundaries and hole
/// boundaries are both returned; holes wind the opposite way.
pub fn trace_all(mask: &SolidMask) -> Vec<Polygon> {
    let edges = boundary_edges(mask);
    let mut walker = EdgeWalker::new(&edges);
    let mut loops = Vec::new();

    for start in 0..edges.len() {
        if walker.is_used(start) {
            continue;
        }

        let points = walker.walk_from(start);
        if !points.is_empty() {
            loops.push(Polygon::new(points));
        }
    }

    loops
}

/// Greedy edge chaining state shared across walks
struct EdgeWalker<'a> {
    edges: &'a [Edge],
    outgoing: HashMap<PointKey, Vec<usize>>,
    used: Vec<bool>,
}

impl<'a> EdgeWalker<'a> {
    fn new(edges: &'a [Edge]) -> Self {
        let mut outgoing: HashMap<PointKey, Vec<usize>> = HashMap::with_capacity(edges.len());
        for (i, edge) in edges.iter().enumerate() {
            outgoing.entry(edge.from.key()).or_default().push(i);
        }

        Self {
            edges,
            outgoing,
            used: vec![false; edges.len()],
        }
    }

    fn is_used(&self, index: usize) -> bool {
        self.used[index]
    }

    /// First unused edge leaving `point`, marked as used
    fn take_outgoing(&mut self, point: Vec2) -> Option<usize> {
        let candidates = self.outgoing.get(&point.key())?;
        let index = candidates.iter().copied().find(|&i| !self.used[i])?;
        self.used[index] = true;
        Some(index)
    }

    /// Chain edges from `start` until the loop closes or dead-ends
    fn walk_from(&mut self, start: usize) -> Vec<Vec2> {
        self.used[start] = true;

        let first = self.edges[start].from;
        let mut next = self.edges[start].to;
        let mut outline = vec![first];

        // Bounded by the edge count so malformed input cannot spin forever
        let mut remaining = self.edges.len() + 1;

        while remaining > 0 {
            remaining -= 1;
            outline.push(next);

            if next == first && outline.len() > 2 {
                break;
            }

            match self.take_outgoing(next) {
                Some(index) => next = self.edges[index].to,
                None => break,
            }
        }

        if outline.len() > 1 && outline.last() == Some(&first) {
            outline.pop();
        }

        outline
    }
}
