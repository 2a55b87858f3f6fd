//! Survey region polygons.
//!
//! A [`Polygon`] is built from caller-owned vertices without mutating them:
//! a repeated closing vertex is dropped and the ring is rotated so the
//! vertex with the smallest x (westernmost longitude) comes first. That
//! vertex anchors the sweep, which keeps plans deterministic regardless of
//! where the caller's vertex list starts.

use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::segment::LineSegment2d;
use crate::vector::Vector2d;

/// A normalized simple polygon with at least 3 distinct vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    vertices: Vec<Vector2d>,
}

impl Polygon {
    pub fn new(vertices: &[Vector2d]) -> Result<Self> {
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(PlannerError::NonFiniteCoordinate { index });
        }

        let open = match vertices {
            [first, .., last] if first == last => &vertices[..vertices.len() - 1],
            _ => vertices,
        };

        let distinct = count_distinct(open);
        if distinct < 3 {
            return Err(PlannerError::InvalidPolygon { distinct });
        }

        let start = westernmost_index(open);
        let mut rotated = Vec::with_capacity(open.len());
        rotated.extend_from_slice(&open[start..]);
        rotated.extend_from_slice(&open[..start]);

        Ok(Self { vertices: rotated })
    }

    /// Vertices in ring order, canonical start first, without a closing repeat.
    pub fn vertices(&self) -> &[Vector2d] {
        &self.vertices
    }

    /// The sweep anchor: the vertex with the minimum x.
    pub fn start(&self) -> Vector2d {
        self.vertices[0]
    }

    /// Edges `v[i] -> v[i + 1]`, wrapping back to the start.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment2d> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| LineSegment2d::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn into_vertices(self) -> Vec<Vector2d> {
        self.vertices
    }
}

/// First strictly-smaller x wins, so ties keep the earliest candidate.
fn westernmost_index(vertices: &[Vector2d]) -> usize {
    let mut best = 0;
    for (i, vertex) in vertices.iter().enumerate().skip(1) {
        if vertex.x < vertices[best].x {
            best = i;
        }
    }
    best
}

fn count_distinct(vertices: &[Vector2d]) -> usize {
    let mut seen: Vec<Vector2d> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        if !seen.contains(vertex) {
            seen.push(*vertex);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector2d {
        Vector2d::new(x, y)
    }

    #[test]
    fn test_drops_closing_vertex() {
        let polygon = Polygon::new(&[v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0), v(0.0, 0.0)]).unwrap();
        assert_eq!(polygon.vertices(), &[v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)]);
    }

    #[test]
    fn test_rotates_westernmost_first() {
        let input = [v(2.0, 0.0), v(3.0, 1.0), v(-1.0, 2.0), v(1.0, 3.0)];
        let polygon = Polygon::new(&input).unwrap();
        assert_eq!(polygon.start(), v(-1.0, 2.0));
        assert_eq!(
            polygon.vertices(),
            &[v(-1.0, 2.0), v(1.0, 3.0), v(2.0, 0.0), v(3.0, 1.0)]
        );
        // caller input untouched
        assert_eq!(input[0], v(2.0, 0.0));
    }

    #[test]
    fn test_tie_keeps_first_candidate() {
        let polygon = Polygon::new(&[v(1.0, 0.0), v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)]).unwrap();
        assert_eq!(polygon.start(), v(0.0, 0.0));
    }

    #[test]
    fn test_too_few_vertices() {
        assert_eq!(Polygon::new(&[]), Err(PlannerError::InvalidPolygon { distinct: 0 }));
        assert_eq!(
            Polygon::new(&[v(0.0, 0.0), v(1.0, 1.0)]),
            Err(PlannerError::InvalidPolygon { distinct: 2 })
        );
        // a closed triangle with only two distinct points
        assert_eq!(
            Polygon::new(&[v(0.0, 0.0), v(1.0, 1.0), v(0.0, 0.0)]),
            Err(PlannerError::InvalidPolygon { distinct: 2 })
        );
        assert_eq!(
            Polygon::new(&[v(0.0, 0.0), v(1.0, 1.0), v(1.0, 1.0), v(0.0, 0.0)]),
            Err(PlannerError::InvalidPolygon { distinct: 2 })
        );
    }

    #[test]
    fn test_single_vertex_is_not_a_closure() {
        assert_eq!(
            Polygon::new(&[v(0.0, 0.0)]),
            Err(PlannerError::InvalidPolygon { distinct: 1 })
        );
    }

    #[test]
    fn test_non_finite_vertex() {
        assert_eq!(
            Polygon::new(&[v(0.0, 0.0), v(f64::NAN, 1.0), v(1.0, 1.0)]),
            Err(PlannerError::NonFiniteCoordinate { index: 1 })
        );
    }

    #[test]
    fn test_edges_wrap() {
        let polygon = Polygon::new(&[v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0)]).unwrap();
        let edges: Vec<_> = polygon.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], LineSegment2d::new(v(1.0, 1.0), v(0.0, 0.0)));
    }
}
