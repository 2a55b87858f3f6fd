//! Survey regions as `(longitude, latitude)` vertex lists.
//!
//! Coordinates traced by hand from OpenStreetMap imagery; they only need to
//! be realistic in scale, not survey-grade.

use coverage_planner::vector::Vector2d;

/// A named region with its vertices in drawing order.
#[derive(Debug, Clone)]
pub struct Region {
    pub name: &'static str,
    pub vertices: &'static [(f64, f64)],
}

impl Region {
    pub const fn new(name: &'static str, vertices: &'static [(f64, f64)]) -> Self {
        Self { name, vertices }
    }

    pub fn points(&self) -> Vec<Vector2d> {
        self.vertices.iter().copied().map(Vector2d::from).collect()
    }

    /// Same ring, drawn starting from vertex `start`.
    pub fn rotated(&self, start: usize) -> Vec<Vector2d> {
        let mut points = self.points();
        points.rotate_left(start);
        points
    }

    /// Same ring with the first vertex repeated at the end.
    pub fn closed(&self) -> Vec<Vector2d> {
        let mut points = self.points();
        points.push(points[0]);
        points
    }
}

// ============================================================================
// Convex regions
// ============================================================================

/// Triangle over the northern basin of Lake Pupuke, Auckland.
pub const PUPUKE_TRIANGLE: Region = Region::new(
    "Lake Pupuke triangle",
    &[
        (174.7640, -36.7790),
        (174.7682, -36.7771),
        (174.7671, -36.7818),
    ],
);

/// Quadrilateral over the inner Waitematā Harbour, drawn clockwise.
pub const HARBOUR_QUAD: Region = Region::new(
    "Waitematā harbour quad",
    &[
        (174.7301, -36.8302),
        (174.7338, -36.8279),
        (174.7386, -36.8307),
        (174.7352, -36.8335),
    ],
);

/// Same harbour area drawn counter-clockwise.
pub const HARBOUR_QUAD_CCW: Region = Region::new(
    "Waitematā harbour quad (ccw)",
    &[
        (174.7301, -36.8302),
        (174.7352, -36.8335),
        (174.7386, -36.8307),
        (174.7338, -36.8279),
    ],
);

/// Small square reservoir near the equator.
pub const EQUATOR_SQUARE: Region = Region::new(
    "Equator square",
    &[
        (32.5001, 0.3001),
        (32.5001, 0.3021),
        (32.5021, 0.3021),
        (32.5021, 0.3001),
    ],
);

// ============================================================================
// Concave regions
// ============================================================================

/// U-shaped bay: two arms joined along the south.
pub const U_BAY: Region = Region::new(
    "U-shaped bay",
    &[
        (-122.4100, 37.8000),
        (-122.4100, 37.8040),
        (-122.4085, 37.8040),
        (-122.4085, 37.8015),
        (-122.4065, 37.8015),
        (-122.4065, 37.8040),
        (-122.4050, 37.8040),
        (-122.4050, 37.8000),
    ],
);

pub const CONVEX_REGIONS: &[Region] = &[PUPUKE_TRIANGLE, HARBOUR_QUAD, HARBOUR_QUAD_CCW, EQUATOR_SQUARE];
