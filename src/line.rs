//! Infinite lines used as scan rows.

use std::fmt;

use crate::error::Result;
use crate::segment::LineSegment2d;
use crate::vector::Vector2d;

/// Infinite line through `anchor` along `direction`.
///
/// The direction is kept as given (not normalized); `point_at_distance`
/// therefore steps in multiples of the direction's own length. The unit
/// normal is computed once at construction, so every derived line is
/// infallible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2d {
    anchor: Vector2d,
    direction: Vector2d,
    normal: Vector2d,
}

impl Line2d {
    /// Fails with `DegenerateVector` if `direction` is zero or non-finite.
    pub fn new(anchor: Vector2d, direction: Vector2d) -> Result<Self> {
        let normal = direction.perpendicular_unit_vector()?;
        Ok(Self {
            anchor,
            direction,
            normal,
        })
    }

    pub fn anchor(&self) -> Vector2d {
        self.anchor
    }

    pub fn direction(&self) -> Vector2d {
        self.direction
    }

    pub fn point_at_distance(&self, distance: f64) -> Vector2d {
        self.anchor + self.direction.scale(distance)
    }

    /// Line through the same anchor, with a unit direction rotated 90° CCW.
    pub fn perpendicular_line(&self) -> Line2d {
        // the perpendicular of a unit normal is the negated unit direction
        Line2d {
            anchor: self.anchor,
            direction: self.normal,
            normal: Vector2d::new(-self.normal.y, self.normal.x),
        }
    }

    /// Parallel line offset by `distance` along this line's unit normal.
    /// Negative distances offset to the other side.
    pub fn parallel_line_at_distance(&self, distance: f64) -> Line2d {
        Line2d {
            anchor: self.perpendicular_line().point_at_distance(distance),
            direction: self.direction,
            normal: self.normal,
        }
    }

    /// Intersection with a bounded segment.
    ///
    /// Returns `None` when the line is parallel to the segment or when the
    /// crossing is not strictly between the segment endpoints. A line that
    /// passes exactly through an endpoint yields no intersection.
    pub fn intersection(&self, segment: &LineSegment2d) -> Option<Vector2d> {
        let edge = segment.delta();
        let det = self.direction.cross(edge);
        if det == 0.0 {
            return None;
        }

        let to_end = segment.end - self.anchor;
        let line_alpha = to_end.cross(edge) / det;
        // measured from the segment's end back towards its start
        let segment_alpha = self.direction.cross(to_end) / det;

        if 0.0 < segment_alpha && segment_alpha < 1.0 {
            Some(self.point_at_distance(line_alpha))
        } else {
            None
        }
    }
}

impl fmt::Display for Line2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line2d( {} + α {} )", self.anchor, self.direction)
    }
}
