//! Bounded line segments (polygon edges).

use serde::{Deserialize, Serialize};

use crate::vector::Vector2d;

/// An edge from `start` to `end`. Direction follows the polygon's vertex order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment2d {
    pub start: Vector2d,
    pub end: Vector2d,
}

impl LineSegment2d {
    pub const fn new(start: Vector2d, end: Vector2d) -> Self {
        Self { start, end }
    }

    /// Vector from `start` to `end`.
    pub fn delta(&self) -> Vector2d {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.delta().magnitude()
    }
}
