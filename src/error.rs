//! Planner error types.

/// Input validation failures raised before a sweep starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlannerError {
    #[error("polygon needs at least 3 distinct vertices, got {distinct}")]
    InvalidPolygon { distinct: usize },

    #[error("zero-length vector has no perpendicular")]
    DegenerateVector,

    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    #[error("drift heading must be in [0, 360) degrees, got {0}")]
    HeadingOutOfRange(f64),

    #[error("polygon vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("sweep exceeded {limit} scan rows")]
    ScanRowLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Rejects zero, negative, and non-finite values.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PlannerError::NonPositiveParameter { name, value })
    }
}
