//! Interfaces to the collaborators around the planner.
//!
//! The planner itself is a pure function. Region drawing, parameter entry
//! and path rendering live in the host application, which implements these
//! traits for its own types.

use crate::params::MissionParams;
use crate::vector::Vector2d;

/// Supplies the survey region as an ordered vertex list.
pub trait RegionSource {
    /// `None` means no region is drawn (or it was cleared), which is
    /// distinct from an empty vertex list.
    fn region(&self) -> Option<Vec<Vector2d>>;
}

/// Supplies mission parameters as one complete set, or nothing.
pub trait MissionParamsSource {
    fn mission_params(&self) -> Option<MissionParams>;
}

/// Receives planned paths for display.
pub trait PathSink {
    /// `None` clears any previously shown path.
    fn show_path(&mut self, path: Option<&[Vector2d]>);
}
