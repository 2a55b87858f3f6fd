//! Test fixtures for coverage-planner.
//!
//! Provides survey regions drawn over real water bodies plus a few
//! hand-made shapes with known geometry.

pub mod survey_regions;

pub use survey_regions::*;
