//! coverage-planner core
//!
//! Boustrophedon coverage paths over a drawn survey polygon, aligned with
//! an environmental drift and spaced by the sensor swath.

pub mod error;
pub mod vector;
pub mod line;
pub mod segment;
pub mod polygon;
pub mod haversine;
pub mod params;
pub mod planner;
pub mod traits;
pub mod session;
