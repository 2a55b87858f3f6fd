//! Boustrophedon coverage planner.
//!
//! Scan rows run parallel to the drift so each pass is flown with or
//! against the current. Rows are spaced one scan swath apart, starting half
//! a swath from the westernmost vertex and sweeping outwards on both sides
//! until a row no longer touches the polygon.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{PlannerError, Result, ensure_positive};
use crate::haversine::{EARTH_RADIUS_M, haversine_metres, metres_to_degrees, path_length_metres};
use crate::line::Line2d;
use crate::params::{MissionParams, ScanArea};
use crate::polygon::Polygon;
use crate::vector::Vector2d;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Scan swath per metre of altitude.
    pub swath_factor: f64,
    /// Earth radius used for time estimates, in metres.
    pub earth_radius_m: f64,
    /// Upper bound on scan rows per plan.
    pub max_scan_rows: usize,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            swath_factor: 1.5,
            earth_radius_m: EARTH_RADIUS_M,
            max_scan_rows: 100_000,
        }
    }
}

/// Ordered waypoints plus the estimated time to fly them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoveragePathPlan {
    pub vertices: Vec<Vector2d>,
    pub estimated_time_seconds: f64,
    /// Number of scan rows the path was stitched from.
    pub rows: usize,
}

impl CoveragePathPlan {
    /// Great-circle length of the whole path in metres.
    pub fn length_metres(&self, earth_radius_m: f64) -> f64 {
        path_length_metres(&self.vertices, earth_radius_m)
    }
}

/// A planning job for [`plan_batch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRequest {
    pub region: Vec<Vector2d>,
    pub params: MissionParams,
}

/// Plan a coverage path with default options.
pub fn plan_coverage_path(
    polygon_vertices: &[Vector2d],
    cruise_speed_mps: f64,
    drift_heading_deg: f64,
    altitude_m: f64,
) -> Result<CoveragePathPlan> {
    let params = MissionParams {
        altitude_m,
        cruise_speed_mps,
        drift_heading_deg,
    };
    plan(polygon_vertices, &params, &PlannerOptions::default())
}

/// Plan a coverage path over a geographic polygon.
pub fn plan(
    polygon_vertices: &[Vector2d],
    params: &MissionParams,
    options: &PlannerOptions,
) -> Result<CoveragePathPlan> {
    params.validate()?;
    ensure_positive("swath factor", options.swath_factor)?;
    ensure_positive("earth radius", options.earth_radius_m)?;
    let polygon = Polygon::new(polygon_vertices)?;

    let scan_area = ScanArea::at_altitude(params.altitude_m, options.swath_factor);
    let scan_width = metres_to_degrees(scan_area.width, polygon.start().y);
    let drift = drift_direction(params.drift_heading_deg);

    let rows = sweep(&polygon, drift, scan_width, options.max_scan_rows)?;
    let row_count = rows.len();
    let vertices = zigzag(rows);
    let estimated_time_seconds =
        estimate_time_seconds(&vertices, params.cruise_speed_mps, options.earth_radius_m);

    debug!(
        rows = row_count,
        waypoints = vertices.len(),
        estimated_time_seconds,
        "planned coverage path"
    );

    Ok(CoveragePathPlan {
        vertices,
        estimated_time_seconds,
        rows: row_count,
    })
}

/// Plan independent missions in parallel. Results keep the request order.
pub fn plan_batch(
    requests: &[MissionRequest],
    options: &PlannerOptions,
) -> Vec<Result<CoveragePathPlan>> {
    requests
        .par_iter()
        .map(|request| plan(&request.region, &request.params, options))
        .collect()
}

/// Unit vector for a compass heading: 0° is north (+y), 90° is east (+x).
pub fn drift_direction(heading_deg: f64) -> Vector2d {
    let angle = heading_deg.to_radians();
    Vector2d::new(angle.sin(), angle.cos())
}

/// Collect the intersection rows of a family of scan lines parallel to
/// `direction`, ordered from the most negative offset to the most positive.
///
/// `scan_width` is in the polygon's own units. Each row holds the crossings
/// in edge order; rows are neither sorted along the line nor paired, so a
/// concave polygon can yield more than two points per row.
pub fn sweep(
    polygon: &Polygon,
    direction: Vector2d,
    scan_width: f64,
    max_rows: usize,
) -> Result<Vec<Vec<Vector2d>>> {
    ensure_positive("scan width", scan_width)?;
    let base = Line2d::new(polygon.start(), direction)?;
    let first = base.parallel_line_at_distance(scan_width / 2.0);

    let mut forward = Vec::new();
    let mut line = first;
    loop {
        let row = scan_row(polygon, &line);
        if row.is_empty() {
            break;
        }
        trace!(row = forward.len(), crossings = row.len(), line = %line, "forward scan row");
        forward.push(row);
        ensure_row_limit(forward.len(), max_rows)?;
        line = line.parallel_line_at_distance(scan_width);
    }

    let mut backward = Vec::new();
    line = first.parallel_line_at_distance(-scan_width);
    loop {
        let row = scan_row(polygon, &line);
        if row.is_empty() {
            break;
        }
        trace!(row = backward.len(), crossings = row.len(), line = %line, "backward scan row");
        backward.push(row);
        ensure_row_limit(forward.len() + backward.len(), max_rows)?;
        line = line.parallel_line_at_distance(-scan_width);
    }

    debug!(forward = forward.len(), backward = backward.len(), "sweep finished");

    // backward rows were collected moving away from the start; flip them so
    // the whole family reads in one perpendicular order
    backward.reverse();
    backward.extend(forward);
    Ok(backward)
}

/// Flatten rows into one path, reversing every odd row.
pub fn zigzag(rows: Vec<Vec<Vector2d>>) -> Vec<Vector2d> {
    rows.into_iter()
        .enumerate()
        .flat_map(|(i, mut row)| {
            if i % 2 == 1 {
                row.reverse();
            }
            row
        })
        .collect()
}

/// Time in seconds to fly the path's great-circle legs at a constant speed.
pub fn estimate_time_seconds(path: &[Vector2d], cruise_speed_mps: f64, earth_radius_m: f64) -> f64 {
    path.windows(2)
        .map(|leg| haversine_metres(leg[0], leg[1], earth_radius_m) / cruise_speed_mps)
        .sum()
}

fn scan_row(polygon: &Polygon, line: &Line2d) -> Vec<Vector2d> {
    polygon
        .edges()
        .filter_map(|edge| line.intersection(&edge))
        .collect()
}

fn ensure_row_limit(rows: usize, limit: usize) -> Result<()> {
    if rows > limit {
        return Err(PlannerError::ScanRowLimitExceeded { limit });
    }
    Ok(())
}
