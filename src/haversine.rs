//! Geodesic helpers for small survey regions.
//!
//! Points are [`Vector2d`] with `x = longitude`, `y = latitude` in degrees.
//! The metre/degree conversion assumes a locally flat earth and is not
//! valid near the poles or across the antimeridian.

use crate::vector::Vector2d;

/// Mean earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate metres per degree of latitude.
const METRES_PER_DEGREE: f64 = 111_111.0;

/// Convert a ground distance into planar degree units at a reference latitude.
///
/// Blends the latitude and longitude scales, `sqrt(1 + cos²(lat))`, so a
/// step is roughly the requested distance whichever way it points.
pub fn metres_to_degrees(distance_m: f64, reference_latitude_deg: f64) -> f64 {
    let cos_lat = reference_latitude_deg.to_radians().cos();
    distance_m / METRES_PER_DEGREE * (1.0 + cos_lat.powi(2)).sqrt()
}

/// Great-circle distance in metres between two geographic points.
pub fn haversine_metres(from: Vector2d, to: Vector2d, earth_radius_m: f64) -> f64 {
    let lat1_rad = from.y.to_radians();
    let lat2_rad = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lng = (to.x - from.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    earth_radius_m * c
}

/// Sum of great-circle legs along a path, in metres.
pub fn path_length_metres(path: &[Vector2d], earth_radius_m: f64) -> f64 {
    path.windows(2)
        .map(|leg| haversine_metres(leg[0], leg[1], earth_radius_m))
        .sum()
}
