//! Mission parameters supplied alongside the survey region.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result, ensure_positive};

/// Operating parameters for one survey mission.
///
/// Always travels as a unit: a caller either has all three values or none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionParams {
    /// Operating altitude in metres; sets the scan swath.
    #[serde(rename = "altitude_metres")]
    pub altitude_m: f64,
    /// Cruise speed over ground in metres per second.
    pub cruise_speed_mps: f64,
    /// Heading of the drift (e.g. water current), degrees clockwise from north.
    #[serde(rename = "drift_heading_degrees")]
    pub drift_heading_deg: f64,
}

impl MissionParams {
    pub fn new(altitude_m: f64, cruise_speed_mps: f64, drift_heading_deg: f64) -> Result<Self> {
        let params = Self {
            altitude_m,
            cruise_speed_mps,
            drift_heading_deg,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks ranges. Deserialized values bypass `new`, so the planner calls
    /// this again before use.
    pub fn validate(&self) -> Result<()> {
        ensure_positive("altitude", self.altitude_m)?;
        ensure_positive("cruise speed", self.cruise_speed_mps)?;
        if !(0.0..360.0).contains(&self.drift_heading_deg) {
            return Err(PlannerError::HeadingOutOfRange(self.drift_heading_deg));
        }
        Ok(())
    }
}

/// Ground footprint of the sensor at a given altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScanArea {
    pub length: f64,
    /// Swath across the direction of travel.
    pub width: f64,
}

impl ScanArea {
    pub fn at_altitude(altitude_m: f64, swath_factor: f64) -> Self {
        let side = swath_factor * altitude_m;
        Self {
            length: side,
            width: side,
        }
    }
}
