//! Caller-owned holder for the current region, parameters and plan.

use tracing::debug;

use crate::error::Result;
use crate::params::MissionParams;
use crate::planner::{CoveragePathPlan, PlannerOptions, plan};
use crate::traits::{MissionParamsSource, PathSink, RegionSource};
use crate::vector::Vector2d;

/// Recomputes the plan whenever its inputs change.
///
/// Clearing the region also forgets the parameters, so a new region always
/// starts without a stale plan.
#[derive(Debug, Clone, Default)]
pub struct MissionSession {
    options: PlannerOptions,
    region: Option<Vec<Vector2d>>,
    params: Option<MissionParams>,
    plan: Option<CoveragePathPlan>,
}

impl MissionSession {
    pub fn new(options: PlannerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn region(&self) -> Option<&[Vector2d]> {
        self.region.as_deref()
    }

    pub fn params(&self) -> Option<&MissionParams> {
        self.params.as_ref()
    }

    pub fn plan(&self) -> Option<&CoveragePathPlan> {
        self.plan.as_ref()
    }

    pub fn set_region(&mut self, region: Option<Vec<Vector2d>>) -> Result<Option<&CoveragePathPlan>> {
        if region.is_none() {
            self.params = None;
        }
        self.region = region;
        self.replan()
    }

    pub fn set_params(&mut self, params: Option<MissionParams>) -> Result<Option<&CoveragePathPlan>> {
        self.params = params;
        self.replan()
    }

    /// Pull inputs from the sources, replan, and push the path to `sink`.
    ///
    /// On error the sink is cleared and the error returned.
    pub fn sync<R, P, S>(&mut self, regions: &R, params: &P, sink: &mut S) -> Result<()>
    where
        R: RegionSource,
        P: MissionParamsSource,
        S: PathSink,
    {
        self.region = regions.region();
        self.params = match self.region {
            Some(_) => params.mission_params(),
            None => None,
        };

        match self.replan() {
            Ok(Some(plan)) => sink.show_path(Some(plan.vertices.as_slice())),
            Ok(None) => sink.show_path(None),
            Err(err) => {
                sink.show_path(None);
                return Err(err);
            }
        }
        Ok(())
    }

    fn replan(&mut self) -> Result<Option<&CoveragePathPlan>> {
        self.plan = None;
        let (Some(region), Some(params)) = (&self.region, &self.params) else {
            debug!("mission inputs incomplete, no plan");
            return Ok(None);
        };
        let planned = plan(region, params, &self.options)?;
        Ok(Some(&*self.plan.insert(planned)))
    }
}
