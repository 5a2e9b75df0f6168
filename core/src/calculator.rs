//! Composite staffing calculator — the programmatic entry point.
//!
//! traffic → minimum agents for the target → shrinkage → StaffingResult.
//! Inputs are validated up front so a bad shrinkage value fails before
//! any search runs.

use crate::{
    config::CalculatorConfig,
    erlang_c::{minimum_agents_for_target, occupancy},
    error::EngineResult,
    shrinkage::ShrinkagePolicy,
    target::ServiceLevelTarget,
    traffic::compute_traffic,
    types::{AgentCount, Erlangs},
};
use serde::{Deserialize, Serialize};

/// One staffing recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingResult {
    /// Agents needed on the phones.
    pub required_agents:        AgentCount,
    /// Paid headcount once shrinkage is covered.
    pub required_fte:           AgentCount,
    /// Fraction in [0, 1]; see [`service_level_pct`](Self::service_level_pct).
    pub achieved_service_level: f64,
    pub shrinkage_pct:          f64,
    pub occupancy:              f64,
    pub traffic_intensity:      Erlangs,
    pub calls_per_hour:         f64,
    pub aht_minutes:            f64,
    pub target:                 ServiceLevelTarget,
}

impl StaffingResult {
    pub fn service_level_pct(&self) -> f64 { self.achieved_service_level * 100.0 }
    pub fn occupancy_pct(&self) -> f64 { self.occupancy * 100.0 }
    pub fn shrinkage_display_pct(&self) -> f64 { self.shrinkage_pct * 100.0 }
}

/// Input record of the entry point, as supplied by callers over JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffingRequest {
    pub calls_per_hour:           f64,
    pub aht_minutes:              f64,
    pub target_service_level_pct: f64,
    pub target_seconds:           f64,
    /// Falls back to the configured default when absent.
    #[serde(default)]
    pub shrinkage_pct:            Option<f64>,
}

pub struct StaffingCalculator {
    config:    CalculatorConfig,
    shrinkage: ShrinkagePolicy,
}

impl Default for StaffingCalculator {
    fn default() -> Self {
        Self {
            config:    CalculatorConfig::default(),
            shrinkage: ShrinkagePolicy::default(),
        }
    }
}

impl StaffingCalculator {
    pub fn new(config: CalculatorConfig) -> EngineResult<Self> {
        config.validate()?;
        let shrinkage = config.shrinkage_policy()?;
        Ok(Self { config, shrinkage })
    }

    pub fn config(&self) -> &CalculatorConfig { &self.config }

    pub fn calculate(
        &self,
        calls_per_hour: f64,
        aht_minutes: f64,
        target_service_level_pct: f64,
        target_seconds: f64,
        shrinkage_pct: f64,
    ) -> EngineResult<StaffingResult> {
        let target = ServiceLevelTarget::from_percent(target_service_level_pct, target_seconds)?;
        self.calculate_for_target(calls_per_hour, aht_minutes, &target, shrinkage_pct)
    }

    pub fn calculate_request(&self, request: &StaffingRequest) -> EngineResult<StaffingResult> {
        self.calculate(
            request.calls_per_hour,
            request.aht_minutes,
            request.target_service_level_pct,
            request.target_seconds,
            request.shrinkage_pct.unwrap_or(self.config.default_shrinkage_pct),
        )
    }

    pub(crate) fn calculate_for_target(
        &self,
        calls_per_hour: f64,
        aht_minutes: f64,
        target: &ServiceLevelTarget,
        shrinkage_pct: f64,
    ) -> EngineResult<StaffingResult> {
        let traffic = compute_traffic(calls_per_hour, aht_minutes)?;
        let shrinkage_pct = self.shrinkage.validate(shrinkage_pct)?;
        let a = traffic.traffic_intensity_erlangs();

        let search = minimum_agents_for_target(
            a,
            traffic.aht_seconds(),
            target,
            self.config.max_agents,
        )?;
        let required_fte = self.shrinkage.apply(search.required_agents, shrinkage_pct)?;

        log::debug!(
            "{calls_per_hour} calls/h, AHT {aht_minutes} min, {target}: {} agents, {required_fte} FTE",
            search.required_agents
        );

        Ok(StaffingResult {
            required_agents: search.required_agents,
            required_fte,
            achieved_service_level: search.achieved_service_level,
            shrinkage_pct,
            occupancy: occupancy(a, search.required_agents),
            traffic_intensity: a,
            calls_per_hour: traffic.calls_per_hour(),
            aht_minutes: traffic.aht_minutes(),
            target: *target,
        })
    }
}

impl StaffingRequest {
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Evaluate one scenario under the default configuration.
///
/// `target_service_level_pct` is a percentage (80 means 80%);
/// `shrinkage_pct` is a fraction (0.30 means 30%).
pub fn calculate_required_agents(
    calls_per_hour: f64,
    aht_minutes: f64,
    target_service_level_pct: f64,
    target_seconds: f64,
    shrinkage_pct: f64,
) -> EngineResult<StaffingResult> {
    StaffingCalculator::default().calculate(
        calls_per_hour,
        aht_minutes,
        target_service_level_pct,
        target_seconds,
        shrinkage_pct,
    )
}

