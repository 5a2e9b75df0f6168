//! Multi-scenario evaluation: SLA comparisons and per-period profiles.
//!
//! Every scenario is computed independently; nothing is shared between them.

use crate::{
    calculator::{StaffingCalculator, StaffingResult},
    error::{EngineResult, StaffingError},
    target::ServiceLevelTarget,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaComparison {
    pub name:   String,
    pub result: StaffingResult,
}

/// Cost of moving from one SLA to another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FteDelta {
    pub extra_fte:    i64,
    pub pct_increase: f64,
}

/// Forecast for one period (an hour of the day, a weekday bucket, ...),
/// supplied by the upstream aggregation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodForecast {
    pub label:          String,
    pub calls_per_hour: f64,
    pub aht_minutes:    f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStaffing {
    pub label:  String,
    pub result: StaffingResult,
}

impl StaffingCalculator {
    /// Evaluate every configured SLA scenario, in configuration order.
    ///
    /// Scenarios that cannot be met within the search bound are left out.
    pub fn compare_service_levels(
        &self,
        calls_per_hour: f64,
        aht_minutes: f64,
        shrinkage_pct: f64,
    ) -> EngineResult<Vec<SlaComparison>> {
        let mut comparisons = Vec::with_capacity(self.config().sla_scenarios.len());
        for scenario in &self.config().sla_scenarios {
            let target = scenario.target()?;
            match self.calculate_for_target(calls_per_hour, aht_minutes, &target, shrinkage_pct) {
                Ok(result) => comparisons.push(SlaComparison {
                    name: scenario.name.clone(),
                    result,
                }),
                Err(e @ StaffingError::SearchExhausted { .. }) => {
                    log::warn!("skipping SLA scenario {}: {e}", scenario.name);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(comparisons)
    }

    /// Staff each period against the same target. Stops at the first failure.
    pub fn calculate_profile(
        &self,
        periods: &[PeriodForecast],
        target_service_level_pct: f64,
        target_seconds: f64,
        shrinkage_pct: f64,
    ) -> EngineResult<Vec<PeriodStaffing>> {
        let target = ServiceLevelTarget::from_percent(target_service_level_pct, target_seconds)?;
        periods
            .iter()
            .map(|period| -> EngineResult<PeriodStaffing> {
                log::debug!("staffing period {}", period.label);
                let result = self.calculate_for_target(
                    period.calls_per_hour,
                    period.aht_minutes,
                    &target,
                    shrinkage_pct,
                )?;
                Ok(PeriodStaffing { label: period.label.clone(), result })
            })
            .collect()
    }
}

pub fn find_comparison<'a>(comparisons: &'a [SlaComparison], name: &str) -> Option<&'a SlaComparison> {
    comparisons.iter().find(|c| c.name == name)
}

/// Extra FTE going from scenario `from` to scenario `to`.
/// `None` if either scenario is missing or `from` needs no staff.
pub fn fte_delta(comparisons: &[SlaComparison], from: &str, to: &str) -> Option<FteDelta> {
    let base = find_comparison(comparisons, from)?.result.required_fte;
    let next = find_comparison(comparisons, to)?.result.required_fte;
    if base == 0 {
        return None;
    }
    let extra_fte = i64::from(next) - i64::from(base);
    Some(FteDelta {
        extra_fte,
        pct_increase: extra_fte as f64 / f64::from(base) * 100.0,
    })
}
