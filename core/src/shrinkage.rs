//! Shrinkage — on-phone agents to paid headcount.
//!
//! FTE = ⌈agents / (1 − shrinkage)⌉. Partial heads cannot take calls, so
//! the result always rounds up.

use crate::{
    error::{require_finite, EngineResult, StaffingError},
    types::AgentCount,
};

/// Division drift allowance, in ULPs of the quotient. An exact quotient like
/// 10.000000000000002 stays 10; anything genuinely fractional still rounds up.
const FTE_ROUNDING_ULPS: f64 = 4.0;

/// Validation rule for shrinkage inputs.
///
/// Shrinkage must always be in [0, 1). `max_shrinkage_pct` adds an optional
/// business sanity bound below 1; at 1.0 only the hard limit applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkagePolicy {
    max_shrinkage_pct: f64,
}

impl Default for ShrinkagePolicy {
    fn default() -> Self {
        Self { max_shrinkage_pct: 1.0 }
    }
}

impl ShrinkagePolicy {
    pub fn new(max_shrinkage_pct: f64) -> EngineResult<Self> {
        let max_shrinkage_pct = require_finite("max_shrinkage_pct", max_shrinkage_pct)?;
        if max_shrinkage_pct <= 0.0 || max_shrinkage_pct > 1.0 {
            return Err(StaffingError::invalid(
                "max_shrinkage_pct",
                max_shrinkage_pct,
                "must be in (0, 1]",
            ));
        }
        Ok(Self { max_shrinkage_pct })
    }

    pub fn max_shrinkage_pct(&self) -> f64 { self.max_shrinkage_pct }

    pub fn validate(&self, shrinkage_pct: f64) -> EngineResult<f64> {
        let s = require_finite("shrinkage_pct", shrinkage_pct)?;
        if !(0.0..1.0).contains(&s) {
            return Err(StaffingError::invalid("shrinkage_pct", s, "must be in [0, 1)"));
        }
        if self.max_shrinkage_pct < 1.0 && s > self.max_shrinkage_pct {
            return Err(StaffingError::invalid(
                "shrinkage_pct",
                s,
                "exceeds the configured shrinkage limit",
            ));
        }
        Ok(s)
    }

    pub fn apply(&self, required_agents: AgentCount, shrinkage_pct: f64) -> EngineResult<AgentCount> {
        let s = self.validate(shrinkage_pct)?;
        let raw = f64::from(required_agents) / (1.0 - s);
        let fte = (raw - raw * f64::EPSILON * FTE_ROUNDING_ULPS).ceil() as AgentCount;
        Ok(fte.max(required_agents))
    }
}

/// Round `required_agents` up to paid headcount under the hard [0, 1) rule only.
pub fn apply_shrinkage(required_agents: AgentCount, shrinkage_pct: f64) -> EngineResult<AgentCount> {
    ShrinkagePolicy::default().apply(required_agents, shrinkage_pct)
}
