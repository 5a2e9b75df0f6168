//! Service level targets ("80/20" = 80% of calls answered within 20 seconds).

use crate::error::{require_finite, EngineResult, StaffingError};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ServiceLevelTarget {
    target_fraction: f64,
    /// As entered; the fraction is derived from it.
    target_pct:      f64,
    target_seconds:  f64,
}

impl ServiceLevelTarget {
    /// `target_fraction` must lie in (0, 1]; `target_seconds` must be ≥ 0.
    pub fn new(target_fraction: f64, target_seconds: f64) -> EngineResult<Self> {
        let target_fraction = require_finite("target_fraction", target_fraction)?;
        let target_seconds = require_finite("target_seconds", target_seconds)?;
        if target_fraction <= 0.0 || target_fraction > 1.0 {
            return Err(StaffingError::invalid(
                "target_fraction",
                target_fraction,
                "must be in (0, 1]",
            ));
        }
        if target_seconds < 0.0 {
            return Err(StaffingError::invalid(
                "target_seconds",
                target_seconds,
                "must not be negative",
            ));
        }
        Ok(Self {
            target_fraction,
            target_pct: target_fraction * 100.0,
            target_seconds,
        })
    }

    /// Same as [`new`](Self::new) with the fraction given as a percentage (80 → 0.80).
    pub fn from_percent(target_pct: f64, target_seconds: f64) -> EngineResult<Self> {
        let target_pct = require_finite("target_service_level_pct", target_pct)?;
        if target_pct <= 0.0 || target_pct > 100.0 {
            return Err(StaffingError::invalid(
                "target_service_level_pct",
                target_pct,
                "must be in (0, 100]",
            ));
        }
        let target = Self::new(target_pct / 100.0, target_seconds)?;
        Ok(Self { target_pct, ..target })
    }

    pub fn target_fraction(&self) -> f64 { self.target_fraction }
    pub fn target_seconds(&self) -> f64 { self.target_seconds }
    pub fn target_pct(&self) -> f64 { self.target_pct }
}

impl fmt::Display for ServiceLevelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.target_pct(), self.target_seconds)
    }
}
