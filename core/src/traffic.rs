//! Traffic model — forecast volume and handle time to offered load.

use crate::{
    error::{require_finite, EngineResult, StaffingError},
    types::{Erlangs, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
};
use serde::Serialize;

/// Validated call volume and handle time for one period.
///
/// Fields are private so every instance has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrafficInput {
    calls_per_hour: f64,
    aht_seconds:    f64,
}

impl TrafficInput {
    pub fn new(calls_per_hour: f64, aht_seconds: f64) -> EngineResult<Self> {
        let calls_per_hour = require_finite("calls_per_hour", calls_per_hour)?;
        let aht_seconds = require_finite("aht_seconds", aht_seconds)?;
        if calls_per_hour < 0.0 {
            return Err(StaffingError::invalid(
                "calls_per_hour",
                calls_per_hour,
                "must not be negative",
            ));
        }
        if aht_seconds <= 0.0 {
            return Err(StaffingError::invalid(
                "aht_seconds",
                aht_seconds,
                "must be positive",
            ));
        }
        Ok(Self { calls_per_hour, aht_seconds })
    }

    pub fn calls_per_hour(&self) -> f64 { self.calls_per_hour }
    pub fn aht_seconds(&self) -> f64 { self.aht_seconds }
    pub fn aht_minutes(&self) -> f64 { self.aht_seconds / SECONDS_PER_MINUTE }

    /// A = calls/hour × AHT(s) / 3600.
    pub fn traffic_intensity_erlangs(&self) -> Erlangs {
        self.calls_per_hour * self.aht_seconds / SECONDS_PER_HOUR
    }
}

/// Build a [`TrafficInput`] from a handle time given in minutes.
pub fn compute_traffic(calls_per_hour: f64, aht_minutes: f64) -> EngineResult<TrafficInput> {
    let aht_minutes = require_finite("aht_minutes", aht_minutes)?;
    if aht_minutes <= 0.0 {
        return Err(StaffingError::invalid(
            "aht_minutes",
            aht_minutes,
            "must be positive",
        ));
    }
    TrafficInput::new(calls_per_hour, aht_minutes * SECONDS_PER_MINUTE)
}
