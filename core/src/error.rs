use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StaffingError {
    #[error("Invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field:  &'static str,
        value:  f64,
        reason: &'static str,
    },

    #[error(
        "Agent search exhausted at {bound} agents for {traffic_intensity:.3} Erlangs \
         (best service level {best_service_level:.4}, wait probability {best_probability_of_wait:.3e})"
    )]
    SearchExhausted {
        traffic_intensity:        f64,
        bound:                    u32,
        best_service_level:       f64,
        best_probability_of_wait: f64,
    },
}

impl StaffingError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidInput { field, value, reason }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    pub fn is_search_exhausted(&self) -> bool {
        matches!(self, Self::SearchExhausted { .. })
    }
}

pub type EngineResult<T> = Result<T, StaffingError>;

/// Reject NaN and infinities before any range check sees them.
pub(crate) fn require_finite(field: &'static str, value: f64) -> EngineResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(StaffingError::invalid(field, value, "must be a finite number"))
    }
}
