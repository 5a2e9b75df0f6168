//! Shared primitive types used across the calculator.

/// Offered traffic intensity. One Erlang = one call occupying one agent continuously.
pub type Erlangs = f64;

/// A whole number of agents, on the phones or on the payroll.
pub type AgentCount = u32;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
