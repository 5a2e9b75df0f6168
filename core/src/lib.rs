//! Call-center staffing from the Erlang C queueing model.
//!
//! EVALUATION ORDER (leaf first):
//!   1. Traffic model      — calls/hour + handle time → offered load (Erlangs)
//!   2. Erlang C engine    — wait probability, service level, agent search
//!   3. Shrinkage          — on-phone agents → paid headcount (FTE)
//!   4. Calculator         — the composite entry point wiring 1–3 together
//!
//! RULES:
//!   - Every operation is a pure function of its inputs. No shared state.
//!   - Invalid inputs are rejected, never silently clamped.
//!   - Only intermediate floating-point results are clamped to [0, 1].

pub mod calculator;
pub mod config;
pub mod erlang_c;
pub mod error;
pub mod scenario;
pub mod shrinkage;
pub mod target;
pub mod traffic;
pub mod types;

pub use calculator::{calculate_required_agents, StaffingCalculator, StaffingRequest, StaffingResult};
pub use error::{EngineResult, StaffingError};
