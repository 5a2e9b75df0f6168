//! Erlang C engine — M/M/N queue with infinite capacity.
//!
//! Given offered load A (Erlangs) and N agents:
//!   - N ≤ A is saturated: every call waits, nobody is answered in time.
//!   - N > A has a steady state; wait probability comes from Erlang C and
//!     the service level from the exponential waiting-time tail.
//!
//! The agent search walks N upward from the first stable count. Service
//! level is non-decreasing in N for fixed A, so the first hit is the minimum.

use crate::{
    error::{require_finite, EngineResult, StaffingError},
    target::ServiceLevelTarget,
    traffic::TrafficInput,
    types::{AgentCount, Erlangs},
};
use serde::Serialize;

/// Partial sums above this are folded back to 1.0 so A^k/k! never overflows.
const RESCALE_THRESHOLD: f64 = 1e250;

/// Outcome of evaluating one `(A, AHT, N)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StaffingEvaluation {
    pub agent_count:         AgentCount,
    pub probability_of_wait: f64,
    pub service_level:       f64,
    /// A / N, the fraction of agent time spent on calls.
    pub occupancy:           f64,
    pub is_stable:           bool,
}

/// Smallest agent count reaching a target, with the level it achieves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgentSearch {
    pub required_agents:        AgentCount,
    pub achieved_service_level: f64,
}

pub fn is_stable(traffic_intensity: Erlangs, agent_count: AgentCount) -> bool {
    f64::from(agent_count) > traffic_intensity
}

/// Running state of the term recurrence for one load.
///
/// After `advance_to(n)`: `term` = A^n/n! and `partial` = Σ_{k<n} A^k/k!,
/// both divided by the same scale factor. Walking N upward reuses the work
/// already done for smaller N.
struct WaitRecurrence {
    a:       Erlangs,
    k:       AgentCount,
    term:    f64,
    partial: f64,
}

impl WaitRecurrence {
    fn new(traffic_intensity: Erlangs) -> Self {
        Self { a: traffic_intensity, k: 0, term: 1.0, partial: 0.0 }
    }

    fn advance_to(&mut self, n: AgentCount) {
        while self.k < n {
            self.k += 1;
            self.partial += self.term;
            self.term *= self.a / f64::from(self.k);
            if self.partial > RESCALE_THRESHOLD {
                self.term /= self.partial;
                self.partial = 1.0;
            }
        }
    }

    /// Wait probability at N. Calls must come with non-decreasing N.
    fn probability(&mut self, agent_count: AgentCount) -> f64 {
        if !is_stable(self.a, agent_count) {
            return 1.0;
        }
        debug_assert!(agent_count >= self.k, "recurrence cannot walk backwards");
        self.advance_to(agent_count);

        // (A^N/N!) / Σ_{k<N} A^k/k!, then the Erlang C step.
        let erlang_b = self.term / self.partial;
        let occupancy = self.a / f64::from(agent_count);
        let p_wait = erlang_b / (1.0 - occupancy * (1.0 - erlang_b));
        p_wait.clamp(0.0, 1.0)
    }
}

/// Probability that an arriving call has to queue.
///
/// Returns exactly 1.0 for a saturated system (N ≤ A).
pub fn erlang_c_probability(traffic_intensity: Erlangs, agent_count: AgentCount) -> f64 {
    WaitRecurrence::new(traffic_intensity).probability(agent_count)
}

/// Fraction of calls answered within `target_seconds`.
///
/// SL = 1 − P_wait · exp(−(N − A) · T / AHT); 0 when the queue is saturated.
pub fn service_level(
    traffic_intensity: Erlangs,
    agent_count: AgentCount,
    aht_seconds: f64,
    target_seconds: f64,
) -> f64 {
    let p_wait = erlang_c_probability(traffic_intensity, agent_count);
    service_level_from(p_wait, traffic_intensity, agent_count, aht_seconds, target_seconds)
}

fn service_level_from(
    p_wait: f64,
    traffic_intensity: Erlangs,
    agent_count: AgentCount,
    aht_seconds: f64,
    target_seconds: f64,
) -> f64 {
    if !is_stable(traffic_intensity, agent_count) {
        return 0.0;
    }
    let headroom = f64::from(agent_count) - traffic_intensity;
    let sl = 1.0 - p_wait * (-headroom * target_seconds / aht_seconds).exp();
    sl.clamp(0.0, 1.0)
}

pub fn occupancy(traffic_intensity: Erlangs, agent_count: AgentCount) -> f64 {
    if agent_count == 0 {
        return 0.0;
    }
    traffic_intensity / f64::from(agent_count)
}

pub fn evaluate(
    traffic: &TrafficInput,
    agent_count: AgentCount,
    target_seconds: f64,
) -> StaffingEvaluation {
    let a = traffic.traffic_intensity_erlangs();
    StaffingEvaluation {
        agent_count,
        probability_of_wait: erlang_c_probability(a, agent_count),
        service_level: service_level(a, agent_count, traffic.aht_seconds(), target_seconds),
        occupancy: occupancy(a, agent_count),
        is_stable: is_stable(a, agent_count),
    }
}

/// Default search ceiling: ⌈10·A + 100⌉ agents.
pub fn default_search_bound(traffic_intensity: Erlangs) -> AgentCount {
    // `as` saturates, so absurd loads cap at u32::MAX instead of wrapping.
    (traffic_intensity * 10.0 + 100.0).ceil() as AgentCount
}

/// First agent count with a steady state: ⌊A⌋ + 1.
pub fn first_stable_count(traffic_intensity: Erlangs) -> AgentCount {
    (traffic_intensity.floor() as AgentCount).saturating_add(1)
}

/// Linear search for the fewest agents meeting `target`.
///
/// Zero offered load needs zero agents and trivially meets any target.
pub fn minimum_agents_for_target(
    traffic_intensity: Erlangs,
    aht_seconds: f64,
    target: &ServiceLevelTarget,
    max_agents_search_bound: Option<AgentCount>,
) -> EngineResult<AgentSearch> {
    let a = require_finite("traffic_intensity", traffic_intensity)?;
    if a < 0.0 {
        return Err(StaffingError::invalid(
            "traffic_intensity",
            a,
            "must not be negative",
        ));
    }
    let aht_seconds = require_finite("aht_seconds", aht_seconds)?;
    if aht_seconds <= 0.0 {
        return Err(StaffingError::invalid(
            "aht_seconds",
            aht_seconds,
            "must be positive",
        ));
    }

    if a == 0.0 {
        log::debug!("zero offered load: 0 agents required");
        return Ok(AgentSearch { required_agents: 0, achieved_service_level: 1.0 });
    }

    let bound = max_agents_search_bound.unwrap_or_else(|| default_search_bound(a));
    let fraction = target.target_fraction();
    let window = target.target_seconds();
    let mut recurrence = WaitRecurrence::new(a);
    let mut best_service_level: f64 = 0.0;
    let mut best_probability_of_wait: f64 = 1.0;

    for n in first_stable_count(a)..=bound {
        let p_wait = recurrence.probability(n);
        let sl = service_level_from(p_wait, a, n, aht_seconds, window);
        log::trace!("A={a:.3} N={n} P_wait={p_wait:.3e} SL={sl:.4}");
        // With no answer window SL is exactly 1 − P_wait; test P_wait itself so
        // the complement cannot round up to 1.0.
        let met = if window == 0.0 {
            p_wait <= 1.0 - fraction
        } else {
            sl >= fraction
        };
        if met {
            log::debug!("A={a:.3} target={target}: {n} agents (SL={sl:.4})");
            return Ok(AgentSearch { required_agents: n, achieved_service_level: sl });
        }
        best_service_level = best_service_level.max(sl);
        best_probability_of_wait = best_probability_of_wait.min(p_wait);
    }

    log::warn!("A={a:.3} target={target}: no agent count up to {bound} meets the target");
    Err(StaffingError::SearchExhausted {
        traffic_intensity: a,
        bound,
        best_service_level,
        best_probability_of_wait,
    })
}
