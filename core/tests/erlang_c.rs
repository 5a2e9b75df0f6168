//! Erlang C probability and service level tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use staffing_core::{
    erlang_c::{erlang_c_probability, evaluate, is_stable, service_level},
    traffic::compute_traffic,
};

const CANONICAL_A: f64 = 100.0 * 300.0 / 3600.0;

/// N ≤ A is saturated: wait probability is exactly 1 and nobody meets the target.
#[test]
fn saturated_queue_always_waits() {
    for a in [0.0_f64, 0.5, 3.0, 8.0, 8.3, 42.0, 250.0] {
        let ceiling = a.floor() as u32;
        for n in 0..=ceiling {
            assert_eq!(erlang_c_probability(a, n), 1.0, "A={a} N={n}");
            assert_eq!(service_level(a, n, 300.0, 20.0), 0.0, "A={a} N={n}");
            assert!(!is_stable(a, n));
        }
    }
}

/// Integral loads sit exactly on the boundary.
#[test]
fn agents_equal_to_load_is_unstable() {
    assert_eq!(erlang_c_probability(8.0, 8), 1.0);
    assert!(erlang_c_probability(8.0, 9) < 1.0);
}

/// The canonical scenario at 12 agents: ~18.6% of calls wait, ~85.4% answered in 20 s.
#[test]
fn canonical_wait_probability_and_service_level() {
    let p = erlang_c_probability(CANONICAL_A, 12);
    let sl = service_level(CANONICAL_A, 12, 300.0, 20.0);

    assert!((p - 0.18597).abs() < 1e-4, "P_wait = {p}");
    assert!((sl - 0.85436).abs() < 1e-4, "SL = {sl}");
}

#[test]
fn zero_target_window_leaves_only_non_waiting_calls() {
    let p = erlang_c_probability(CANONICAL_A, 12);
    let sl = service_level(CANONICAL_A, 12, 300.0, 0.0);

    assert!((sl - (1.0 - p)).abs() < 1e-12);
}

#[test]
fn zero_load_never_waits() {
    assert_eq!(erlang_c_probability(0.0, 1), 0.0);
    assert_eq!(service_level(0.0, 1, 300.0, 0.0), 1.0);
}

/// Agent counts in the hundreds and thousands must not overflow.
#[test]
fn large_agent_counts_stay_finite() {
    let p = erlang_c_probability(1000.0, 1100);
    assert!(p.is_finite() && p > 0.0 && p < 0.01, "P_wait = {p}");

    let p = erlang_c_probability(400.0, 401);
    assert!(p.is_finite() && p > 0.5 && p <= 1.0, "P_wait = {p}");
}

/// Probability and service level stay inside [0, 1] for random valid inputs.
#[test]
fn outputs_bounded_for_random_inputs() {
    let mut rng = Pcg64Mcg::seed_from_u64(42);
    for _ in 0..2_000 {
        let a: f64 = rng.gen_range(0.0..300.0);
        let n: u32 = rng.gen_range(0..400);
        let aht: f64 = rng.gen_range(10.0..1200.0);
        let t: f64 = rng.gen_range(0.0..120.0);

        let p = erlang_c_probability(a, n);
        let sl = service_level(a, n, aht, t);
        assert!((0.0..=1.0).contains(&p), "P_wait={p} for A={a} N={n}");
        assert!((0.0..=1.0).contains(&sl), "SL={sl} for A={a} N={n}");
    }
}

/// For fixed load, adding agents never lowers the service level.
#[test]
fn service_level_non_decreasing_in_agents() {
    let mut rng = Pcg64Mcg::seed_from_u64(7);
    for _ in 0..300 {
        let a: f64 = rng.gen_range(0.0..200.0);
        let aht: f64 = rng.gen_range(30.0..900.0);
        let t: f64 = rng.gen_range(0.0..60.0);

        let mut previous = 0.0;
        for n in 1..(a as u32 + 60) {
            let sl = service_level(a, n, aht, t);
            assert!(
                sl >= previous - 1e-12,
                "SL dropped from {previous} to {sl} at A={a} N={n}"
            );
            previous = sl;
        }
    }
}

#[test]
fn wait_probability_non_increasing_in_agents() {
    let mut previous = 1.0;
    for n in 1..120 {
        let p = erlang_c_probability(CANONICAL_A * 6.0, n);
        assert!(p <= previous + 1e-12, "P_wait rose to {p} at N={n}");
        previous = p;
    }
}

#[test]
fn evaluation_reports_all_fields() {
    let traffic = compute_traffic(100.0, 5.0).unwrap();
    let eval = evaluate(&traffic, 12, 20.0);

    assert_eq!(eval.agent_count, 12);
    assert!(eval.is_stable);
    assert!((eval.occupancy - CANONICAL_A / 12.0).abs() < 1e-12);
    assert!((eval.probability_of_wait - erlang_c_probability(CANONICAL_A, 12)).abs() < 1e-15);
    assert!((eval.service_level - service_level(CANONICAL_A, 12, 300.0, 20.0)).abs() < 1e-15);

    let saturated = evaluate(&traffic, 8, 20.0);
    assert!(!saturated.is_stable);
    assert_eq!(saturated.probability_of_wait, 1.0);
    assert_eq!(saturated.service_level, 0.0);
}
