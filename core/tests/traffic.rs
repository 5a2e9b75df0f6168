//! Traffic model tests.

use staffing_core::traffic::{compute_traffic, TrafficInput};

/// 100 calls/hour at 5 minutes each is 8⅓ Erlangs.
#[test]
fn traffic_intensity_from_minutes() {
    let traffic = compute_traffic(100.0, 5.0).unwrap();

    assert_eq!(traffic.aht_seconds(), 300.0);
    assert!((traffic.traffic_intensity_erlangs() - 25.0 / 3.0).abs() < 1e-12);
    assert!((traffic.aht_minutes() - 5.0).abs() < 1e-12);
}

#[test]
fn zero_calls_is_zero_load() {
    let traffic = compute_traffic(0.0, 4.0).unwrap();

    assert_eq!(traffic.traffic_intensity_erlangs(), 0.0);
}

#[test]
fn negative_calls_rejected() {
    let err = compute_traffic(-1.0, 5.0).unwrap_err();
    assert!(err.is_invalid_input(), "unexpected error: {err}");
}

#[test]
fn non_positive_handle_time_rejected() {
    assert!(compute_traffic(100.0, 0.0).unwrap_err().is_invalid_input());
    assert!(compute_traffic(100.0, -2.5).unwrap_err().is_invalid_input());
    assert!(TrafficInput::new(100.0, 0.0).unwrap_err().is_invalid_input());
}

#[test]
fn non_finite_inputs_rejected() {
    assert!(compute_traffic(f64::NAN, 5.0).is_err());
    assert!(compute_traffic(100.0, f64::INFINITY).is_err());
}
