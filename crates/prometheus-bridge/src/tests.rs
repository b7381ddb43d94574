use crate::{flag_total_risk_increase, DashboardMetrics};
use dashboard_state::DashboardState;
use prometheus::Registry;

#[test]
fn snapshot_values_land_in_gauges() {
    let registry = Registry::new();
    let metrics = DashboardMetrics::register(&registry).unwrap();

    let state = DashboardState::default();
    metrics.observe_snapshot("baseline", &state.snapshot());

    let total = metrics.total_risk.with_label_values(&["baseline"]).get();
    assert!((total - 2058.5).abs() < 1e-9);

    let tef = metrics
        .threat_event_frequency
        .with_label_values(&["baseline"])
        .get();
    assert!((tef - 0.485_714_285_714_285_7).abs() < 1e-12);
}

#[test]
fn risk_increase_is_flagged_and_observed() {
    let registry = Registry::new();
    let metrics = DashboardMetrics::register(&registry).unwrap();

    let mut state = DashboardState::default();
    let before = state.snapshot();
    state.toggle_loss("Customer Loss");
    let after = state.snapshot();

    assert!(flag_total_risk_increase(&metrics, "case-1", &before, &after));
    let observed = metrics
        .secondary_loss_magnitude
        .with_label_values(&["case-1"])
        .get();
    assert!((observed - 400.0).abs() < 1e-9);

    // Deselecting brings the total back down; no flag.
    state.toggle_loss("Customer Loss");
    let reverted = state.snapshot();
    assert!(!flag_total_risk_increase(&metrics, "case-1", &after, &reverted));
}

#[test]
fn registering_twice_in_one_registry_fails() {
    let registry = Registry::new();
    assert!(DashboardMetrics::register(&registry).is_ok());
    assert!(DashboardMetrics::register(&registry).is_err());
}
