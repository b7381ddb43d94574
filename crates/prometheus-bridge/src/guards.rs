use crate::metrics::DashboardMetrics;
use dashboard_state::DashboardSnapshot;

/// Mirrors the after-snapshot into the gauges and reports whether total
/// risk went up relative to the snapshot the UI rendered last. The page
/// highlights the total in red when this returns true.
pub fn flag_total_risk_increase(
    metrics: &DashboardMetrics,
    assessment: &str,
    before: &DashboardSnapshot,
    after: &DashboardSnapshot,
) -> bool {
    metrics.observe_snapshot(assessment, after);
    after.total_risk > before.total_risk
}
