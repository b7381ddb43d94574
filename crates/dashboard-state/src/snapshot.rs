use loss_guards::ExposureEnvelope;
use serde::{Deserialize, Serialize};
use threat_guards::TefEnvelope;

/// Every derived score on the dashboard at one instant. Recomputed whole on
/// each interaction; nothing here is cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub threat: TefEnvelope,
    pub exposure: ExposureEnvelope,
    pub secondary_loss_magnitude: f64,
    /// The manually entered multiplier, carried next to the computed TEF so
    /// the two stay distinguishable.
    pub loss_event_frequency: f64,
    pub total_risk: f64,
}
