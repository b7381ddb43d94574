use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TotalRisk {
    pub loss_event_frequency: f64,
    pub primary_loss_magnitude: f64,
    pub secondary_loss_magnitude: f64,
    pub total: f64,
}

impl TotalRisk {
    /// Risk = LEF x PLM + SLM. LEF here is the manually entered multiplier
    /// from the risk page, not the TEF computed on the threat-actor page;
    /// the two are reported side by side and deliberately not unified.
    pub fn compute(
        loss_event_frequency: f64,
        primary_loss_magnitude: f64,
        secondary_loss_magnitude: f64,
    ) -> Self {
        Self {
            loss_event_frequency,
            primary_loss_magnitude,
            secondary_loss_magnitude,
            total: loss_event_frequency * primary_loss_magnitude + secondary_loss_magnitude,
        }
    }
}
