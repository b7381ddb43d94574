use dashboard_state::DashboardSnapshot;
use prometheus::{GaugeVec, Opts, Registry};

/// Gauge mirrors of the dashboard's derived scores, labeled by assessment
/// so several analyses can coexist in one registry.
pub struct DashboardMetrics {
    pub threat_ability: GaugeVec,
    pub threat_event_frequency: GaugeVec,
    pub primary_loss_magnitude: GaugeVec,
    pub secondary_loss_magnitude: GaugeVec,
    pub total_risk: GaugeVec,
}

impl DashboardMetrics {
    pub fn register(registry: &Registry) -> prometheus::Result<Self> {
        let threat_ability = GaugeVec::new(
            Opts::new("threat_ability", "Weighted threat ability score"),
            &["assessment"],
        )?;
        let threat_event_frequency = GaugeVec::new(
            Opts::new("threat_event_frequency", "Combined TEF score"),
            &["assessment"],
        )?;
        let primary_loss_magnitude = GaugeVec::new(
            Opts::new(
                "primary_loss_magnitude_musd",
                "Primary loss magnitude in $million",
            ),
            &["assessment"],
        )?;
        let secondary_loss_magnitude = GaugeVec::new(
            Opts::new(
                "secondary_loss_magnitude_musd",
                "Selected secondary losses in $million",
            ),
            &["assessment"],
        )?;
        let total_risk = GaugeVec::new(
            Opts::new("total_risk_musd", "Total risk in $million"),
            &["assessment"],
        )?;

        registry.register(Box::new(threat_ability.clone()))?;
        registry.register(Box::new(threat_event_frequency.clone()))?;
        registry.register(Box::new(primary_loss_magnitude.clone()))?;
        registry.register(Box::new(secondary_loss_magnitude.clone()))?;
        registry.register(Box::new(total_risk.clone()))?;

        Ok(Self {
            threat_ability,
            threat_event_frequency,
            primary_loss_magnitude,
            secondary_loss_magnitude,
            total_risk,
        })
    }

    pub fn observe_snapshot(&self, assessment: &str, snapshot: &DashboardSnapshot) {
        self.threat_ability
            .with_label_values(&[assessment])
            .set(snapshot.threat.threat_ability);
        self.threat_event_frequency
            .with_label_values(&[assessment])
            .set(snapshot.threat.tef);
        self.primary_loss_magnitude
            .with_label_values(&[assessment])
            .set(snapshot.exposure.primary_loss_magnitude);
        self.secondary_loss_magnitude
            .with_label_values(&[assessment])
            .set(snapshot.secondary_loss_magnitude);
        self.total_risk
            .with_label_values(&[assessment])
            .set(snapshot.total_risk);
    }
}
