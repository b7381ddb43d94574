use crate::snapshot::DashboardSnapshot;
use fair_core::portfolio::AssetPortfolio;
use fair_core::report::DashboardReport;
use fair_core::selections::ThreatSelections;
use fair_core::threat_ability::ThreatAbilityWeights;
use loss_guards::{generate_risk_report, ExposureEnvelope, LossSelection, TotalRisk};
use threat_guards::{generate_threat_report, TefEnvelope};

/// The one mutable thing in the system: what the user currently has
/// selected. The scoring crates only ever see borrows of this; every
/// derived number comes out of [`DashboardState::snapshot`].
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub threat: ThreatSelections,
    pub weights: ThreatAbilityWeights,
    pub portfolio: AssetPortfolio,
    losses: LossSelection,
    lef: f64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            threat: ThreatSelections::default(),
            weights: ThreatAbilityWeights::default(),
            portfolio: AssetPortfolio::default_for_assessment(),
            losses: LossSelection::default(),
            lef: 1.0,
        }
    }
}

impl DashboardState {
    /// Flips a secondary-loss checkbox; returns whether it is now selected.
    pub fn toggle_loss(&mut self, name: &str) -> bool {
        self.losses.toggle(name)
    }

    pub fn selected_losses(&self) -> &LossSelection {
        &self.losses
    }

    pub fn lef(&self) -> f64 {
        self.lef
    }

    /// Non-finite values would poison every downstream product, so they are
    /// coerced to 0 here, at the boundary, before the engine sees them.
    pub fn set_lef(&mut self, lef: f64) {
        self.lef = if lef.is_finite() { lef } else { 0.0 };
    }

    /// Accepts the raw text of the LEF entry field. Anything that does not
    /// parse as a finite number becomes 0. Returns the stored value.
    pub fn enter_lef(&mut self, raw: &str) -> f64 {
        let parsed = raw.trim().parse::<f64>().unwrap_or(0.0);
        self.set_lef(parsed);
        self.lef
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let threat = TefEnvelope::from_selections(self.weights, &self.threat);
        let exposure = ExposureEnvelope::from_portfolio(&self.portfolio);
        let slm = self.losses.total_slm(&self.portfolio);
        let risk = TotalRisk::compute(self.lef, exposure.primary_loss_magnitude, slm);

        DashboardSnapshot {
            threat,
            exposure,
            secondary_loss_magnitude: slm,
            loss_event_frequency: self.lef,
            total_risk: risk.total,
        }
    }

    pub fn reports(&self) -> Vec<DashboardReport> {
        vec![
            generate_threat_report(&self.threat),
            generate_risk_report(&self.portfolio, &self.losses, self.lef),
        ]
    }
}
