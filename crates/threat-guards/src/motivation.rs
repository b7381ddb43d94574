use fair_core::selections::ThreatSelections;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MotivationEnvelope {
    pub financial_gain: f64,
    pub notoriety: f64,
    /// Sum of the two dimension scores, in [0, 1]. The dashboard has always
    /// titled this card "Average Motivation Score"; the title stays, the
    /// arithmetic is a sum.
    pub combined: f64,
}

impl MotivationEnvelope {
    pub fn from_selections(s: &ThreatSelections) -> Self {
        let financial_gain = s.financial_gain.financial_gain_score();
        let notoriety = s.notoriety.notoriety_score();
        Self {
            financial_gain,
            notoriety,
            combined: financial_gain + notoriety,
        }
    }
}
