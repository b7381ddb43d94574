use fair_core::selections::ThreatSelections;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GoalEnvelope {
    pub data_theft: f64,
    /// Data theft is the only goal dimension today, so the combined score
    /// is identical to it. New goal dimensions fold in here.
    pub combined: f64,
}

impl GoalEnvelope {
    pub fn from_selections(s: &ThreatSelections) -> Self {
        let data_theft = s.data_theft.data_theft_score();
        Self {
            data_theft,
            combined: data_theft,
        }
    }
}
