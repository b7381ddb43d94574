use fair_core::selections::ThreatSelections;
use serde::{Deserialize, Serialize};

/// Binary alignment between the organization's profile and the threat
/// actor's targeting. Exact equality only, no partial credit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetingEnvelope {
    pub location_match: f64,
    pub sector_match: f64,
}

impl TargetingEnvelope {
    pub fn from_selections(s: &ThreatSelections) -> Self {
        let location_match = if s.org_location == s.actor_location {
            1.0
        } else {
            0.0
        };
        let sector_match = if s.org_sector == s.actor_sector {
            1.0
        } else {
            0.0
        };
        Self {
            location_match,
            sector_match,
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.location_match > 0.0 && self.sector_match > 0.0
    }
}
