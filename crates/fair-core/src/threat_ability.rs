use crate::levels::{ResourceLevel, SophisticationLevel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThreatAbilityWeights {
    pub w_sophistication: f64,
    pub w_resource: f64,
}

impl ThreatAbilityWeights {
    /// The weights must partition the unit: w1 + w2 = 1.
    pub fn sums_to_one(self) -> bool {
        (self.w_sophistication + self.w_resource - 1.0).abs() <= f64::EPSILON
    }
}

impl Default for ThreatAbilityWeights {
    fn default() -> Self {
        Self {
            w_sophistication: 0.6,
            w_resource: 0.4,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThreatAbility {
    pub score: f64,
    pub sophistication: f64,
    pub resource: f64,
}

impl ThreatAbility {
    pub fn from_levels(
        weights: ThreatAbilityWeights,
        sophistication: SophisticationLevel,
        resource: ResourceLevel,
    ) -> Self {
        Self::from_scores(weights, sophistication.score(), resource.score())
    }

    pub fn from_scores(weights: ThreatAbilityWeights, sophistication: f64, resource: f64) -> Self {
        let score = weights.w_sophistication * sophistication + weights.w_resource * resource;
        Self {
            score,
            sophistication,
            resource,
        }
    }
}
