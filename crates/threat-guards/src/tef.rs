use crate::goals::GoalEnvelope;
use crate::motivation::MotivationEnvelope;
use crate::targeting::TargetingEnvelope;
use fair_core::selections::ThreatSelections;
use fair_core::threat_ability::{ThreatAbility, ThreatAbilityWeights};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TefEnvelope {
    pub threat_ability: f64,
    pub motivation: f64,
    pub goal: f64,
    pub location_match: f64,
    pub sector_match: f64,
    /// TA · motivation · goal · location match · sector match. The match
    /// factors are binary, so a geographic or sectoral mismatch zeroes the
    /// frequency outright.
    pub tef: f64,
}

impl TefEnvelope {
    pub fn from_selections(weights: ThreatAbilityWeights, s: &ThreatSelections) -> Self {
        let ability = ThreatAbility::from_levels(weights, s.sophistication, s.resource);
        let motivation = MotivationEnvelope::from_selections(s);
        let goal = GoalEnvelope::from_selections(s);
        let targeting = TargetingEnvelope::from_selections(s);

        let tef = ability.score
            * motivation.combined
            * goal.combined
            * targeting.location_match
            * targeting.sector_match;

        Self {
            threat_ability: ability.score,
            motivation: motivation.combined,
            goal: goal.combined,
            location_match: targeting.location_match,
            sector_match: targeting.sector_match,
            tef,
        }
    }
}
