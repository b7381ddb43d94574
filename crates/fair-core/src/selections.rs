use crate::levels::{QualitativeLevel, ResourceLevel, SophisticationLevel};
use crate::taxonomy::{Location, Sector};
use serde::{Deserialize, Serialize};

/// Everything the threat-actor page currently has selected. The UI layer
/// owns one of these and overwrites fields as widgets change; scoring
/// functions only ever borrow it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreatSelections {
    pub sophistication: SophisticationLevel,
    pub resource: ResourceLevel,
    pub financial_gain: QualitativeLevel,
    pub notoriety: QualitativeLevel,
    pub data_theft: QualitativeLevel,
    pub org_location: Location,
    pub actor_location: Location,
    pub org_sector: Sector,
    pub actor_sector: Sector,
}

impl Default for ThreatSelections {
    /// The dashboard's initial widget state.
    fn default() -> Self {
        Self {
            sophistication: SophisticationLevel::None,
            resource: ResourceLevel::Government,
            financial_gain: QualitativeLevel::VeryHigh,
            notoriety: QualitativeLevel::VeryHigh,
            data_theft: QualitativeLevel::VeryHigh,
            org_location: Location::UnitedStates,
            actor_location: Location::UnitedStates,
            org_sector: Sector::Energy,
            actor_sector: Sector::Energy,
        }
    }
}
