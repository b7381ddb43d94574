use crate::error::UnknownLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attacker sophistication, seven tiers on an evenly spaced unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SophisticationLevel {
    None,
    Minimal,
    Intermediate,
    Advanced,
    Expert,
    Innovator,
    Strategic,
}

impl SophisticationLevel {
    pub const ALL: [SophisticationLevel; 7] = [
        SophisticationLevel::None,
        SophisticationLevel::Minimal,
        SophisticationLevel::Intermediate,
        SophisticationLevel::Advanced,
        SophisticationLevel::Expert,
        SophisticationLevel::Innovator,
        SophisticationLevel::Strategic,
    ];

    pub fn tier(self) -> u8 {
        match self {
            SophisticationLevel::None => 1,
            SophisticationLevel::Minimal => 2,
            SophisticationLevel::Intermediate => 3,
            SophisticationLevel::Advanced => 4,
            SophisticationLevel::Expert => 5,
            SophisticationLevel::Innovator => 6,
            SophisticationLevel::Strategic => 7,
        }
    }

    /// tier/7, so None = 1/7 and Strategic = 1.
    pub fn score(self) -> f64 {
        f64::from(self.tier()) / 7.0
    }

    pub fn label(self) -> &'static str {
        match self {
            SophisticationLevel::None => "None",
            SophisticationLevel::Minimal => "Minimal",
            SophisticationLevel::Intermediate => "Intermediate",
            SophisticationLevel::Advanced => "Advanced",
            SophisticationLevel::Expert => "Expert",
            SophisticationLevel::Innovator => "Innovator",
            SophisticationLevel::Strategic => "Strategic",
        }
    }
}

impl fmt::Display for SophisticationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SophisticationLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SophisticationLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| UnknownLevel::new("sophistication", s))
    }
}

/// Resource tier backing the threat actor, six evenly spaced tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceLevel {
    Individual,
    Club,
    Contest,
    Team,
    Organization,
    Government,
}

impl ResourceLevel {
    pub const ALL: [ResourceLevel; 6] = [
        ResourceLevel::Individual,
        ResourceLevel::Club,
        ResourceLevel::Contest,
        ResourceLevel::Team,
        ResourceLevel::Organization,
        ResourceLevel::Government,
    ];

    pub fn tier(self) -> u8 {
        match self {
            ResourceLevel::Individual => 1,
            ResourceLevel::Club => 2,
            ResourceLevel::Contest => 3,
            ResourceLevel::Team => 4,
            ResourceLevel::Organization => 5,
            ResourceLevel::Government => 6,
        }
    }

    pub fn score(self) -> f64 {
        f64::from(self.tier()) / 6.0
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceLevel::Individual => "Individual",
            ResourceLevel::Club => "Club",
            ResourceLevel::Contest => "Contest",
            ResourceLevel::Team => "Team",
            ResourceLevel::Organization => "Organization",
            ResourceLevel::Government => "Government",
        }
    }
}

impl fmt::Display for ResourceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResourceLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| UnknownLevel::new("resource", s))
    }
}

/// Shared five-label qualitative scale used by the motivation and goal
/// sliders. Each dimension keeps its own numeric table over these labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualitativeLevel {
    #[serde(rename = "Very low")]
    VeryLow,
    Low,
    Moderate,
    High,
    #[serde(rename = "Very high")]
    VeryHigh,
}

impl QualitativeLevel {
    pub const ALL: [QualitativeLevel; 5] = [
        QualitativeLevel::VeryLow,
        QualitativeLevel::Low,
        QualitativeLevel::Moderate,
        QualitativeLevel::High,
        QualitativeLevel::VeryHigh,
    ];

    /// Financial gain relevance, spans [0, 0.8].
    pub fn financial_gain_score(self) -> f64 {
        match self {
            QualitativeLevel::VeryLow => 0.0,
            QualitativeLevel::Low => 0.16,
            QualitativeLevel::Moderate => 0.4,
            QualitativeLevel::High => 0.64,
            QualitativeLevel::VeryHigh => 0.8,
        }
    }

    /// Notoriety relevance, spans [0, 0.2].
    pub fn notoriety_score(self) -> f64 {
        match self {
            QualitativeLevel::VeryLow => 0.0,
            QualitativeLevel::Low => 0.04,
            QualitativeLevel::Moderate => 0.1,
            QualitativeLevel::High => 0.16,
            QualitativeLevel::VeryHigh => 0.2,
        }
    }

    /// Data-theft goal relevance, spans the full unit interval.
    pub fn data_theft_score(self) -> f64 {
        match self {
            QualitativeLevel::VeryLow => 0.0,
            QualitativeLevel::Low => 0.2,
            QualitativeLevel::Moderate => 0.5,
            QualitativeLevel::High => 0.8,
            QualitativeLevel::VeryHigh => 1.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualitativeLevel::VeryLow => "Very low",
            QualitativeLevel::Low => "Low",
            QualitativeLevel::Moderate => "Moderate",
            QualitativeLevel::High => "High",
            QualitativeLevel::VeryHigh => "Very high",
        }
    }
}

impl fmt::Display for QualitativeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for QualitativeLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QualitativeLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| UnknownLevel::new("qualitative", s))
    }
}
