use crate::error::UnknownLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Geographic region of an organization or threat actor. Equality-compared
/// only; there is no ordering or hierarchy between regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "U.S")]
    UnitedStates,
    Europe,
    Asia,
    Africa,
    #[serde(rename = "South America")]
    SouthAmerica,
    #[serde(rename = "North America")]
    NorthAmerica,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::UnitedStates,
        Location::Europe,
        Location::Asia,
        Location::Africa,
        Location::SouthAmerica,
        Location::NorthAmerica,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Location::UnitedStates => "U.S",
            Location::Europe => "Europe",
            Location::Asia => "Asia",
            Location::Africa => "Africa",
            Location::SouthAmerica => "South America",
            Location::NorthAmerica => "North America",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Location {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|location| location.label() == s)
            .ok_or_else(|| UnknownLevel::new("location", s))
    }
}

/// GICS industry sector of an organization or threat actor's targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    Energy,
    Materials,
    Industrials,
    #[serde(rename = "Consumer Discretionary")]
    ConsumerDiscretionary,
    #[serde(rename = "Consumer Staples")]
    ConsumerStaples,
    #[serde(rename = "Health Care")]
    HealthCare,
    Financials,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    #[serde(rename = "Communication Services")]
    CommunicationServices,
    Utilities,
    #[serde(rename = "Real Estate")]
    RealEstate,
}

impl Sector {
    pub const ALL: [Sector; 11] = [
        Sector::Energy,
        Sector::Materials,
        Sector::Industrials,
        Sector::ConsumerDiscretionary,
        Sector::ConsumerStaples,
        Sector::HealthCare,
        Sector::Financials,
        Sector::InformationTechnology,
        Sector::CommunicationServices,
        Sector::Utilities,
        Sector::RealEstate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Sector::Energy => "Energy",
            Sector::Materials => "Materials",
            Sector::Industrials => "Industrials",
            Sector::ConsumerDiscretionary => "Consumer Discretionary",
            Sector::ConsumerStaples => "Consumer Staples",
            Sector::HealthCare => "Health Care",
            Sector::Financials => "Financials",
            Sector::InformationTechnology => "Information Technology",
            Sector::CommunicationServices => "Communication Services",
            Sector::Utilities => "Utilities",
            Sector::RealEstate => "Real Estate",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sector {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .into_iter()
            .find(|sector| sector.label() == s)
            .ok_or_else(|| UnknownLevel::new("sector", s))
    }
}
