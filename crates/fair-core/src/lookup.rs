//! Label-keyed score lookups with the dashboard's fail-soft behavior: a
//! label that is not in a table resolves to 0.0 instead of an error. The
//! typed enums in [`crate::levels`] are the strict path; these functions
//! exist for callers that still hold raw widget labels.

use crate::levels::{QualitativeLevel, ResourceLevel, SophisticationLevel};

pub fn sophistication_score(label: &str) -> f64 {
    label
        .parse::<SophisticationLevel>()
        .map(SophisticationLevel::score)
        .unwrap_or(0.0)
}

pub fn resource_score(label: &str) -> f64 {
    label
        .parse::<ResourceLevel>()
        .map(ResourceLevel::score)
        .unwrap_or(0.0)
}

pub fn financial_gain_score(label: &str) -> f64 {
    label
        .parse::<QualitativeLevel>()
        .map(QualitativeLevel::financial_gain_score)
        .unwrap_or(0.0)
}

pub fn notoriety_score(label: &str) -> f64 {
    label
        .parse::<QualitativeLevel>()
        .map(QualitativeLevel::notoriety_score)
        .unwrap_or(0.0)
}

pub fn data_theft_score(label: &str) -> f64 {
    label
        .parse::<QualitativeLevel>()
        .map(QualitativeLevel::data_theft_score)
        .unwrap_or(0.0)
}
