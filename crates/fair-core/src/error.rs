use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {dimension} label: {label:?}")]
pub struct UnknownLevel {
    pub dimension: &'static str,
    pub label: String,
}

impl UnknownLevel {
    pub fn new(dimension: &'static str, label: &str) -> Self {
        Self {
            dimension,
            label: label.to_string(),
        }
    }
}
