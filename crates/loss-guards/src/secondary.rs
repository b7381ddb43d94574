use fair_core::portfolio::AssetPortfolio;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The secondary-loss checkboxes: a set of loss-type names, toggled by
/// membership. Re-toggling a name deselects it, so duplicates cannot occur.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LossSelection {
    selected: BTreeSet<String>,
}

impl LossSelection {
    /// Flips membership; returns whether the name is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.selected.remove(name) {
            false
        } else {
            self.selected.insert(name.to_string());
            true
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// Total SLM in $million. Names the portfolio does not know contribute
    /// nothing, matching the dashboard's lookup behavior.
    pub fn total_slm(&self, portfolio: &AssetPortfolio) -> f64 {
        self.selected
            .iter()
            .map(|name| portfolio.loss_amount(name).unwrap_or(0.0))
            .sum()
    }
}
