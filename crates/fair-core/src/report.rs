use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One rendered score on a dashboard page. `detail` carries the formula
/// line the page prints under the number, empty when there is none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCard {
    pub name: String,
    pub value: f64,
    pub detail: String,
}

impl ScoreCard {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            detail: String::new(),
        }
    }

    pub fn with_detail(name: impl Into<String>, value: f64, detail: String) -> Self {
        Self {
            name: name.into(),
            value,
            detail,
        }
    }
}

/// Donut-chart split of a unit score against its complement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PieBreakdown {
    pub selected: f64,
    pub remaining: f64,
}

impl PieBreakdown {
    pub fn for_unit_score(score: f64) -> Self {
        Self {
            selected: score,
            remaining: (1.0 - score).max(0.0),
        }
    }
}

/// Bar-chart entry for a binary match indicator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchIndicator {
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ChartSeries {
    Pie {
        title: String,
        breakdown: PieBreakdown,
    },
    Bar {
        title: String,
        indicator: MatchIndicator,
    },
}

/// Everything one dashboard page needs to render: the inputs that produced
/// the scores, the score cards, and the chart series behind them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub date: String,
    pub page: String,
    pub inputs: serde_json::Value,
    pub cards: Vec<ScoreCard>,
    pub series: Vec<ChartSeries>,
    pub identifiers: BTreeSet<String>,
}

impl DashboardReport {
    pub fn add_identifier(&mut self, id: impl Into<String>) {
        self.identifiers.insert(id.into());
    }

    /// A card holding NaN or an infinity means malformed input leaked past
    /// the UI boundary; refuse to hand such a report to a renderer.
    pub fn ensure_scores_finite(&self) -> Result<(), String> {
        for card in &self.cards {
            if !card.value.is_finite() {
                return Err(format!("score {:?} is not finite", card.name));
            }
        }
        Ok(())
    }
}
