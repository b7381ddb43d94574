use fair_core::portfolio::AssetPortfolio;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExposureEnvelope {
    /// Mean CVSS over the vulnerabilities affecting the asset.
    pub criticality: f64,
    /// Asset value x criticality, in $million.
    pub primary_loss_magnitude: f64,
}

impl ExposureEnvelope {
    pub fn from_portfolio(portfolio: &AssetPortfolio) -> Self {
        let criticality = if portfolio.vulnerabilities.is_empty() {
            0.0
        } else {
            let sum: f64 = portfolio.vulnerabilities.iter().map(|v| v.cvss).sum();
            sum / portfolio.vulnerabilities.len() as f64
        };
        Self {
            criticality,
            primary_loss_magnitude: portfolio.asset.value_musd * criticality,
        }
    }
}
