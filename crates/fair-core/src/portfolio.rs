use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: u32,
    pub name: String,
    /// Replacement value in $million, fixed for the analysis instance.
    pub value_musd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    pub id: String,
    pub cvss: f64,
}

impl Vulnerability {
    /// CVSS v3 scores live in [0, 10]; out-of-range input is clamped.
    pub fn new(id: impl Into<String>, cvss: f64) -> Self {
        Self {
            id: id.into(),
            cvss: cvss.clamp(0.0, 10.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossType {
    pub name: String,
    /// Estimated downstream loss in $million.
    pub amount_musd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetPortfolio {
    pub asset: Asset,
    pub vulnerabilities: Vec<Vulnerability>,
    pub loss_types: Vec<LossType>,
}

impl AssetPortfolio {
    pub fn loss_amount(&self, name: &str) -> Option<f64> {
        self.loss_types
            .iter()
            .find(|loss| loss.name == name)
            .map(|loss| loss.amount_musd)
    }

    pub fn cvss_within_bounds(&self) -> bool {
        self.vulnerabilities
            .iter()
            .all(|v| v.cvss >= 0.0 && v.cvss <= 10.0)
    }

    /// The portfolio the shipped assessment runs against.
    pub fn default_for_assessment() -> Self {
        Self {
            asset: Asset {
                id: 1,
                name: "Personal data storage system".into(),
                value_musd: 230.0,
            },
            vulnerabilities: vec![
                Vulnerability::new("CVE-2017-0144", 8.1),
                Vulnerability::new("CVE-2017-5638", 9.8),
            ],
            loss_types: vec![
                LossType {
                    name: "Reputation Loss".into(),
                    amount_musd: 280.0,
                },
                LossType {
                    name: "Regulatory Penalties".into(),
                    amount_musd: 7.5,
                },
                LossType {
                    name: "Business Disruption".into(),
                    amount_musd: 12.5,
                },
                LossType {
                    name: "Customer Loss".into(),
                    amount_musd: 400.0,
                },
            ],
        }
    }
}
