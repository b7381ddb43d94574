use crate::exposure::ExposureEnvelope;
use crate::risk::TotalRisk;
use crate::secondary::LossSelection;
use chrono::Utc;
use fair_core::portfolio::AssetPortfolio;
use fair_core::report::{DashboardReport, ScoreCard};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Serialize)]
struct RiskInputs<'a> {
    portfolio: &'a AssetPortfolio,
    selected_losses: &'a LossSelection,
    loss_event_frequency: f64,
}

/// Builds the risk-analysis page: criticality, PLM with its printed formula
/// line, SLM over the selected loss types, and the total.
pub fn generate_risk_report(
    portfolio: &AssetPortfolio,
    selected_losses: &LossSelection,
    loss_event_frequency: f64,
) -> DashboardReport {
    let exposure = ExposureEnvelope::from_portfolio(portfolio);
    let slm = selected_losses.total_slm(portfolio);
    let risk = TotalRisk::compute(
        loss_event_frequency,
        exposure.primary_loss_magnitude,
        slm,
    );

    let inputs = serde_json::to_value(RiskInputs {
        portfolio,
        selected_losses,
        loss_event_frequency,
    })
    .expect("serialize risk inputs");

    let cards = vec![
        ScoreCard::new("Criticality (average CVSS score)", exposure.criticality),
        ScoreCard::with_detail(
            "Primary Loss Magnitude (PLM)",
            exposure.primary_loss_magnitude,
            format!(
                "PLM = Asset Value x Criticality = {} x {:.2} = {:.2} ($million)",
                portfolio.asset.value_musd, exposure.criticality, exposure.primary_loss_magnitude,
            ),
        ),
        ScoreCard::new("Total SLM Amount", slm),
        ScoreCard::with_detail(
            "Total Risk",
            risk.total,
            format!(
                "Total Risk = Total LEF x Total PLM + Total SLM = {:.2} ($million)",
                risk.total,
            ),
        ),
    ];

    let mut identifiers = BTreeSet::new();
    identifiers.insert("score:risk:criticality".to_string());
    identifiers.insert("score:risk:plm".to_string());
    identifiers.insert("score:risk:slm".to_string());
    identifiers.insert("score:risk:total".to_string());

    DashboardReport {
        date: Utc::now().format("%Y-%m-%d").to_string(),
        page: "risk-analysis".into(),
        inputs,
        cards,
        series: Vec::new(),
        identifiers,
    }
}
