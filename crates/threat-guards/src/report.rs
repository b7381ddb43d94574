use crate::tef::TefEnvelope;
use chrono::Utc;
use fair_core::report::{ChartSeries, DashboardReport, MatchIndicator, PieBreakdown, ScoreCard};
use fair_core::selections::ThreatSelections;
use fair_core::threat_ability::ThreatAbilityWeights;
use std::collections::BTreeSet;

/// Builds the threat-actor page: score cards for TA, motivation, goal and
/// TEF, donut series for the two ability inputs, bar series for the two
/// match indicators.
pub fn generate_threat_report(selections: &ThreatSelections) -> DashboardReport {
    let weights = ThreatAbilityWeights::default();
    let envelope = TefEnvelope::from_selections(weights, selections);

    let inputs = serde_json::to_value(selections).expect("serialize selections");

    let cards = vec![
        ScoreCard::with_detail(
            "Threat Ability (TA)",
            envelope.threat_ability,
            format!(
                "TA = {:.2} x {} + {:.2} x {}",
                selections.sophistication.score(),
                weights.w_sophistication,
                selections.resource.score(),
                weights.w_resource,
            ),
        ),
        // Historical card title; the value is a sum of the two dimensions.
        ScoreCard::new("Average Motivation Score", envelope.motivation),
        ScoreCard::new("Data Theft Score", envelope.goal),
        ScoreCard::new("Final TEF Calculation", envelope.tef),
    ];

    let series = vec![
        ChartSeries::Pie {
            title: "Sophistication Level".into(),
            breakdown: PieBreakdown::for_unit_score(selections.sophistication.score()),
        },
        ChartSeries::Pie {
            title: "Resource Level".into(),
            breakdown: PieBreakdown::for_unit_score(selections.resource.score()),
        },
        ChartSeries::Bar {
            title: "Location Match".into(),
            indicator: MatchIndicator {
                name: "Location Match".into(),
                score: envelope.location_match,
            },
        },
        ChartSeries::Bar {
            title: "Sector Match".into(),
            indicator: MatchIndicator {
                name: "Sector Match".into(),
                score: envelope.sector_match,
            },
        },
    ];

    let mut identifiers = BTreeSet::new();
    identifiers.insert("score:threat:ability".to_string());
    identifiers.insert("score:threat:motivation".to_string());
    identifiers.insert("score:threat:goal".to_string());
    identifiers.insert("score:threat:tef".to_string());

    DashboardReport {
        date: Utc::now().format("%Y-%m-%d").to_string(),
        page: "threat-actor".into(),
        inputs,
        cards,
        series,
        identifiers,
    }
}
