use crate::report::generate_threat_report;
use crate::{GoalEnvelope, MotivationEnvelope, TargetingEnvelope, TefEnvelope};
use fair_core::levels::{QualitativeLevel, ResourceLevel, SophisticationLevel};
use fair_core::selections::ThreatSelections;
use fair_core::taxonomy::{Location, Sector};
use fair_core::threat_ability::ThreatAbilityWeights;
use rand::Rng;

const EPS: f64 = 1e-9;

#[test]
fn threat_ability_none_government() {
    let s = ThreatSelections {
        sophistication: SophisticationLevel::None,
        resource: ResourceLevel::Government,
        ..ThreatSelections::default()
    };
    let envelope = TefEnvelope::from_selections(ThreatAbilityWeights::default(), &s);
    assert!((envelope.threat_ability - (1.0 / 7.0 * 0.6 + 0.4)).abs() < EPS);
}

#[test]
fn motivation_spans_zero_to_one() {
    let mut s = ThreatSelections {
        financial_gain: QualitativeLevel::VeryHigh,
        notoriety: QualitativeLevel::VeryHigh,
        ..ThreatSelections::default()
    };
    let top = MotivationEnvelope::from_selections(&s);
    assert!((top.combined - 1.0).abs() < EPS);

    s.financial_gain = QualitativeLevel::VeryLow;
    s.notoriety = QualitativeLevel::VeryLow;
    let bottom = MotivationEnvelope::from_selections(&s);
    assert_eq!(bottom.combined, 0.0);
}

#[test]
fn goal_is_data_theft_alone() {
    for level in QualitativeLevel::ALL {
        let s = ThreatSelections {
            data_theft: level,
            ..ThreatSelections::default()
        };
        let goal = GoalEnvelope::from_selections(&s);
        assert_eq!(goal.combined, goal.data_theft);
        assert_eq!(goal.data_theft, level.data_theft_score());
    }
}

#[test]
fn targeting_matches_exact_pairs_only() {
    for org in Location::ALL {
        for actor in Location::ALL {
            let s = ThreatSelections {
                org_location: org,
                actor_location: actor,
                ..ThreatSelections::default()
            };
            let targeting = TargetingEnvelope::from_selections(&s);
            let expected = if org == actor { 1.0 } else { 0.0 };
            assert_eq!(targeting.location_match, expected);
        }
    }
    for org in Sector::ALL {
        for actor in Sector::ALL {
            let s = ThreatSelections {
                org_sector: org,
                actor_sector: actor,
                ..ThreatSelections::default()
            };
            let targeting = TargetingEnvelope::from_selections(&s);
            let expected = if org == actor { 1.0 } else { 0.0 };
            assert_eq!(targeting.sector_match, expected);
        }
    }
}

#[test]
fn tef_collapses_on_any_mismatch() {
    let weights = ThreatAbilityWeights::default();
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let mut s = ThreatSelections {
            sophistication: SophisticationLevel::ALL[rng.gen_range(0..7)],
            resource: ResourceLevel::ALL[rng.gen_range(0..6)],
            financial_gain: QualitativeLevel::ALL[rng.gen_range(0..5)],
            notoriety: QualitativeLevel::ALL[rng.gen_range(0..5)],
            data_theft: QualitativeLevel::ALL[rng.gen_range(0..5)],
            ..ThreatSelections::default()
        };

        s.org_location = Location::Europe;
        s.actor_location = Location::Asia;
        let envelope = TefEnvelope::from_selections(weights, &s);
        assert_eq!(envelope.tef, 0.0);

        s.actor_location = Location::Europe;
        s.org_sector = Sector::Utilities;
        s.actor_sector = Sector::Financials;
        let envelope = TefEnvelope::from_selections(weights, &s);
        assert_eq!(envelope.tef, 0.0);
    }
}

#[test]
fn default_selections_reproduce_initial_dashboard_scores() {
    let s = ThreatSelections::default();
    let envelope = TefEnvelope::from_selections(ThreatAbilityWeights::default(), &s);
    assert!((envelope.motivation - 1.0).abs() < EPS);
    assert!((envelope.goal - 1.0).abs() < EPS);
    assert_eq!(envelope.location_match, 1.0);
    assert_eq!(envelope.sector_match, 1.0);
    // With motivation, goal and both matches at 1, TEF equals TA.
    assert!((envelope.tef - envelope.threat_ability).abs() < EPS);
    assert!((envelope.tef - 0.485_714_285_714_285_7).abs() < 1e-12);
}

#[test]
fn scoring_is_idempotent() {
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let s = ThreatSelections {
            sophistication: SophisticationLevel::ALL[rng.gen_range(0..7)],
            resource: ResourceLevel::ALL[rng.gen_range(0..6)],
            financial_gain: QualitativeLevel::ALL[rng.gen_range(0..5)],
            notoriety: QualitativeLevel::ALL[rng.gen_range(0..5)],
            data_theft: QualitativeLevel::ALL[rng.gen_range(0..5)],
            org_location: Location::ALL[rng.gen_range(0..6)],
            actor_location: Location::ALL[rng.gen_range(0..6)],
            org_sector: Sector::ALL[rng.gen_range(0..11)],
            actor_sector: Sector::ALL[rng.gen_range(0..11)],
        };
        let weights = ThreatAbilityWeights::default();
        let first = TefEnvelope::from_selections(weights, &s);
        let second = TefEnvelope::from_selections(weights, &s);
        assert_eq!(first.tef, second.tef);
        assert_eq!(first.threat_ability, second.threat_ability);
    }
}

#[test]
fn threat_report_carries_cards_and_series() {
    let report = generate_threat_report(&ThreatSelections::default());
    assert_eq!(report.page, "threat-actor");
    assert_eq!(report.cards.len(), 4);
    assert_eq!(report.series.len(), 4);
    assert!(report.identifiers.contains("score:threat:tef"));
    assert_eq!(report.date.len(), 10);
    assert!(report.ensure_scores_finite().is_ok());

    let tef_card = report
        .cards
        .iter()
        .find(|card| card.name == "Final TEF Calculation")
        .unwrap();
    assert!((tef_card.value - 0.485_714_285_714_285_7).abs() < 1e-12);
}
