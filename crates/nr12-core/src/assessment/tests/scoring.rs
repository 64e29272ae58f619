use crate::assessment::domain::ActionPriority;
use crate::assessment::scoring::{
    classify_risk_tier, compute_hazard_score, derive_priority, standard_deadline_days,
    FactorKind, Frequency, InvalidFactorError, Probability, RiskTier, Severity,
};

#[test]
fn every_permitted_triple_scores_to_its_product() {
    for severity in Severity::ordered() {
        for probability in Probability::ordered() {
            for frequency in Frequency::ordered() {
                let expected = severity.value() * probability.value() * frequency.value();
                let score =
                    compute_hazard_score(severity.value(), probability.value(), frequency.value())
                        .expect("permitted levels score");
                assert_eq!(score.value(), expected);
                assert!(score.value() > 0.0);
            }
        }
    }
}

#[test]
fn out_of_table_values_are_rejected_not_clamped() {
    let cases = [
        (3.0, 1.0, 1.0, FactorKind::Severity),
        (20.0, 1.0, 1.0, FactorKind::Severity),
        (1.0, 0.0, 1.0, FactorKind::Probability),
        (1.0, 0.03, 1.0, FactorKind::Probability),
        (1.0, 1.0, 0.3, FactorKind::Frequency),
        (1.0, 1.0, -1.0, FactorKind::Frequency),
    ];

    for (severity, probability, frequency, factor) in cases {
        match compute_hazard_score(severity, probability, frequency) {
            Err(InvalidFactorError { factor: found, .. }) => assert_eq!(found, factor),
            other => panic!("expected {factor} rejection, got {other:?}"),
        }
    }
}

#[test]
fn deadline_always_matches_tier_split() {
    let scores = [0.0033, 10.0, 49.9, 50.0, 120.0, 199.0, 200.0, 399.0, 400.0, 2500.0];

    for score in scores {
        let tier = classify_risk_tier(score).expect("valid score");
        let priority = derive_priority(score).expect("valid score");
        let days = standard_deadline_days(ActionPriority::from(priority)).expect("derivable");

        let expected = match tier {
            RiskTier::Acceptable => 60,
            RiskTier::Tolerable => 30,
            RiskTier::Unacceptable => 15,
            RiskTier::Critical => 7,
        };
        assert_eq!(days, expected, "score {score}");
        assert_eq!(priority.deadline_days(), days);
    }
}
