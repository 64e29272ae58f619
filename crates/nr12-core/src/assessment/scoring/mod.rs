//! Hazard Rating Number (HRN) scoring.
//!
//! A score is the product of one severity, one probability and one frequency
//! level. Raw numbers are only accepted when they match a permitted level
//! exactly; the score is then split into a risk tier and a remediation
//! priority using the same 50 / 200 / 400 thresholds.

mod factors;
mod tiers;

pub use factors::{FactorKind, Frequency, InvalidFactorError, Probability, Severity};
pub use tiers::{
    classify_risk_tier, derive_priority, standard_deadline_days, DeadlineError,
    RemediationPriority, RiskTier, ScoreError,
};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tiers::{priority_for_rank, threshold_rank, tier_for_rank};

/// Product of the three HRN factors. Only built from validated levels.
///
/// Deserializing goes through [`TryFrom<f64>`], which only accepts a value
/// some permitted severity, probability and frequency multiply to.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct HazardScore(f64);

impl HazardScore {
    pub fn from_factors(severity: Severity, probability: Probability, frequency: Frequency) -> Self {
        Self(severity.value() * probability.value() * frequency.value())
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn tier(self) -> RiskTier {
        tier_for_rank(threshold_rank(self.0))
    }

    pub fn priority(self) -> RemediationPriority {
        priority_for_rank(threshold_rank(self.0))
    }
}

impl TryFrom<f64> for HazardScore {
    type Error = ScoreError;

    fn try_from(score: f64) -> Result<Self, Self::Error> {
        if !score.is_finite() {
            return Err(ScoreError::NotFinite { score });
        }
        if score < 0.0 {
            return Err(ScoreError::Negative { score });
        }

        Severity::ordered()
            .into_iter()
            .flat_map(|severity| {
                Probability::ordered().into_iter().flat_map(move |probability| {
                    Frequency::ordered()
                        .into_iter()
                        .map(move |frequency| Self::from_factors(severity, probability, frequency))
                })
            })
            .find(|candidate| candidate.0 == score)
            .ok_or(ScoreError::NotAProduct { score })
    }
}

impl From<HazardScore> for f64 {
    fn from(score: HazardScore) -> Self {
        score.0
    }
}

/// Validates three raw factor values and multiplies them.
///
/// Factors are checked in severity, probability, frequency order; the first
/// value outside its table is reported.
pub fn compute_hazard_score(
    severity: f64,
    probability: f64,
    frequency: f64,
) -> Result<HazardScore, InvalidFactorError> {
    let severity = Severity::from_value(severity)?;
    let probability = Probability::from_value(probability)?;
    let frequency = Frequency::from_value(frequency)?;
    Ok(HazardScore::from_factors(severity, probability, frequency))
}

/// Priority, deadline and due date for a corrective action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationPlan {
    pub priority: RemediationPriority,
    pub deadline_days: u32,
    pub identified_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl RemediationPlan {
    pub fn for_priority(priority: RemediationPriority, identified_on: NaiveDate) -> Self {
        let deadline_days = priority.deadline_days();
        Self {
            priority,
            deadline_days,
            identified_on,
            due_on: identified_on + Duration::days(i64::from(deadline_days)),
        }
    }

    pub fn from_score(score: f64, identified_on: NaiveDate) -> Result<Self, ScoreError> {
        derive_priority(score).map(|priority| Self::for_priority(priority, identified_on))
    }
}

/// Full scoring result handed to the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub severity: Severity,
    pub probability: Probability,
    pub frequency: Frequency,
    pub hrn: HazardScore,
    pub tier: RiskTier,
    pub tier_label: String,
    pub priority: RemediationPriority,
    pub priority_label: String,
    pub deadline_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<NaiveDate>,
}

impl RiskAssessment {
    pub fn assess(
        severity: Severity,
        probability: Probability,
        frequency: Frequency,
        identified_on: Option<NaiveDate>,
    ) -> Self {
        let hrn = HazardScore::from_factors(severity, probability, frequency);
        let tier = hrn.tier();
        let priority = hrn.priority();
        let due_on =
            identified_on.map(|date| RemediationPlan::for_priority(priority, date).due_on);

        Self {
            severity,
            probability,
            frequency,
            hrn,
            tier,
            tier_label: tier.label().to_string(),
            priority,
            priority_label: priority.label().to_string(),
            deadline_days: priority.deadline_days(),
            due_on,
        }
    }

    pub fn from_values(
        severity: f64,
        probability: f64,
        frequency: f64,
        identified_on: Option<NaiveDate>,
    ) -> Result<Self, InvalidFactorError> {
        Ok(Self::assess(
            Severity::from_value(severity)?,
            Probability::from_value(probability)?,
            Frequency::from_value(frequency)?,
            identified_on,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_the_plain_product() {
        let score = compute_hazard_score(8.0, 4.0, 2.5).expect("levels are permitted");
        assert_eq!(score.value(), 80.0);
        assert_eq!(score.tier(), RiskTier::Tolerable);
        assert_eq!(score.priority(), RemediationPriority::Medium);
    }

    #[test]
    fn first_invalid_factor_is_reported() {
        let err = compute_hazard_score(3.0, 0.5, 7.0).expect_err("severity 3 is invalid");
        assert_eq!(err.factor, FactorKind::Severity);

        let err = compute_hazard_score(2.0, 0.5, 1.0).expect_err("probability 0.5 is invalid");
        assert_eq!(err.factor, FactorKind::Probability);
        assert_eq!(err.value, 0.5);

        let err = compute_hazard_score(2.0, 1.0, 3.0).expect_err("frequency 3 is invalid");
        assert_eq!(err.factor, FactorKind::Frequency);
    }

    #[test]
    fn typed_and_raw_entry_points_agree() {
        let typed =
            HazardScore::from_factors(Severity::Fatality, Probability::Certain, Frequency::Constantly);
        let raw = compute_hazard_score(15.0, 15.0, 5.0).expect("levels are permitted");
        assert_eq!(typed, raw);
        assert_eq!(raw.value(), 1125.0);
        assert_eq!(raw.tier(), RiskTier::Critical);
    }

    #[test]
    fn deserialized_scores_must_be_factor_products() {
        let score: HazardScore = serde_json::from_str("375").expect("15 x 5 x 5");
        assert_eq!(score.tier(), RiskTier::Unacceptable);
        assert_eq!(serde_json::to_string(&score).expect("serializes"), "375.0");

        let negative = serde_json::from_str::<HazardScore>("-5").expect_err("negative refused");
        assert!(negative.to_string().contains("must not be negative"), "{negative}");

        let stray = serde_json::from_str::<HazardScore>("3.14159").expect_err("not a product");
        assert!(stray.to_string().contains("not a product"), "{stray}");

        assert_eq!(
            HazardScore::try_from(0.0),
            Err(ScoreError::NotAProduct { score: 0.0 })
        );
    }

    #[test]
    fn every_computed_score_converts_back() {
        for severity in Severity::ordered() {
            for probability in Probability::ordered() {
                for frequency in Frequency::ordered() {
                    let score = HazardScore::from_factors(severity, probability, frequency);
                    assert_eq!(HazardScore::try_from(score.value()), Ok(score));
                }
            }
        }
    }

    #[test]
    fn remediation_plan_adds_deadline_to_identification_date() {
        let identified_on = NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date");
        let plan = RemediationPlan::from_score(420.0, identified_on).expect("score is valid");

        assert_eq!(plan.priority, RemediationPriority::Critical);
        assert_eq!(plan.deadline_days, 7);
        assert_eq!(
            plan.due_on,
            NaiveDate::from_ymd_opt(2025, 3, 17).expect("valid date")
        );
        assert!(RemediationPlan::from_score(-1.0, identified_on).is_err());
    }

    #[test]
    fn assessment_carries_labels_and_due_date() {
        let identified_on = NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date");
        let assessment = RiskAssessment::from_values(4.0, 10.0, 5.0, Some(identified_on))
            .expect("levels are permitted");

        assert_eq!(assessment.hrn.value(), 200.0);
        assert_eq!(assessment.tier, RiskTier::Unacceptable);
        assert_eq!(assessment.tier_label, "Inaceitável");
        assert_eq!(assessment.priority, RemediationPriority::High);
        assert_eq!(assessment.priority_label, "Alta");
        assert_eq!(assessment.deadline_days, 15);
        assert_eq!(
            assessment.due_on,
            NaiveDate::from_ymd_opt(2025, 2, 15)
        );
    }
}
