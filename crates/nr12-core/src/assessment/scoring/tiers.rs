use super::super::domain::ActionPriority;
use serde::{Deserialize, Serialize};

const TOLERABLE_FROM: f64 = 50.0;
const UNACCEPTABLE_FROM: f64 = 200.0;
const CRITICAL_FROM: f64 = 400.0;

/// Rejected scores. Negative and non-finite scores never classify.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoreError {
    #[error("hazard score must be finite (found {score})")]
    NotFinite { score: f64 },
    #[error("hazard score must not be negative (found {score})")]
    Negative { score: f64 },
    #[error("hazard score {score} is not a product of permitted factor levels")]
    NotAProduct { score: f64 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeadlineError {
    #[error("priority {0:?} has no standard deadline; it is set directly on the action")]
    NoStandardDeadline(ActionPriority),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Acceptable,
    Tolerable,
    Unacceptable,
    Critical,
}

impl RiskTier {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Acceptable,
            Self::Tolerable,
            Self::Unacceptable,
            Self::Critical,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Acceptable => "Aceitável",
            Self::Tolerable => "Tolerável",
            Self::Unacceptable => "Inaceitável",
            Self::Critical => "Crítico",
        }
    }

    const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Acceptable,
            1 => Self::Tolerable,
            2 => Self::Unacceptable,
            _ => Self::Critical,
        }
    }
}

/// Remediation urgency derived from a score. Ordered most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemediationPriority {
    Critical,
    High,
    Medium,
    Low,
}

impl RemediationPriority {
    pub const fn ordered() -> [Self; 4] {
        [Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        ActionPriority::from_remediation(self).label()
    }

    /// Standard number of days allowed to complete the corrective action.
    pub const fn deadline_days(self) -> u32 {
        match self {
            Self::Critical => 7,
            Self::High => 15,
            Self::Medium => 30,
            Self::Low => 60,
        }
    }

    const fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Self::Low,
            1 => Self::Medium,
            2 => Self::High,
            _ => Self::Critical,
        }
    }
}

impl ActionPriority {
    pub const fn from_remediation(priority: RemediationPriority) -> Self {
        match priority {
            RemediationPriority::Critical => Self::Critical,
            RemediationPriority::High => Self::High,
            RemediationPriority::Medium => Self::Medium,
            RemediationPriority::Low => Self::Low,
        }
    }
}

impl From<RemediationPriority> for ActionPriority {
    fn from(priority: RemediationPriority) -> Self {
        Self::from_remediation(priority)
    }
}

impl TryFrom<ActionPriority> for RemediationPriority {
    type Error = DeadlineError;

    fn try_from(priority: ActionPriority) -> Result<Self, Self::Error> {
        match priority {
            ActionPriority::Critical => Ok(Self::Critical),
            ActionPriority::High => Ok(Self::High),
            ActionPriority::Medium => Ok(Self::Medium),
            ActionPriority::Low => Ok(Self::Low),
            ActionPriority::Improvement => Err(DeadlineError::NoStandardDeadline(priority)),
        }
    }
}

/// Four-way split shared by tiers and priorities: 0 below 50, 1 below 200,
/// 2 below 400, 3 otherwise. Lower bounds are inclusive.
pub(crate) fn threshold_rank(score: f64) -> u8 {
    if score < TOLERABLE_FROM {
        0
    } else if score < UNACCEPTABLE_FROM {
        1
    } else if score < CRITICAL_FROM {
        2
    } else {
        3
    }
}

fn checked_rank(score: f64) -> Result<u8, ScoreError> {
    if !score.is_finite() {
        return Err(ScoreError::NotFinite { score });
    }
    if score < 0.0 {
        return Err(ScoreError::Negative { score });
    }
    Ok(threshold_rank(score))
}

pub(crate) fn tier_for_rank(rank: u8) -> RiskTier {
    RiskTier::from_rank(rank)
}

pub(crate) fn priority_for_rank(rank: u8) -> RemediationPriority {
    RemediationPriority::from_rank(rank)
}

/// Classifies any stored or computed score. Scores are not re-checked against the factor tables.
pub fn classify_risk_tier(score: f64) -> Result<RiskTier, ScoreError> {
    checked_rank(score).map(tier_for_rank)
}

pub fn derive_priority(score: f64) -> Result<RemediationPriority, ScoreError> {
    checked_rank(score).map(priority_for_rank)
}

/// Deadline lookup over the wider action vocabulary. `Improvement` is refused.
pub fn standard_deadline_days(priority: ActionPriority) -> Result<u32, DeadlineError> {
    RemediationPriority::try_from(priority).map(RemediationPriority::deadline_days)
}
