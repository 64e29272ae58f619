use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Equipment under assessment. The readiness rules only look at how many are linked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChecklistStatus {
    Compliant,
    #[serde(rename = "NONCOMPLIANT")]
    NonCompliant,
    NotApplicable,
}

impl ChecklistStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Conforme",
            Self::NonCompliant => "Não conforme",
            Self::NotApplicable => "Não aplicável",
        }
    }
}

/// Answer to one checklist requirement for one machine within one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistResponse {
    pub requirement_id: String,
    pub machine_id: String,
    pub status: ChecklistStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
}

impl ChecklistResponse {
    pub fn is_non_compliant(&self) -> bool {
        self.status == ChecklistStatus::NonCompliant
    }
}

/// One identified hazard. `hrn_number` is absent until the assessor scores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub id: String,
    pub machine_id: String,
    pub hazard: String,
    #[serde(default)]
    pub hrn_number: Option<f64>,
}

impl RiskEntry {
    /// A stored score counts as complete when present and non-zero.
    pub fn has_completed_score(&self) -> bool {
        matches!(self.hrn_number, Some(score) if score != 0.0)
    }
}

/// Priority vocabulary used by corrective actions.
///
/// `Improvement` is only ever chosen by a user; it is never derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionPriority {
    Critical,
    High,
    Medium,
    Low,
    Improvement,
}

impl ActionPriority {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Critical,
            Self::High,
            Self::Medium,
            Self::Low,
            Self::Improvement,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Crítica",
            Self::High => "Alta",
            Self::Medium => "Média",
            Self::Low => "Baixa",
            Self::Improvement => "Melhoria",
        }
    }
}

/// One corrective measure within a report's action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub id: String,
    pub description: String,
    pub priority: ActionPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(hrn_number: Option<f64>) -> RiskEntry {
        RiskEntry {
            id: "r-1".to_string(),
            machine_id: "m-1".to_string(),
            hazard: "Prensamento".to_string(),
            hrn_number,
        }
    }

    #[test]
    fn missing_or_zero_scores_are_pending() {
        assert!(!risk(None).has_completed_score());
        assert!(!risk(Some(0.0)).has_completed_score());
        assert!(risk(Some(0.0033)).has_completed_score());
    }

    #[test]
    fn checklist_status_uses_upstream_vocabulary() {
        let json = serde_json::to_string(&ChecklistStatus::NonCompliant).expect("serializes");
        assert_eq!(json, "\"NONCOMPLIANT\"");

        let parsed: ChecklistStatus =
            serde_json::from_str("\"NOT_APPLICABLE\"").expect("deserializes");
        assert_eq!(parsed, ChecklistStatus::NotApplicable);
    }

    #[test]
    fn improvement_priority_deserializes() {
        let item: ActionItem = serde_json::from_str(
            r#"{"id":"a-1","description":"Pintar faixa de segurança","priority":"IMPROVEMENT"}"#,
        )
        .expect("action item deserializes");
        assert_eq!(item.priority, ActionPriority::Improvement);
        assert!(item.due_date.is_none());
    }
}
