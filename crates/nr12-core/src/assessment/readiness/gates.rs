use super::super::domain::{ActionItem, ChecklistResponse, Machine, RiskEntry};
use serde::{Deserialize, Serialize};

pub const NO_MACHINES: &str = "report must have at least one linked machine";
pub const NO_RISK_APPRECIATION: &str = "no risk appreciation recorded";
pub const PENDING_HRN: &str = "risk entries exist with invalid or pending HRN calculation";
pub const MISSING_ACTION_PLAN: &str = "non-conformances exist without a corresponding action plan";

/// The completeness checks a report must clear before it can be signed.
///
/// Labels are user-facing and stable. There is no gate D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gate {
    Inventory,
    Checklist,
    Risk,
    ActionPlan,
}

impl Gate {
    pub const fn ordered() -> [Self; 4] {
        [Self::Inventory, Self::Checklist, Self::Risk, Self::ActionPlan]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Inventory => "Gate A (Inventário)",
            Self::Checklist => "Gate B (Checklist)",
            Self::Risk => "Gate C (Apreciação de Riscos)",
            Self::ActionPlan => "Gate E (Plano de Ação)",
        }
    }
}

/// Outcome of one gate. A failure always carries the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GateResult {
    pub fn pass() -> Self {
        Self {
            ok: true,
            message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
        }
    }
}

pub fn check_inventory_gate(machines: &[Machine]) -> GateResult {
    if machines.is_empty() {
        GateResult::fail(NO_MACHINES)
    } else {
        GateResult::pass()
    }
}

/// Count-based: any `required_count` responses satisfy the gate, whichever
/// requirements they answer. `required_count` comes from the caller, who
/// cross-references the requirement catalog against the report's machines.
pub fn check_checklist_gate(responses: &[ChecklistResponse], required_count: usize) -> GateResult {
    let responded = responses.len();
    if responded >= required_count {
        GateResult::pass()
    } else {
        GateResult::fail(format!(
            "checklist incomplete: {responded}/{required_count} requirements answered"
        ))
    }
}

/// Every assessed machine needs at least one risk entry on record (a "no
/// significant risk" entry counts), and every entry needs a completed score.
pub fn check_risk_gate(risks: &[RiskEntry], machines: &[Machine]) -> GateResult {
    if !machines.is_empty() && risks.is_empty() {
        return GateResult::fail(NO_RISK_APPRECIATION);
    }

    if risks.iter().any(|risk| !risk.has_completed_score()) {
        return GateResult::fail(PENDING_HRN);
    }

    GateResult::pass()
}

/// Existence-based: one action of any kind covers every non-conformance.
pub fn check_action_plan_gate(
    actions: &[ActionItem],
    non_compliant_responses: &[&ChecklistResponse],
) -> GateResult {
    if non_compliant_responses.is_empty() || !actions.is_empty() {
        GateResult::pass()
    } else {
        GateResult::fail(MISSING_ACTION_PLAN)
    }
}
