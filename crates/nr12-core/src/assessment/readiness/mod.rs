//! Signability gate for a report.
//!
//! Four independent checks over snapshots of the report's machines, checklist
//! responses, risk entries and action items. Results are listed in check
//! order (A, B, C, E) so user-facing messages stay stable.

mod gates;

pub use gates::{
    check_action_plan_gate, check_checklist_gate, check_inventory_gate, check_risk_gate, Gate,
    GateResult, MISSING_ACTION_PLAN, NO_MACHINES, NO_RISK_APPRECIATION, PENDING_HRN,
};

use super::domain::{ActionItem, ChecklistResponse, Machine, RiskEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Caller-supplied view of a report's related records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSnapshot {
    #[serde(default)]
    pub machines: Vec<Machine>,
    #[serde(default)]
    pub responses: Vec<ChecklistResponse>,
    #[serde(default)]
    pub risks: Vec<RiskEntry>,
    #[serde(default)]
    pub actions: Vec<ActionItem>,
    pub required_checklist_count: usize,
}

/// Aggregate answer used to enable or disable signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessOutcome {
    pub can_sign: bool,
    pub failed_gates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateCheck {
    pub gate: Gate,
    pub label: String,
    #[serde(flatten)]
    pub result: GateResult,
}

/// Per-gate results in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessReport {
    pub gates: Vec<GateCheck>,
}

impl ReadinessReport {
    pub fn evaluate(snapshot: &ReportSnapshot) -> Self {
        Self::from_parts(
            &snapshot.machines,
            &snapshot.responses,
            &snapshot.risks,
            &snapshot.actions,
            snapshot.required_checklist_count,
        )
    }

    pub fn from_parts(
        machines: &[Machine],
        responses: &[ChecklistResponse],
        risks: &[RiskEntry],
        actions: &[ActionItem],
        required_checklist_count: usize,
    ) -> Self {
        let non_compliant: Vec<&ChecklistResponse> = responses
            .iter()
            .filter(|response| response.is_non_compliant())
            .collect();

        let gates = Gate::ordered()
            .into_iter()
            .map(|gate| {
                let result = match gate {
                    Gate::Inventory => check_inventory_gate(machines),
                    Gate::Checklist => check_checklist_gate(responses, required_checklist_count),
                    Gate::Risk => check_risk_gate(risks, machines),
                    Gate::ActionPlan => check_action_plan_gate(actions, &non_compliant),
                };

                if let Some(reason) = result.message.as_deref().filter(|_| !result.ok) {
                    debug!(gate = gate.label(), reason, "readiness gate failed");
                }

                GateCheck {
                    gate,
                    label: gate.label().to_string(),
                    result,
                }
            })
            .collect();

        Self { gates }
    }

    pub fn can_sign(&self) -> bool {
        self.gates.iter().all(|check| check.result.ok)
    }

    pub fn failed_gates(&self) -> Vec<String> {
        self.gates
            .iter()
            .filter(|check| !check.result.ok)
            .map(|check| check.label.clone())
            .collect()
    }

    pub fn result_for(&self, gate: Gate) -> Option<&GateResult> {
        self.gates
            .iter()
            .find(|check| check.gate == gate)
            .map(|check| &check.result)
    }

    pub fn outcome(&self) -> ReadinessOutcome {
        ReadinessOutcome {
            can_sign: self.can_sign(),
            failed_gates: self.failed_gates(),
        }
    }
}

/// Runs every gate over borrowed collections and reduces to `{ can_sign, failed_gates }`.
pub fn evaluate_all_gates(
    machines: &[Machine],
    responses: &[ChecklistResponse],
    risks: &[RiskEntry],
    actions: &[ActionItem],
    required_checklist_count: usize,
) -> ReadinessOutcome {
    ReadinessReport::from_parts(machines, responses, risks, actions, required_checklist_count)
        .outcome()
}
