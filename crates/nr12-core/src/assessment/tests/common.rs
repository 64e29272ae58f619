use chrono::NaiveDate;

use crate::assessment::domain::{
    ActionItem, ActionPriority, ChecklistResponse, ChecklistStatus, Machine, RiskEntry,
};
use crate::assessment::readiness::ReportSnapshot;

pub(super) fn machine(id: &str) -> Machine {
    Machine {
        id: id.to_string(),
        name: format!("Prensa excêntrica {id}"),
        serial_number: None,
    }
}

pub(super) fn response(requirement_id: &str, status: ChecklistStatus) -> ChecklistResponse {
    ChecklistResponse {
        requirement_id: requirement_id.to_string(),
        machine_id: "m-01".to_string(),
        status,
        observation: None,
    }
}

pub(super) fn risk(id: &str, hrn_number: Option<f64>) -> RiskEntry {
    RiskEntry {
        id: id.to_string(),
        machine_id: "m-01".to_string(),
        hazard: "Prensamento de mãos na zona de prensagem".to_string(),
        hrn_number,
    }
}

pub(super) fn action(id: &str, priority: ActionPriority) -> ActionItem {
    ActionItem {
        id: id.to_string(),
        description: "Instalar cortina de luz categoria 4".to_string(),
        priority,
        due_date: NaiveDate::from_ymd_opt(2025, 6, 30),
    }
}

/// A report that clears every gate.
pub(super) fn complete_snapshot() -> ReportSnapshot {
    ReportSnapshot {
        machines: vec![machine("m-01"), machine("m-02")],
        responses: vec![
            response("12.38", ChecklistStatus::Compliant),
            response("12.39", ChecklistStatus::NonCompliant),
            response("12.40", ChecklistStatus::NotApplicable),
        ],
        risks: vec![risk("r-01", Some(45.0)), risk("r-02", Some(240.0))],
        actions: vec![action("a-01", ActionPriority::High)],
        required_checklist_count: 3,
    }
}
