use chrono::{Local, NaiveDate};
use clap::Args;
use nr12_core::assessment::{
    ActionItem, ActionPriority, ChecklistResponse, ChecklistStatus, Frequency, Machine,
    Probability, ReadinessReport, ReportSnapshot, RiskAssessment, RiskEntry, RiskSummary,
    Severity,
};
use nr12_core::error::AppError;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Severity level (0.1, 0.5, 1, 2, 4, 8, 15)
    #[arg(long)]
    pub(crate) severity: f64,
    /// Probability level (0.033, 1, 1.5, 2.5, 4, 5, 8, 10, 15)
    #[arg(long)]
    pub(crate) probability: f64,
    /// Frequency level (0.1, 0.2, 1, 1.5, 2.5, 4, 5)
    #[arg(long)]
    pub(crate) frequency: f64,
    /// Date the hazard was identified (YYYY-MM-DD); enables a due date
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) identified_on: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct ReadinessArgs {
    /// JSON file holding machines, responses, risks, actions and required_checklist_count
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the assessment date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let assessment = RiskAssessment::from_values(
        args.severity,
        args.probability,
        args.frequency,
        args.identified_on,
    )?;
    render_assessment(&assessment);
    Ok(())
}

pub(crate) fn run_readiness(args: ReadinessArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let snapshot: ReportSnapshot = serde_json::from_str(&raw)?;
    render_readiness(&snapshot);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("NR-12 assessment demo (assessed {today})");

    let assessment = RiskAssessment::assess(
        Severity::LossOfOneLimb,
        Probability::Probable,
        Frequency::Daily,
        Some(today),
    );
    println!("\nSample hazard: crushing at the press die area");
    render_assessment(&assessment);

    let mut snapshot = sample_snapshot();
    println!("\nSample report before the action plan is recorded");
    render_readiness(&snapshot);

    snapshot.actions.push(ActionItem {
        id: "a-01".to_string(),
        description: "Install category 4 light curtain on the press die area".to_string(),
        priority: ActionPriority::from(assessment.priority),
        due_date: assessment.due_on,
    });
    println!("\nSample report after the action plan is recorded");
    render_readiness(&snapshot);

    Ok(())
}

fn sample_snapshot() -> ReportSnapshot {
    ReportSnapshot {
        machines: vec![
            Machine {
                id: "m-01".to_string(),
                name: "Prensa excêntrica 60t".to_string(),
                serial_number: Some("PE-60-0192".to_string()),
            },
            Machine {
                id: "m-02".to_string(),
                name: "Serra fita horizontal".to_string(),
                serial_number: None,
            },
        ],
        responses: vec![
            ChecklistResponse {
                requirement_id: "12.38".to_string(),
                machine_id: "m-01".to_string(),
                status: ChecklistStatus::NonCompliant,
                observation: Some("Zona de prensagem sem proteção".to_string()),
            },
            ChecklistResponse {
                requirement_id: "12.38".to_string(),
                machine_id: "m-02".to_string(),
                status: ChecklistStatus::Compliant,
                observation: None,
            },
        ],
        risks: vec![
            RiskEntry {
                id: "r-01".to_string(),
                machine_id: "m-01".to_string(),
                hazard: "Esmagamento de mãos".to_string(),
                hrn_number: Some(50.0),
            },
            RiskEntry {
                id: "r-02".to_string(),
                machine_id: "m-02".to_string(),
                hazard: "Corte por contato com a lâmina".to_string(),
                hrn_number: Some(7.5),
            },
        ],
        actions: Vec::new(),
        required_checklist_count: 2,
    }
}

fn render_assessment(assessment: &RiskAssessment) {
    println!(
        "- Severity: {} ({})",
        assessment.severity.value(),
        assessment.severity.label()
    );
    println!(
        "- Probability: {} ({})",
        assessment.probability.value(),
        assessment.probability.label()
    );
    println!(
        "- Frequency: {} ({})",
        assessment.frequency.value(),
        assessment.frequency.label()
    );
    println!("- HRN: {}", assessment.hrn.value());
    println!("- Risk tier: {}", assessment.tier_label);
    println!(
        "- Priority: {} ({} days)",
        assessment.priority_label, assessment.deadline_days
    );
    if let Some(due_on) = assessment.due_on {
        println!("- Due on: {due_on}");
    }
}

fn render_readiness(snapshot: &ReportSnapshot) {
    let report = ReadinessReport::evaluate(snapshot);

    for check in &report.gates {
        match (check.result.ok, check.result.message.as_deref()) {
            (true, _) => println!("- {}: ok", check.label),
            (false, Some(message)) => println!("- {}: {}", check.label, message),
            (false, None) => println!("- {}: failed", check.label),
        }
    }

    let summary = RiskSummary::from_entries(&snapshot.risks);
    let distribution = summary
        .by_tier
        .iter()
        .map(|entry| format!("{} {}", entry.tier_label, entry.count))
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Risk entries: {} ({distribution}; {} pending, {} unclassified)",
        summary.total, summary.pending, summary.unclassified
    );

    let outcome = report.outcome();
    if outcome.can_sign {
        println!("Report can be signed");
    } else {
        println!(
            "Report cannot be signed: {}",
            outcome.failed_gates.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_report_is_blocked_only_by_missing_action_plan() {
        let outcome = ReadinessReport::evaluate(&sample_snapshot()).outcome();

        assert!(!outcome.can_sign);
        assert_eq!(outcome.failed_gates, vec!["Gate E (Plano de Ação)"]);
    }

    #[test]
    fn demo_runs_with_fixed_date() {
        let args = DemoArgs {
            today: NaiveDate::from_ymd_opt(2025, 9, 1),
        };
        assert!(run_demo(args).is_ok());
    }

    #[test]
    fn score_command_rejects_unknown_levels() {
        let args = ScoreArgs {
            severity: 2.0,
            probability: 2.0,
            frequency: 1.0,
            identified_on: None,
        };

        match run_score(args) {
            Err(AppError::Factor(err)) => assert_eq!(err.value, 2.0),
            other => panic!("expected factor error, got {other:?}"),
        }
    }
}
