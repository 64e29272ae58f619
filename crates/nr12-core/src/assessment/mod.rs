//! NR-12 assessment rules: HRN risk scoring and report signing readiness.
//!
//! Everything here is a pure evaluation over caller-supplied snapshots. There
//! is no I/O and no shared state, so any function may be called concurrently.

pub mod domain;
pub mod readiness;
pub mod scoring;
pub mod summary;

#[cfg(test)]
mod tests;

pub use domain::{
    ActionItem, ActionPriority, ChecklistResponse, ChecklistStatus, Machine, RiskEntry,
};
pub use readiness::{
    evaluate_all_gates, Gate, GateCheck, GateResult, ReadinessOutcome, ReadinessReport,
    ReportSnapshot,
};
pub use scoring::{
    classify_risk_tier, compute_hazard_score, derive_priority, standard_deadline_days,
    DeadlineError, FactorKind, Frequency, HazardScore, InvalidFactorError, Probability,
    RemediationPlan, RemediationPriority, RiskAssessment, RiskTier, ScoreError, Severity,
};
pub use summary::{RiskSummary, TierCountEntry};
