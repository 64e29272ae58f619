use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use nr12_core::assessment::{
    classify_risk_tier, derive_priority, GateCheck, ReadinessReport, RemediationPlan,
    RemediationPriority, ReportSnapshot, RiskAssessment, RiskSummary, RiskTier,
};
use nr12_core::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) severity: f64,
    pub(crate) probability: f64,
    pub(crate) frequency: f64,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) identified_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClassifyRequest {
    pub(crate) hrn_number: f64,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) identified_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ClassifyResponse {
    pub(crate) hrn_number: f64,
    pub(crate) tier: RiskTier,
    pub(crate) tier_label: &'static str,
    pub(crate) priority: RemediationPriority,
    pub(crate) deadline_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) due_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReadinessResponse {
    pub(crate) can_sign: bool,
    pub(crate) failed_gates: Vec<String>,
    pub(crate) gates: Vec<GateCheck>,
    pub(crate) risk_summary: RiskSummary,
}

pub(crate) fn assessment_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/risk/score", post(score_endpoint))
        .route("/api/v1/risk/classify", post(classify_endpoint))
        .route("/api/v1/reports/readiness", post(report_readiness_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<RiskAssessment>, AppError> {
    let ScoreRequest {
        severity,
        probability,
        frequency,
        identified_on,
    } = payload;

    let assessment = RiskAssessment::from_values(severity, probability, frequency, identified_on)
        .map_err(|err| {
            warn!(%err, "rejected hazard factors");
            AppError::from(err)
        })?;

    info!(
        hrn = assessment.hrn.value(),
        tier = assessment.tier_label.as_str(),
        "hazard scored"
    );
    Ok(Json(assessment))
}

/// Classifies a score already stored on a risk entry.
pub(crate) async fn classify_endpoint(
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let ClassifyRequest {
        hrn_number,
        identified_on,
    } = payload;

    let tier = classify_risk_tier(hrn_number)?;
    let priority = derive_priority(hrn_number)?;
    let due_on = identified_on
        .map(|date| RemediationPlan::from_score(hrn_number, date))
        .transpose()?
        .map(|plan| plan.due_on);

    Ok(Json(ClassifyResponse {
        hrn_number,
        tier,
        tier_label: tier.label(),
        priority,
        deadline_days: priority.deadline_days(),
        due_on,
    }))
}

pub(crate) async fn report_readiness_endpoint(
    Json(snapshot): Json<ReportSnapshot>,
) -> Json<ReadinessResponse> {
    let report = ReadinessReport::evaluate(&snapshot);
    let outcome = report.outcome();

    info!(
        can_sign = outcome.can_sign,
        failed = outcome.failed_gates.len(),
        "report readiness evaluated"
    );

    Json(ReadinessResponse {
        can_sign: outcome.can_sign,
        failed_gates: outcome.failed_gates,
        gates: report.gates,
        risk_summary: RiskSummary::from_entries(&snapshot.risks),
    })
}
