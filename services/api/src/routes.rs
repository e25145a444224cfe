use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use lending_ai::error::AppError;
use lending_ai::workflows::loans::applications::{
    application_router, ApplicationRepository, EligibilityEngine, FactorNote, IntakeGuard,
    LoanApplication, LoanApplicationService, NoticePublisher,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct EligibilityResponse {
    pub(crate) outcome: &'static str,
    pub(crate) dti_ratio: f64,
    pub(crate) explanation: String,
    pub(crate) factors: Vec<FactorNote>,
}

pub(crate) fn with_application_routes<R, N>(
    service: Arc<LoanApplicationService<R, N>>,
) -> axum::Router
where
    R: ApplicationRepository + 'static,
    N: NoticePublisher + 'static,
{
    application_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/loans/eligibility",
            axum::routing::post(eligibility_endpoint),
        )
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

/// One-shot screening: no record is created, the decision is returned directly.
pub(crate) async fn eligibility_endpoint(
    Extension(engine): Extension<Arc<EligibilityEngine>>,
    Json(application): Json<LoanApplication>,
) -> Result<Json<EligibilityResponse>, AppError> {
    let application = IntakeGuard.screen(application)?;
    let result = engine.evaluate(&application);

    Ok(Json(EligibilityResponse {
        outcome: result.decision.label(),
        dti_ratio: result.dti_ratio,
        explanation: result.explanation,
        factors: result.factors,
    }))
}
