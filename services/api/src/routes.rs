use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use decision_support::analysis::{
    form_catalog, score, AnalysisView, CaseAttributesDraft, FieldCatalog,
};
use decision_support::error::AppError;
use decision_support::session::{session_router, SessionService, SessionStore};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub(crate) fn with_routes<S>(service: Arc<SessionService<S>>) -> axum::Router
where
    S: SessionStore + 'static,
{
    session_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/analysis", axum::routing::post(analysis_endpoint))
        .route("/api/v1/catalog", axum::routing::get(catalog_endpoint))
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

/// Scores a case without touching any session.
pub(crate) async fn analysis_endpoint(
    Json(draft): Json<CaseAttributesDraft>,
) -> Result<Json<AnalysisView>, AppError> {
    let attributes = draft.complete()?;
    let result = score(&attributes);
    info!(
        top_charge = attributes.top_charge.statute(),
        high_risk = result.indicators.high_risk,
        "stateless analysis scored"
    );
    Ok(Json(result.view()))
}

pub(crate) async fn catalog_endpoint() -> Json<Vec<FieldCatalog>> {
    Json(form_catalog())
}
