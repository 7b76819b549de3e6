use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{SessionService, SessionServiceError};
use super::store::{SessionId, SessionStore, SessionStoreError};
use super::SessionError;
use crate::analysis::CaseAttributesDraft;

#[derive(Debug, Default, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub username: String,
}

/// Router builder exposing the session workflow over HTTP.
pub fn session_router<S>(service: Arc<SessionService<S>>) -> Router
where
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/sessions", post(open_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id",
            get(view_handler::<S>).delete(close_handler::<S>),
        )
        .route(
            "/api/v1/sessions/:session_id/sign-in",
            post(sign_in_handler::<S>),
        )
        .route("/api/v1/sessions/:session_id/case", post(submit_handler::<S>))
        .route("/api/v1/sessions/:session_id/back", post(back_handler::<S>))
        .route(
            "/api/v1/sessions/:session_id/sign-out",
            post(sign_out_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn open_handler<S>(State(service): State<Arc<SessionService<S>>>) -> Response
where
    S: SessionStore + 'static,
{
    match service.open() {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(err) => error_response(None, err),
    }
}

pub(crate) async fn view_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.get(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => error_response(Some(&id), err),
    }
}

pub(crate) async fn close_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.close(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(Some(&id), err),
    }
}

pub(crate) async fn sign_in_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
    Json(request): Json<SignInRequest>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.sign_in(&id, &request.username).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => error_response(Some(&id), err),
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
    Json(draft): Json<CaseAttributesDraft>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.submit(&id, &draft) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => error_response(Some(&id), err),
    }
}

pub(crate) async fn back_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.back(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => error_response(Some(&id), err),
    }
}

pub(crate) async fn sign_out_handler<S>(
    State(service): State<Arc<SessionService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
{
    let id = SessionId(session_id);
    match service.sign_out(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => error_response(Some(&id), err),
    }
}

fn error_response(id: Option<&SessionId>, err: SessionServiceError) -> Response {
    match err {
        SessionServiceError::Store(SessionStoreError::NotFound) => {
            let payload = json!({
                "error": "session not found",
                "session_id": id.map(|id| id.0.as_str()),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        SessionServiceError::Session(SessionError::Incomplete(incomplete)) => {
            let missing: Vec<_> = incomplete.missing.iter().map(|field| field.key()).collect();
            let payload = json!({
                "error": incomplete.to_string(),
                "missing_fields": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        SessionServiceError::Session(SessionError::UnknownLabel(unknown)) => {
            let payload = json!({
                "error": unknown.to_string(),
                "field": unknown.field.key(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        SessionServiceError::Session(err @ SessionError::InvalidTransition { .. }) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        SessionServiceError::Store(SessionStoreError::Conflict) => {
            let payload = json!({ "error": "session already exists" });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        other => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
