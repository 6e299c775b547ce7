//! Liveness and readiness for both servers. The API is ready once its entity tables are
//! visible; the admin frontend is ready once the API says it is.

use crate::admin::AdminState;
use crate::response::{success_message, Envelope};
use crate::state::AppState;
use crate::store;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

async fn health() -> impl IntoResponse {
    success_message("ok")
}

fn not_ready(message: impl Into<String>) -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, Json(Envelope::<()>::failure(message))).into_response()
}

async fn api_ready(State(state): State<AppState>) -> Response {
    match store::missing_tables(&state.pool).await {
        Ok(missing) if missing.is_empty() => success_message("ready").into_response(),
        Ok(missing) => {
            tracing::warn!(missing = ?missing, "readiness: tables missing");
            not_ready(format!("missing tables: {}", missing.join(", ")))
        }
        Err(e) => {
            tracing::warn!(error = %e, "readiness: database unreachable");
            not_ready("database unavailable")
        }
    }
}

async fn admin_ready(State(state): State<AdminState>) -> Response {
    match state.backend.ready().await {
        Ok(()) => success_message("ready").into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "readiness: backend not ready");
            not_ready("backend unavailable")
        }
    }
}

/// `GET /health` and `GET /ready` for the API server.
pub fn api_health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(api_ready))
        .with_state(state)
}

/// `GET /health` and `GET /ready` for the admin frontend.
pub fn admin_health_routes(state: AdminState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(admin_ready))
        .with_state(state)
}
