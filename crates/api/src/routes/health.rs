//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// Individual dependency checks.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// `SELECT 1` succeeded.
    pub database: bool,
    /// The upload root exists and is a directory.
    pub uploads: bool,
}

/// GET /health
///
/// 200 with `status: "ok"` when every check passes, 503 with
/// `status: "degraded"` otherwise.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = trackside_db::health_check(&state.pool).await.is_ok();
    let uploads = tokio::fs::metadata(state.upload_root())
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);

    let (code, status) = if database && uploads {
        (StatusCode::OK, "ok")
    } else {
        tracing::warn!(database, uploads, "Health check degraded");
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: HealthChecks { database, uploads },
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
