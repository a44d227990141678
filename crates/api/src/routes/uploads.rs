//! Static serving of uploaded files (mounted at the root, not under `/api`).

use axum::routing::get;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// ```text
/// GET /uploads/{*path}    -> serve
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/uploads/{*path}", get(upload::serve))
}
