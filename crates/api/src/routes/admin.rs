//! Route definitions for the `/admin` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require an administrator.
///
/// ```text
/// POST /sync-tracks    -> sync_tracks
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/sync-tracks", post(admin::sync_tracks))
}
