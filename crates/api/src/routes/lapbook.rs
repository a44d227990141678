//! Route definitions for the `/lapbook` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::lapbook;
use crate::state::AppState;

/// Routes mounted at `/lapbook`. All require authentication.
///
/// ```text
/// GET    /        -> list (?trackId=&carId=&eventType=)
/// POST   /        -> create
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lapbook::list).post(lapbook::create))
        .route("/{id}", delete(lapbook::delete))
}
