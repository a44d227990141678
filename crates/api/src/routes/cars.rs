//! Route definitions for the `/cars` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::cars;
use crate::state::AppState;

/// Routes mounted at `/cars`. All require authentication.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// POST   /{id}/mods             -> create_mod
/// DELETE /{id}/mods/{mod_id}    -> delete_mod
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cars::list).post(cars::create))
        .route("/{id}", put(cars::update).delete(cars::delete))
        .route("/{id}/mods", post(cars::create_mod))
        .route("/{id}/mods/{mod_id}", delete(cars::delete_mod))
}
