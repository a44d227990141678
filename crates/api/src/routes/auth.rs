//! Public account routes: registration and login.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Merged directly into `/api`, since registration sits outside `/auth`.
///
/// ```text
/// POST /register      -> register
/// POST /auth/login    -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}
