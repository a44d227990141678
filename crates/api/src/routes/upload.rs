//! Route definitions for `/upload`.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use trackside_core::upload::MAX_UPLOAD_BYTES;

use crate::handlers::upload;
use crate::state::AppState;

/// Request body limit for uploads. Kept above [`MAX_UPLOAD_BYTES`] so an
/// oversized image is rejected by the handler with a 400.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES * 2;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST /    -> upload_image (multipart, field "file")
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload_image))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
