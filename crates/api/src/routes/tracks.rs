//! Route definitions for the `/tracks` resource and its sub-resources.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{reviews, track_images, tracks, zones};
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET    /                                 -> list (public)
/// POST   /                                 -> create
/// GET    /{id}                             -> get_by_id (public)
/// PATCH  /{id}                             -> update (uploader only)
/// GET    /{id}/images                      -> track_images::list (public)
/// POST   /{id}/images                      -> track_images::create
/// DELETE /{id}/images?imageId=             -> track_images::delete
/// POST   /{id}/reviews                     -> reviews::create
/// POST   /{id}/zones                       -> zones::create
/// PATCH  /{id}/zones/{zone_id}             -> zones::update
/// DELETE /{id}/zones/{zone_id}             -> zones::delete
/// POST   /{id}/zones/{zone_id}/tips        -> zones::create_tip
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tracks::list).post(tracks::create))
        .route("/{id}", get(tracks::get_by_id).patch(tracks::update))
        .route(
            "/{id}/images",
            get(track_images::list)
                .post(track_images::create)
                .delete(track_images::delete),
        )
        .route("/{id}/reviews", post(reviews::create))
        .route("/{id}/zones", post(zones::create))
        .route(
            "/{id}/zones/{zone_id}",
            patch(zones::update).delete(zones::delete),
        )
        .route("/{id}/zones/{zone_id}/tips", post(zones::create_tip))
}
