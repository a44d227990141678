pub mod admin;
pub mod auth;
pub mod cars;
pub mod health;
pub mod lapbook;
pub mod profile;
pub mod tracks;
pub mod upload;
pub mod uploads;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                                        register (public)
/// /auth/login                                      login (public)
///
/// /cars                                            list, create
/// /cars/{id}                                       update, delete
/// /cars/{id}/mods                                  add mod
/// /cars/{id}/mods/{mod_id}                         remove mod
///
/// /tracks                                          list (public), create
/// /tracks/{id}                                     detail (public), edit
/// /tracks/{id}/images                              list (public), add, delete (?imageId=)
/// /tracks/{id}/reviews                             review
/// /tracks/{id}/zones                               create zone
/// /tracks/{id}/zones/{zone_id}                     edit, delete zone
/// /tracks/{id}/zones/{zone_id}/tips                add tip
///
/// /lapbook                                         list, create
/// /lapbook/{id}                                    delete
///
/// /profile                                         get, update
/// /upload                                          image upload (multipart)
///
/// /admin/sync-tracks                               import tracks (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration and login.
        .merge(auth::router())
        // Garage.
        .nest("/cars", cars::router())
        // Tracks with their gallery, zones and reviews.
        .nest("/tracks", tracks::router())
        // Private lap log.
        .nest("/lapbook", lapbook::router())
        .nest("/profile", profile::router())
        .nest("/upload", upload::router())
        .nest("/admin", admin::router())
}
