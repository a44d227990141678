//! Handlers for the `/tracks` resource.
//!
//! Listing and detail are public. Creating requires a signed-in user, and
//! editing is limited to the track's uploader.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use trackside_core::error::CoreError;
use trackside_core::track::{normalize_state_filter, validate_new_track, validate_track_patch};
use trackside_db::models::track::{CreateTrack, Track, TrackFilter, UpdateTrack};
use trackside_db::repositories::TrackRepo;
use trackside_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /tracks/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDetailParams {
    /// Only include zones tagged with this event type.
    pub event_type: Option<String>,
}

/// Load a track or fail with 404.
pub(crate) async fn find_track(pool: &DbPool, id: &str) -> AppResult<Track> {
    TrackRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Track", id)))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/tracks?search=&eventType=&state=
///
/// Approved tracks, newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TrackFilter>,
) -> AppResult<impl IntoResponse> {
    let filter = TrackFilter {
        state: normalize_state_filter(params.state.as_deref()),
        ..params
    };
    let tracks = TrackRepo::list_approved(&state.pool, &filter).await?;
    Ok(Json(tracks))
}

/// POST /api/tracks
///
/// Submit a track. User submissions are approved immediately.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateTrack>,
) -> AppResult<impl IntoResponse> {
    let event_types = validate_new_track(&input.name, &input.location, &input.event_types)?;

    let item = TrackRepo::create(&state.pool, &user.user_id, &input, &event_types)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Core(CoreError::Conflict(
                    "A track with this name and location already exists".into(),
                ))
            }
            other => AppError::Database(other),
        })?;

    tracing::info!(track_id = %item.track.id, user_id = %user.user_id, "Track created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/tracks/{id}?eventType=
///
/// Full track page with zones, tips and reviews.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<TrackDetailParams>,
) -> AppResult<impl IntoResponse> {
    let detail = TrackRepo::find_detail(&state.pool, &id, params.event_type.as_deref())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Track", id)))?;
    Ok(Json(detail))
}

/// PATCH /api/tracks/{id}
///
/// Edit name, description, location or image. Only supplied fields change.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateTrack>,
) -> AppResult<impl IntoResponse> {
    let track = find_track(&state.pool, &id).await?;
    if track.uploaded_by_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only edit tracks you uploaded".into(),
        )));
    }

    validate_track_patch(input.name.as_deref(), input.location.as_deref())?;

    let updated = TrackRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Track", id)))?;
    Ok(Json(updated))
}
