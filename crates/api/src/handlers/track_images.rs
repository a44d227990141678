//! Handlers for a track's image gallery (`/tracks/{id}/images`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use trackside_core::error::CoreError;
use trackside_core::upload::validate_image_url;
use trackside_db::models::track::CreateTrackImage;
use trackside_db::repositories::TrackImageRepo;

use super::tracks::find_track;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Query parameters for `DELETE /tracks/{id}/images`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteImageParams {
    pub image_id: Option<String>,
}

/// GET /api/tracks/{id}/images
///
/// An unknown track simply has no images.
pub async fn list(
    State(state): State<AppState>,
    Path(track_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let images = TrackImageRepo::list_for_track(&state.pool, &track_id).await?;
    Ok(Json(images))
}

/// POST /api/tracks/{id}/images
///
/// Attach an image link (usually a path returned by `POST /upload`).
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(track_id): Path<String>,
    AppJson(input): AppJson<CreateTrackImage>,
) -> AppResult<impl IntoResponse> {
    validate_image_url(&input.url)?;
    find_track(&state.pool, &track_id).await?;

    let image = TrackImageRepo::create(&state.pool, &track_id, &user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// DELETE /api/tracks/{id}/images?imageId=
///
/// Allowed for the track's uploader and for whoever added the image.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(track_id): Path<String>,
    Query(params): Query<DeleteImageParams>,
) -> AppResult<impl IntoResponse> {
    let image_id = params
        .image_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::BadRequest("imageId is required".into()))?;

    let track = find_track(&state.pool, &track_id).await?;
    let image = TrackImageRepo::find_for_track(&state.pool, &track_id, &image_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("TrackImage", image_id.as_str())))?;

    if track.uploaded_by_id != user.user_id && image.uploaded_by_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only delete images you added or from tracks you uploaded".into(),
        )));
    }

    TrackImageRepo::delete(&state.pool, &image.id).await?;
    Ok(Json(SuccessResponse::ok()))
}
