//! Handler for reviewing a track (`POST /tracks/{id}/reviews`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trackside_core::driving::{validate_rating, DrivingCondition};
use trackside_db::models::review::CreateReview;
use trackside_db::repositories::{ReviewRepo, TrackRepo};
use trackside_db::DbPool;

use super::tracks::find_track;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Reject a supplied event id that is not one of the track's events.
pub(crate) async fn check_track_event(
    pool: &DbPool,
    track_id: &str,
    event_id: Option<&str>,
) -> AppResult<()> {
    let Some(event_id) = event_id.filter(|id| !id.is_empty()) else {
        return Ok(());
    };
    if TrackRepo::find_event_for_track(pool, track_id, event_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(
            "Event does not belong to this track".into(),
        ));
    }
    Ok(())
}

/// POST /api/tracks/{id}/reviews
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(track_id): Path<String>,
    AppJson(input): AppJson<CreateReview>,
) -> AppResult<impl IntoResponse> {
    find_track(&state.pool, &track_id).await?;
    validate_rating(input.rating)?;
    let conditions = DrivingCondition::parse(&input.conditions)?;
    check_track_event(&state.pool, &track_id, input.track_event_id.as_deref()).await?;

    let review =
        ReviewRepo::create(&state.pool, &track_id, &user.user_id, &input, conditions).await?;
    Ok((StatusCode::CREATED, Json(review)))
}
