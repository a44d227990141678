//! Handlers for track zones and their tips (`/tracks/{id}/zones`).
//!
//! Any signed-in user may map zones and leave tips. A zone is only reachable
//! through the track it belongs to.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trackside_core::driving::DrivingCondition;
use trackside_core::error::CoreError;
use trackside_core::track::{validate_tip_content, validate_zone};
use trackside_db::models::zone::{CreateZone, CreateZoneTip, TrackZone, UpdateZone, ZoneWithTips};
use trackside_db::repositories::ZoneRepo;
use trackside_db::DbPool;

use super::tracks::find_track;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

async fn find_zone(pool: &DbPool, track_id: &str, zone_id: &str) -> AppResult<TrackZone> {
    ZoneRepo::find_for_track(pool, track_id, zone_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("TrackZone", zone_id)))
}

/// POST /api/tracks/{id}/zones
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(track_id): Path<String>,
    AppJson(input): AppJson<CreateZone>,
) -> AppResult<impl IntoResponse> {
    find_track(&state.pool, &track_id).await?;
    let event_type = validate_zone(
        &input.name,
        input.pos_x,
        input.pos_y,
        input.event_type.as_deref(),
    )?;

    let zone = ZoneRepo::create(&state.pool, &track_id, &input, event_type).await?;
    Ok((
        StatusCode::CREATED,
        Json(ZoneWithTips {
            zone,
            tips: Vec::new(),
        }),
    ))
}

/// PATCH /api/tracks/{id}/zones/{zone_id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((track_id, zone_id)): Path<(String, String)>,
    AppJson(input): AppJson<UpdateZone>,
) -> AppResult<impl IntoResponse> {
    find_track(&state.pool, &track_id).await?;
    find_zone(&state.pool, &track_id, &zone_id).await?;

    if input.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Core(CoreError::Validation(
            "Zone name is required".into(),
        )));
    }

    let zone = ZoneRepo::update(&state.pool, &zone_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("TrackZone", zone_id)))?;
    Ok(Json(zone))
}

/// DELETE /api/tracks/{id}/zones/{zone_id}
///
/// Tips on the zone are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path((track_id, zone_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    find_zone(&state.pool, &track_id, &zone_id).await?;
    ZoneRepo::delete(&state.pool, &zone_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/tracks/{id}/zones/{zone_id}/tips
pub async fn create_tip(
    State(state): State<AppState>,
    user: AuthUser,
    Path((track_id, zone_id)): Path<(String, String)>,
    AppJson(input): AppJson<CreateZoneTip>,
) -> AppResult<impl IntoResponse> {
    find_zone(&state.pool, &track_id, &zone_id).await?;
    validate_tip_content(&input.content)?;
    let conditions = DrivingCondition::parse_optional(input.conditions.as_deref())?;

    let tip =
        ZoneRepo::create_tip(&state.pool, &zone_id, &user.user_id, &input.content, conditions)
            .await?;
    Ok((StatusCode::CREATED, Json(tip)))
}
