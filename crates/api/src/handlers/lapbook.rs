//! Handlers for the caller's private lapbook (`/lapbook`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trackside_core::driving::{validate_lap_record, DrivingCondition};
use trackside_core::error::CoreError;
use trackside_db::models::lap_record::{CreateLapRecord, LapRecordFilter};
use trackside_db::repositories::{CarRepo, LapbookRepo};

use super::reviews::check_track_event;
use super::tracks::find_track;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /api/lapbook?trackId=&carId=&eventType=
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(filter): Query<LapRecordFilter>,
) -> AppResult<impl IntoResponse> {
    let records = LapbookRepo::list_for_driver(&state.pool, &user.user_id, &filter).await?;
    Ok(Json(records))
}

/// POST /api/lapbook
///
/// Log a lap driven in one of the caller's cars, with optional setup data.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateLapRecord>,
) -> AppResult<impl IntoResponse> {
    validate_lap_record(&input.lap_time, &input.track_id, &input.car_id)?;
    let conditions = DrivingCondition::parse(&input.conditions)?;

    CarRepo::find_by_id_and_user(&state.pool, &input.car_id, &user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("Car", input.car_id.as_str())))?;
    find_track(&state.pool, &input.track_id).await?;
    check_track_event(&state.pool, &input.track_id, input.track_event_id.as_deref()).await?;

    let record = LapbookRepo::create(&state.pool, &user.user_id, &input, conditions).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /api/lapbook/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !LapbookRepo::delete(&state.pool, &id, &user.user_id).await? {
        return Err(AppError::Core(CoreError::not_found("LapRecord", id)));
    }
    Ok(Json(SuccessResponse::ok()))
}
