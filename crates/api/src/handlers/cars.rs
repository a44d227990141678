//! Handlers for the `/cars` resource and its mods.
//!
//! Cars are private to their owner. A car that exists but belongs to someone
//! else is reported exactly like a missing one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use trackside_core::error::CoreError;
use trackside_core::garage::{validate_car, validate_car_mod};
use trackside_db::models::car::{CreateCar, CreateCarMod};
use trackside_db::repositories::CarRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn car_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::not_found("Car", id))
}

// ---------------------------------------------------------------------------
// Cars
// ---------------------------------------------------------------------------

/// GET /api/cars
///
/// The caller's cars, newest first, with their mods.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let cars = CarRepo::list_for_user(&state.pool, &user.user_id).await?;
    Ok(Json(cars))
}

/// POST /api/cars
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<CreateCar>,
) -> AppResult<impl IntoResponse> {
    validate_car(&input.make, &input.model, input.year)?;
    let car = CarRepo::create(&state.pool, &user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(car)))
}

/// PUT /api/cars/{id}
///
/// Replace make, model and year of an owned car.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    AppJson(input): AppJson<CreateCar>,
) -> AppResult<impl IntoResponse> {
    validate_car(&input.make, &input.model, input.year)?;
    let car = CarRepo::update(&state.pool, &id, &user.user_id, &input)
        .await?
        .ok_or_else(|| car_not_found(&id))?;
    Ok(Json(car))
}

/// DELETE /api/cars/{id}
///
/// Mods and lap records of the car are removed with it.
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    if !CarRepo::delete(&state.pool, &id, &user.user_id).await? {
        return Err(car_not_found(&id));
    }
    Ok(Json(SuccessResponse::ok()))
}

// ---------------------------------------------------------------------------
// Mods
// ---------------------------------------------------------------------------

/// POST /api/cars/{id}/mods
pub async fn create_mod(
    State(state): State<AppState>,
    user: AuthUser,
    Path(car_id): Path<String>,
    AppJson(input): AppJson<CreateCarMod>,
) -> AppResult<impl IntoResponse> {
    CarRepo::find_by_id_and_user(&state.pool, &car_id, &user.user_id)
        .await?
        .ok_or_else(|| car_not_found(&car_id))?;

    let category = validate_car_mod(&input.name, &input.category)?;
    let car_mod = CarRepo::create_mod(&state.pool, &car_id, &input, category).await?;
    Ok((StatusCode::CREATED, Json(car_mod)))
}

/// DELETE /api/cars/{id}/mods/{mod_id}
pub async fn delete_mod(
    State(state): State<AppState>,
    user: AuthUser,
    Path((car_id, mod_id)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    CarRepo::find_by_id_and_user(&state.pool, &car_id, &user.user_id)
        .await?
        .ok_or_else(|| car_not_found(&car_id))?;

    if !CarRepo::delete_mod(&state.pool, &car_id, &mod_id).await? {
        return Err(AppError::Core(CoreError::not_found("CarMod", mod_id)));
    }
    Ok(Json(SuccessResponse::ok()))
}
