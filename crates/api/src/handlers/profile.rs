//! Handlers for the signed-in user's profile (`/profile`).

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use trackside_core::account::validate_profile_update;
use trackside_core::error::CoreError;
use trackside_db::models::user::{Profile, ProfileSummary, UpdateProfile};
use trackside_db::repositories::{CarRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/profile
///
/// Account details, garage and activity counters.
pub async fn get(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let account = UserRepo::find_by_id(&state.pool, &user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", user.user_id.as_str())))?;
    let cars = CarRepo::list_for_user(&state.pool, &account.id).await?;
    let count = UserRepo::counts(&state.pool, &account.id).await?;

    Ok(Json(Profile {
        id: account.id,
        name: account.name,
        email: account.email,
        experience: account.experience,
        image: account.image,
        created_at: account.created_at,
        cars,
        count,
    }))
}

/// PUT /api/profile
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(input): AppJson<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    let experience = validate_profile_update(&input.name, &input.experience)?;
    let updated = UserRepo::update_profile(&state.pool, &user.user_id, &input.name, experience)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", user.user_id.as_str())))?;
    Ok(Json(ProfileSummary::from(&updated)))
}
