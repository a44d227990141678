//! Administrator gate for the `/admin` routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use trackside_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// An authenticated administrator. A signed-in non-admin gets 403; a
/// missing or bad token is still 401.
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.is_admin() {
            Ok(RequireAdmin(user))
        } else {
            tracing::warn!(user_id = %user.user_id, "Non-admin attempted an admin action");
            Err(AppError::Core(CoreError::Forbidden(
                "Admin access required".into(),
            )))
        }
    }
}
