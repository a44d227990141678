//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use trackside_core::account::is_admin_email;
use trackside_core::error::CoreError;
use trackside_core::types::EntityId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Message returned for every authentication failure, whatever the cause.
const UNAUTHORIZED: &str = "Unauthorized";

/// Authenticated user extracted from a JWT Bearer token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's id (from `claims.sub`).
    pub user_id: EntityId,
    /// The user's email (from `claims.email`).
    pub email: String,
}

impl AuthUser {
    /// Administrators are recognised by email; there are no role rows.
    pub fn is_admin(&self) -> bool {
        is_admin_email(&self.email)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let unauthorized = || AppError::Core(CoreError::Unauthorized(UNAUTHORIZED.into()));

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(unauthorized)?;

        let token = bearer_token(auth_header).ok_or_else(unauthorized)?;

        let claims = validate_token(token, state.jwt()).map_err(|e| {
            tracing::debug!(error = %e, "Rejected bearer token");
            unauthorized()
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

/// Extract the token from a `Bearer <token>` header value. The scheme is
/// matched case-insensitively.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
