//! Request extractors shared by the handlers.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections are reported through [`AppError`], so a
/// malformed or mistyped body is a 400 with the usual error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
