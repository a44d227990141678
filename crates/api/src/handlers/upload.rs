//! Image upload and serving of uploaded files.
//!
//! Uploads are written to `<UPLOAD_DIR>/tracks/` under a fresh UUID name and
//! served back from `/uploads/...`. Nothing is recorded in the database.

use axum::body::Body;
use axum::extract::{Multipart, Path, Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use trackside_core::upload::{
    sanitize_upload_path, stored_extension, validate_upload, TRACK_UPLOAD_SUBDIR,
};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for a stored upload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub image_url: String,
}

/// POST /api/upload
///
/// Accepts a multipart form with a required `file` field.
pub async fn upload_image(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file: Option<(Option<String>, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file = Some((file_name, content_type, data.to_vec()));
    }

    let (file_name, content_type, data) =
        file.ok_or_else(|| AppError::BadRequest("No file provided".into()))?;

    let default_ext = validate_upload(&content_type, data.len())?;
    let ext = stored_extension(file_name.as_deref(), default_ext);
    let stored_name = format!("{}{ext}", Uuid::new_v4());

    let dir = state.track_upload_dir();
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    tokio::fs::write(dir.join(&stored_name), &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(user_id = %user.user_id, file = %stored_name, bytes = data.len(), "Upload stored");
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            image_url: format!("/uploads/{TRACK_UPLOAD_SUBDIR}/{stored_name}"),
        }),
    ))
}

/// GET /uploads/{*path}
///
/// Stream a previously uploaded file. `..` sequences are stripped from the
/// requested path before it is resolved against the upload directory.
pub async fn serve(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request,
) -> AppResult<Response> {
    let relative = sanitize_upload_path(&path);
    let not_found = || AppError::NotFound("File not found".into());
    if relative.is_empty() {
        return Err(not_found());
    }

    let full_path = state.upload_root().join(&relative);
    let is_file = tokio::fs::metadata(&full_path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(not_found());
    }

    let response = ServeFile::new(full_path)
        .oneshot(request)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    Ok(response.map(Body::new))
}
