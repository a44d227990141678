//! Administrative handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use trackside_core::import::{parse_import_file, SyncSummary};
use trackside_db::models::track::ImportOutcome;
use trackside_db::repositories::{TrackRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Response body for `POST /admin/sync-tracks`.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub status: &'static str,
    pub summary: SyncSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// POST /api/admin/sync-tracks
///
/// Upsert every track in `<DATA_DIR>/usa-tracks.json`, keyed on name and
/// location. A bad row is reported in `errors` and does not stop the run.
pub async fn sync_tracks(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<SyncResponse>> {
    let path = state.import_file_path();
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| AppError::SyncFailed(format!("{}: {e}", path.display())))?;
    let rows = parse_import_file(&contents).map_err(|e| AppError::SyncFailed(e.to_string()))?;

    let system_user = UserRepo::find_or_create_system(&state.pool)
        .await
        .map_err(|e| AppError::SyncFailed(e.to_string()))?;

    let mut summary = SyncSummary {
        total: rows.len(),
        ..Default::default()
    };
    let mut errors = Vec::new();

    for row in &rows {
        let outcome = match row.event_types() {
            Ok(types) => TrackRepo::upsert_imported(&state.pool, &system_user.id, row, &types)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match outcome {
            Ok(ImportOutcome::Created) => summary.created += 1,
            Ok(ImportOutcome::Updated) => summary.updated += 1,
            Err(e) => {
                tracing::warn!(track = %row.name, error = %e, "Failed to import track");
                summary.failed += 1;
                errors.push(format!("{}: {e}", row.name));
            }
        }
    }

    tracing::info!(
        admin_id = %admin.user_id,
        total = summary.total,
        created = summary.created,
        updated = summary.updated,
        failed = summary.failed,
        "Track sync finished"
    );

    Ok(Json(SyncResponse {
        status: "success",
        summary,
        errors,
    }))
}
