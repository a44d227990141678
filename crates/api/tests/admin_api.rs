//! HTTP-level integration tests for the track import endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json_auth};
use serde_json::json;
use sqlx::SqlitePool;
use trackside_core::import::IMPORT_FILE_NAME;

fn write_import_file(app: &common::TestApp, contents: serde_json::Value) {
    std::fs::write(app.data_dir.join(IMPORT_FILE_NAME), contents.to_string()).unwrap();
}

#[sqlx::test(migrations = false)]
async fn sync_requires_admin(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Driver", "driver@example.com").await;

    let response = post_json_auth(app.app(), "/api/admin/sync-tracks", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin access required");
}

#[sqlx::test(migrations = false)]
async fn sync_without_data_file_fails(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Admin", "admin@example.com").await;

    let response = post_json_auth(app.app(), "/api/admin/sync-tracks", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Sync failed");
    assert!(json["details"].is_string());
}

#[sqlx::test(migrations = false)]
async fn sync_upserts_tracks_and_reports_bad_rows(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Admin", "admin@example.com").await;

    write_import_file(
        &app,
        json!({ "tracks": [
            {
                "name": "Gingerman Raceway", "location": "South Haven, MI", "state": "MI",
                "types": ["roadcourse", "Drift"], "latitude": 42.4, "longitude": -86.1,
                "description": "Flat and technical"
            },
            {
                "name": "Bandimere", "location": "Morrison, CO", "state": "CO",
                "types": ["DRAG"], "latitude": 39.6, "longitude": -105.2, "description": ""
            },
            {
                "name": "Mystery Rallycross", "location": "Nowhere, NV", "state": "NV",
                "types": ["RALLY"], "latitude": 0.0, "longitude": 0.0, "description": ""
            }
        ]}),
    );

    let response = post_json_auth(app.app(), "/api/admin/sync-tracks", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    assert_eq!(
        json["summary"],
        json!({ "total": 3, "created": 2, "updated": 0, "failed": 1 })
    );
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].as_str().unwrap().starts_with("Mystery Rallycross:"));

    let listed = body_json(get(app.app(), "/api/tracks?state=mi").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["isImported"], true);
    assert_eq!(listed[0]["uploadedBy"]["name"], "Trackside System");
    assert_eq!(listed[0]["events"].as_array().unwrap().len(), 2);

    let rerun = body_json(
        post_json_auth(app.app(), "/api/admin/sync-tracks", json!({}), &token).await,
    )
    .await;
    assert_eq!(
        rerun["summary"],
        json!({ "total": 3, "created": 0, "updated": 2, "failed": 1 })
    );

    let all = body_json(get(app.app(), "/api/tracks").await).await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = false)]
async fn sync_with_malformed_file_fails(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Admin", "admin@example.com").await;
    std::fs::write(app.data_dir.join(IMPORT_FILE_NAME), "{ not json").unwrap();

    let response = post_json_auth(app.app(), "/api/admin/sync-tracks", json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["error"], "Sync failed");
}
