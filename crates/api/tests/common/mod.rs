//! Shared helpers for the HTTP integration tests.
//!
//! Each test gets its own SQLite database from `#[sqlx::test]` and its own
//! temporary upload and data directories.

#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use trackside_api::auth::jwt::JwtConfig;
use trackside_api::config::ServerConfig;
use trackside_api::router::build_app_router;
use trackside_api::state::AppState;

/// Secret used to sign tokens in tests.
pub const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Password used by [`register_and_login`].
pub const TEST_PASSWORD: &str = "pit-lane-123";

/// Build a test `ServerConfig` pointing at the given directories.
pub fn test_config(upload_dir: PathBuf, data_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        upload_dir,
        data_dir,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiry_hours: 24,
        },
    }
}

/// A router wired to a fresh schema, plus the directories it writes to.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub upload_dir: PathBuf,
    pub data_dir: PathBuf,
    _dirs: TempDir,
}

impl TestApp {
    /// A clone of the router, ready for one `oneshot` request.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Bootstrap the schema and build the full application router, with the same
/// middleware stack production uses.
pub async fn build_test_app(pool: SqlitePool) -> TestApp {
    trackside_db::init_schema(&pool)
        .await
        .expect("schema bootstrap should succeed");

    let dirs = tempfile::tempdir().expect("tempdir should be created");
    let upload_dir = dirs.path().join("uploads");
    let data_dir = dirs.path().join("data");
    std::fs::create_dir_all(&upload_dir).unwrap();
    std::fs::create_dir_all(&data_dir).unwrap();

    let config = test_config(upload_dir.clone(), data_dir.clone());
    let state = AppState::new(pool.clone(), config.clone());

    TestApp {
        router: build_app_router(state, &config),
        pool,
        upload_dir,
        data_dir,
        _dirs: dirs,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Register a user through the API, log in, and return `(user_id, token)`.
pub async fn register_and_login(app: &TestApp, name: &str, email: &str) -> (String, String) {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": TEST_PASSWORD,
        "confirmPassword": TEST_PASSWORD,
    });
    let response = post_json(app.app(), "/api/register", body).await;
    assert_eq!(response.status(), 201, "registration should succeed");

    let body = serde_json::json!({ "email": email, "password": TEST_PASSWORD });
    let response = post_json(app.app(), "/api/auth/login", body).await;
    assert_eq!(response.status(), 200, "login should succeed");
    let json = body_json(response).await;

    (
        json["user"]["id"].as_str().unwrap().to_string(),
        json["token"].as_str().unwrap().to_string(),
    )
}

/// Create a track through the API and return its JSON.
pub async fn create_track(app: &TestApp, token: &str, name: &str, location: &str) -> Value {
    let body = serde_json::json!({
        "name": name,
        "location": location,
        "description": "A test circuit",
        "eventTypes": ["ROADCOURSE", "DRIFT"],
    });
    let response = post_json_auth(app.app(), "/api/tracks", body, token).await;
    assert_eq!(response.status(), 201, "track creation should succeed");
    body_json(response).await
}

/// Create a car through the API and return its id.
pub async fn create_car(app: &TestApp, token: &str) -> String {
    let body = serde_json::json!({ "make": "Mazda", "model": "MX-5", "year": 2020 });
    let response = post_json_auth(app.app(), "/api/cars", body, token).await;
    assert_eq!(response.status(), 201, "car creation should succeed");
    body_json(response).await["id"].as_str().unwrap().to_string()
}
