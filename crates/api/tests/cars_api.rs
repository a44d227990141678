//! HTTP-level integration tests for the garage (`/api/cars`).

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = false)]
async fn create_car_echoes_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (user_id, token) = common::register_and_login(&app, "Owner", "owner@example.com").await;

    let response = post_json_auth(
        app.app(),
        "/api/cars",
        json!({ "make": "Honda", "model": "S2000", "year": 2020 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["make"], "Honda");
    assert_eq!(json["model"], "S2000");
    assert_eq!(json["year"], 2020);
    assert_eq!(json["userId"], user_id.as_str());
    assert_eq!(json["mods"], json!([]));
}

#[sqlx::test(migrations = false)]
async fn car_year_out_of_range_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Owner", "owner@example.com").await;

    for year in [1800, 2050] {
        let response = post_json_auth(
            app.app(),
            "/api/cars",
            json!({ "make": "Ford", "model": "Model T", "year": year }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "year {year}");
    }

    let response = post_json_auth(
        app.app(),
        "/api/cars",
        json!({ "make": "Ford", "model": "Mustang", "year": "new" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = false)]
async fn other_users_cars_are_invisible(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, owner) = common::register_and_login(&app, "Owner", "owner@example.com").await;
    let (_, intruder) = common::register_and_login(&app, "Intruder", "intruder@example.com").await;
    let car_id = common::create_car(&app, &owner).await;

    let uri = format!("/api/cars/{car_id}");
    let update = put_json_auth(
        app.app(),
        &uri,
        json!({ "make": "Fiat", "model": "Panda", "year": 2010 }),
        &intruder,
    )
    .await;
    assert_eq!(update.status(), StatusCode::NOT_FOUND);

    let delete = delete_auth(app.app(), &uri, &intruder).await;
    assert_eq!(delete.status(), StatusCode::NOT_FOUND);

    let listed = body_json(get_auth(app.app(), "/api/cars", &intruder).await).await;
    assert_eq!(listed, json!([]));

    let owned = body_json(get_auth(app.app(), "/api/cars", &owner).await).await;
    assert_eq!(owned.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = false)]
async fn owner_can_update_and_delete(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Owner", "owner@example.com").await;
    let car_id = common::create_car(&app, &token).await;
    let uri = format!("/api/cars/{car_id}");

    let response = put_json_auth(
        app.app(),
        &uri,
        json!({ "make": "Mazda", "model": "RX-8", "year": 2009 }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["model"], "RX-8");

    let response = delete_auth(app.app(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true }));

    let response = delete_auth(app.app(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn mods_are_added_validated_and_removed(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Owner", "owner@example.com").await;
    let (_, other) = common::register_and_login(&app, "Other", "other@example.com").await;
    let car_id = common::create_car(&app, &token).await;
    let mods_uri = format!("/api/cars/{car_id}/mods");

    let bad_category = post_json_auth(
        app.app(),
        &mods_uri,
        json!({ "name": "Turbo", "category": "MAGIC" }),
        &token,
    )
    .await;
    assert_eq!(bad_category.status(), StatusCode::BAD_REQUEST);

    let no_name = post_json_auth(
        app.app(),
        &mods_uri,
        json!({ "name": "", "category": "ENGINE" }),
        &token,
    )
    .await;
    assert_eq!(no_name.status(), StatusCode::BAD_REQUEST);

    let not_owner = post_json_auth(
        app.app(),
        &mods_uri,
        json!({ "name": "Turbo", "category": "ENGINE" }),
        &other,
    )
    .await;
    assert_eq!(not_owner.status(), StatusCode::NOT_FOUND);

    let created = post_json_auth(
        app.app(),
        &mods_uri,
        json!({ "name": "Turbo", "category": "ENGINE", "notes": "Garrett" }),
        &token,
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let mod_id = body_json(created).await["id"].as_str().unwrap().to_string();

    let cars = body_json(get_auth(app.app(), "/api/cars", &token).await).await;
    assert_eq!(cars[0]["mods"][0]["name"], "Turbo");

    let uri = format!("/api/cars/{car_id}/mods/{mod_id}");
    assert_eq!(
        delete_auth(app.app(), &uri, &other).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(delete_auth(app.app(), &uri, &token).await.status(), StatusCode::OK);
    assert_eq!(
        delete_auth(app.app(), &uri, &token).await.status(),
        StatusCode::NOT_FOUND
    );
}
