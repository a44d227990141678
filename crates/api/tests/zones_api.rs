//! HTTP-level integration tests for track zones and zone tips.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, patch_json_auth, post_json, post_json_auth};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = false)]
async fn zones_are_mapped_and_tipped(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (user_id, token) = common::register_and_login(&app, "Mapper", "map@example.com").await;
    let track = common::create_track(&app, &token, "Watkins Glen", "Watkins Glen, NY").await;
    let track_id = track["id"].as_str().unwrap();

    let response = post_json_auth(
        app.app(),
        &format!("/api/tracks/{track_id}/zones"),
        json!({ "name": "The Boot", "posX": 42.5, "posY": 10, "eventType": "ROADCOURSE" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let zone = body_json(response).await;
    assert_eq!(zone["name"], "The Boot");
    assert_eq!(zone["posX"], 42.5);
    assert_eq!(zone["eventType"], "ROADCOURSE");
    assert_eq!(zone["tips"], json!([]));
    let zone_id = zone["id"].as_str().unwrap();

    let tip = post_json_auth(
        app.app(),
        &format!("/api/tracks/{track_id}/zones/{zone_id}/tips"),
        json!({ "content": "Brake at the 3 board", "conditions": "WET" }),
        &token,
    )
    .await;
    assert_eq!(tip.status(), StatusCode::CREATED);
    let tip = body_json(tip).await;
    assert_eq!(tip["conditions"], "WET");
    assert_eq!(tip["author"]["id"], user_id.as_str());

    let detail = body_json(get(app.app(), &format!("/api/tracks/{track_id}")).await).await;
    assert_eq!(detail["zones"].as_array().unwrap().len(), 1);
    assert_eq!(detail["zones"][0]["tips"][0]["content"], "Brake at the 3 board");
    assert_eq!(detail["_count"]["zones"], 1);
}

#[sqlx::test(migrations = false)]
async fn zone_input_is_validated(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Mapper", "map@example.com").await;
    let track = common::create_track(&app, &token, "Road Atlanta", "Braselton, GA").await;
    let uri = format!("/api/tracks/{}/zones", track["id"].as_str().unwrap());

    for body in [
        json!({ "name": "", "posX": 10, "posY": 10 }),
        json!({ "name": "Esses", "posX": 101, "posY": 10 }),
        json!({ "name": "Esses", "posX": 10, "posY": -1 }),
        json!({ "name": "Esses", "posX": 10, "posY": 10, "eventType": "RALLY" }),
    ] {
        let response = post_json_auth(app.app(), &uri, body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let anonymous = post_json(app.app(), &uri, json!({ "name": "Esses", "posX": 1, "posY": 1 })).await;
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let missing_track = post_json_auth(
        app.app(),
        "/api/tracks/nope/zones",
        json!({ "name": "Esses", "posX": 1, "posY": 1 }),
        &token,
    )
    .await;
    assert_eq!(missing_track.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn detail_filters_zones_by_event_type(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Mapper", "map@example.com").await;
    let track = common::create_track(&app, &token, "Willow Springs", "Rosamond, CA").await;
    let track_id = track["id"].as_str().unwrap();
    let uri = format!("/api/tracks/{track_id}/zones");

    for (name, event_type) in [("Turn 9", "ROADCOURSE"), ("Horse Thief", "DRIFT")] {
        let response = post_json_auth(
            app.app(),
            &uri,
            json!({ "name": name, "posX": 50, "posY": 50, "eventType": event_type }),
            &token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let detail = body_json(
        get(app.app(), &format!("/api/tracks/{track_id}?eventType=DRIFT")).await,
    )
    .await;
    let zones = detail["zones"].as_array().unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0]["name"], "Horse Thief");
}

#[sqlx::test(migrations = false)]
async fn zones_are_edited_and_removed_through_their_track(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Mapper", "map@example.com").await;
    let track = common::create_track(&app, &token, "COTA", "Austin, TX").await;
    let other = common::create_track(&app, &token, "NOLA", "Avondale, LA").await;
    let track_id = track["id"].as_str().unwrap();
    let other_id = other["id"].as_str().unwrap();

    let zone = body_json(
        post_json_auth(
            app.app(),
            &format!("/api/tracks/{track_id}/zones"),
            json!({ "name": "Turn 1", "posX": 5, "posY": 5 }),
            &token,
        )
        .await,
    )
    .await;
    let zone_id = zone["id"].as_str().unwrap();

    let wrong_track = patch_json_auth(
        app.app(),
        &format!("/api/tracks/{other_id}/zones/{zone_id}"),
        json!({ "name": "Hijacked" }),
        &token,
    )
    .await;
    assert_eq!(wrong_track.status(), StatusCode::NOT_FOUND);

    let blank = patch_json_auth(
        app.app(),
        &format!("/api/tracks/{track_id}/zones/{zone_id}"),
        json!({ "name": "  " }),
        &token,
    )
    .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let renamed = patch_json_auth(
        app.app(),
        &format!("/api/tracks/{track_id}/zones/{zone_id}"),
        json!({ "description": "Uphill hairpin" }),
        &token,
    )
    .await;
    assert_eq!(renamed.status(), StatusCode::OK);
    let renamed = body_json(renamed).await;
    assert_eq!(renamed["name"], "Turn 1");
    assert_eq!(renamed["description"], "Uphill hairpin");

    let empty_tip = post_json_auth(
        app.app(),
        &format!("/api/tracks/{track_id}/zones/{zone_id}/tips"),
        json!({ "content": "   " }),
        &token,
    )
    .await;
    assert_eq!(empty_tip.status(), StatusCode::BAD_REQUEST);

    let deleted = delete_auth(
        app.app(),
        &format!("/api/tracks/{track_id}/zones/{zone_id}"),
        &token,
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let again = delete_auth(
        app.app(),
        &format!("/api/tracks/{track_id}/zones/{zone_id}"),
        &token,
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}
