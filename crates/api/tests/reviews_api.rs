//! HTTP-level integration tests for track reviews and rating aggregation.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json_auth};
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = false)]
async fn reviews_feed_the_average_rating(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Critic", "critic@example.com").await;
    common::create_car(&app, &token).await;
    let track = common::create_track(&app, &token, "Lime Rock", "Lakeville, CT").await;
    let track_id = track["id"].as_str().unwrap();
    let event_id = track["events"][0]["id"].as_str().unwrap();
    let uri = format!("/api/tracks/{track_id}/reviews");

    let first = post_json_auth(
        app.app(),
        &uri,
        json!({ "rating": 5, "content": "Fast and flowing", "conditions": "DRY", "trackEventId": event_id }),
        &token,
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);
    let first = body_json(first).await;
    assert_eq!(first["author"]["experience"], "BEGINNER");
    assert_eq!(first["author"]["cars"][0]["make"], "Mazda");
    assert_eq!(first["trackEvent"]["id"], event_id);

    let second = post_json_auth(
        app.app(),
        &uri,
        json!({ "rating": 3, "conditions": "WET" }),
        &token,
    )
    .await;
    assert_eq!(second.status(), StatusCode::CREATED);

    let detail = body_json(get(app.app(), &format!("/api/tracks/{track_id}")).await).await;
    assert_eq!(detail["avgRating"], 4.0);
    assert_eq!(detail["_count"]["reviews"], 2);
    assert_eq!(detail["reviews"][0]["rating"], 3);
    assert_eq!(detail["reviews"][1]["rating"], 5);

    let list = body_json(get(app.app(), "/api/tracks").await).await;
    assert_eq!(list[0]["avgRating"], 4.0);
}

#[sqlx::test(migrations = false)]
async fn review_input_is_validated(pool: SqlitePool) {
    let app = common::build_test_app(pool).await;
    let (_, token) = common::register_and_login(&app, "Critic", "critic@example.com").await;
    let track = common::create_track(&app, &token, "Pocono", "Long Pond, PA").await;
    let other = common::create_track(&app, &token, "Summit Point", "Summit Point, WV").await;
    let uri = format!("/api/tracks/{}/reviews", track["id"].as_str().unwrap());
    let foreign_event = other["events"][0]["id"].as_str().unwrap();

    for body in [
        json!({ "rating": 0, "conditions": "DRY" }),
        json!({ "rating": 6, "conditions": "DRY" }),
        json!({ "rating": 4, "conditions": "SNOW" }),
        json!({ "rating": 4 }),
        json!({ "rating": 4, "conditions": "DRY", "trackEventId": foreign_event }),
    ] {
        let response = post_json_auth(app.app(), &uri, body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    let missing = post_json_auth(
        app.app(),
        "/api/tracks/nope/reviews",
        json!({ "rating": 4, "conditions": "DRY" }),
        &token,
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}
