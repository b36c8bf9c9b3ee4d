//! Integration tests for the event schedule.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, delete_auth, get, post_json, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn create_event(pool: &PgPool, token: &str, body: serde_json::Value) -> serde_json::Value {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/events",
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_accepts_form_style_date_and_time(pool: PgPool) {
    let token = admin_token(&pool).await;
    let json = create_event(
        &pool,
        &token,
        json!({
            "title": "Corporate Gala Dinner",
            "date": "2030-04-15",
            "time": "19:00",
            "location": "Grand Ballroom"
        }),
    )
    .await;

    assert_eq!(json["event_date"], "2030-04-15");
    assert_eq!(json["event_time"], "19:00:00");
    assert_eq!(json["status"], "upcoming");
    assert_eq!(json["description"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_requires_admin(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/events",
        json!({
            "title": "Expo",
            "event_date": "2030-03-30",
            "event_time": "10:00",
            "location": "Hall A"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_bad_time_and_blank_location(pool: PgPool) {
    let token = admin_token(&pool).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/events",
        json!({
            "title": "Expo",
            "event_date": "2030-03-30",
            "event_time": "25:99",
            "location": "Hall A"
        }),
        &token,
    )
    .await;
    assert!(response.status().is_client_error());

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/events",
        json!({
            "title": "Expo",
            "event_date": "2030-03-30",
            "event_time": "10:00",
            "location": "   "
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Location is required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_orders_by_date_then_time_and_filters(pool: PgPool) {
    let token = admin_token(&pool).await;
    for (title, date, time, status) in [
        ("Evening", "2030-05-01", "18:00", "upcoming"),
        ("Later", "2030-06-01", "09:00", "upcoming"),
        ("Morning", "2030-05-01", "08:30", "upcoming"),
        ("Done", "2020-01-01", "12:00", "completed"),
    ] {
        create_event(
            &pool,
            &token,
            json!({
                "title": title,
                "date": date,
                "time": time,
                "location": "Kottayam",
                "status": status
            }),
        )
        .await;
    }

    let response = get(common::build_test_app(pool.clone()), "/api/v1/events").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Done", "Morning", "Evening", "Later"]);

    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/events?status=completed",
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["title"], "Done");

    let response = get(common::build_test_app(pool), "/api/v1/events?status=postponed").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_get_and_delete(pool: PgPool) {
    let token = admin_token(&pool).await;
    let created = create_event(
        &pool,
        &token,
        json!({
            "title": "Wedding Expo",
            "date": "2030-03-30",
            "time": "10:00",
            "location": "Exhibition Center"
        }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/events/{id}"),
        json!({
            "title": "Wedding Expo",
            "date": "2030-03-30",
            "time": "10:00",
            "location": "Exhibition Center",
            "status": "cancelled"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "cancelled");

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/events/{id}"),
    )
    .await;
    assert_eq!(body_json(response).await["status"], "cancelled");

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/events/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Event deleted successfully");

    let response = get(common::build_test_app(pool), &format!("/api/v1/events/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_unknown_event(pool: PgPool) {
    let token = admin_token(&pool).await;
    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/v1/events/4242",
        json!({
            "title": "Ghost",
            "date": "2030-03-30",
            "time": "10:00",
            "location": "Nowhere"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
