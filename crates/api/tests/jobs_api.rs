//! Integration tests for job listings and job applications.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, body_json, delete_auth, get, get_auth, patch_json_auth, post_json,
    post_json_auth, put_json_auth,
};
use esdeco_db::repositories::JobApplicationRepo;
use serde_json::json;
use sqlx::PgPool;

fn listing_body(title: &str, active: bool) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Help us bring celebrations to life",
        "requirements": ["2+ years in events", "Weekend availability"],
        "type": "Full-time",
        "icon": "Calendar",
        "is_active": active
    })
}

async fn create_listing(pool: &PgPool, token: &str, title: &str, active: bool) -> i64 {
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/job-listings",
        listing_body(title, active),
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

fn application_body(listing_id: i64, name: &str) -> serde_json::Value {
    json!({
        "job_listing_id": listing_id,
        "name": name,
        "email": "applicant@example.com",
        "phone": "+91 98470 12345",
        "experience": "Three years coordinating weddings",
        "applied_at": "1999-01-01T00:00:00Z"
    })
}

async fn apply(pool: &PgPool, listing_id: i64, name: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/job-applications",
        application_body(listing_id, name),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_list_shows_only_active(pool: PgPool) {
    let token = admin_token(&pool).await;
    create_listing(&pool, &token, "Event Coordinator", true).await;
    create_listing(&pool, &token, "Archived Role", false).await;

    let response = get(common::build_test_app(pool.clone()), "/api/v1/job-listings").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["title"], "Event Coordinator");
    assert_eq!(json[0]["type"], "Full-time");

    // The flag is ignored without a token.
    let response = get(
        common::build_test_app(pool.clone()),
        "/api/v1/job-listings?include_inactive=true",
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/job-listings?include_inactive=true",
        &token,
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_inactive_listing_hidden_from_public_detail(pool: PgPool) {
    let token = admin_token(&pool).await;
    let id = create_listing(&pool, &token, "Archived Role", false).await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/job-listings/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/job-listings/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_listing_defaults_and_update(pool: PgPool) {
    let token = admin_token(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/job-listings",
        json!({
            "title": "Chef",
            "description": "Lead our kitchen",
            "type": "Part-time"
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["icon"], "Users");
    assert_eq!(json["is_active"], true);
    assert_eq!(json["requirements"], json!([]));
    let id = json["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/job-listings/{id}"),
        listing_body("Head Chef", false),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Head Chef");
    assert_eq!(json["is_active"], false);

    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/job-listings/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_application_is_pending_and_server_stamped(pool: PgPool) {
    let token = admin_token(&pool).await;
    let listing = create_listing(&pool, &token, "Decorator", true).await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/job-applications",
        application_body(listing, "Anil"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert!(!json["applied_at"].as_str().unwrap().starts_with("1999"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_application_to_inactive_or_missing_listing(pool: PgPool) {
    let token = admin_token(&pool).await;
    let inactive = create_listing(&pool, &token, "Closed", false).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/job-applications",
        application_body(inactive, "Anil"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/job-applications",
        application_body(123_456, "Anil"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_application_rejects_bad_phone(pool: PgPool) {
    let token = admin_token(&pool).await;
    let listing = create_listing(&pool, &token, "Decorator", true).await;
    let mut body = application_body(listing, "Anil");
    body["phone"] = json!("123");

    let response = post_json(common::build_test_app(pool), "/api/v1/job-applications", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_applications_with_position_and_filters(pool: PgPool) {
    let token = admin_token(&pool).await;
    let decorator = create_listing(&pool, &token, "Decorator", true).await;
    let chef = create_listing(&pool, &token, "Chef", true).await;
    let first = apply(&pool, decorator, "Anil").await;
    apply(&pool, chef, "Meera").await;
    JobApplicationRepo::update_status(&pool, first, esdeco_core::job::ApplicationStatus::Approved)
        .await
        .unwrap();

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/job-applications",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let all = json.as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["name"], "Meera");
    assert_eq!(all[0]["position"], "Chef");

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/job-applications?status=approved",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["position"], "Decorator");

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/job-applications?job_listing_id={chef}"),
        &token,
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/job-applications?status=hired",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_application_status(pool: PgPool) {
    let token = admin_token(&pool).await;
    let listing = create_listing(&pool, &token, "Decorator", true).await;
    let id = apply(&pool, listing, "Anil").await;

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/job-applications/{id}/status"),
        json!({ "status": "approved" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Application approved successfully"
    );

    // Re-applying the same decision is not an error.
    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/job-applications/{id}/status"),
        json!({ "status": "approved" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/job-applications/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "approved");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_status_and_unknown_application(pool: PgPool) {
    let token = admin_token(&pool).await;
    let listing = create_listing(&pool, &token, "Decorator", true).await;
    let id = apply(&pool, listing, "Anil").await;

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/job-applications/{id}/status"),
        json!({ "status": "pending" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid status");

    let response = patch_json_auth(
        common::build_test_app(pool),
        "/api/v1/job-applications/98765/status",
        json!({ "status": "rejected" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleting_listing_removes_its_applications(pool: PgPool) {
    let token = admin_token(&pool).await;
    let listing = create_listing(&pool, &token, "Decorator", true).await;
    let id = apply(&pool, listing, "Anil").await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/job-listings/{listing}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/job-applications/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_application_requires_admin(pool: PgPool) {
    let token = admin_token(&pool).await;
    let listing = create_listing(&pool, &token, "Decorator", true).await;
    let id = apply(&pool, listing, "Anil").await;

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/job-applications/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/job-applications/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Anil");
    assert_eq!(json["job_listing_id"], listing);
    assert_eq!(json["status"], "pending");
}
