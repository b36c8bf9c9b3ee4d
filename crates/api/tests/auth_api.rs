//! HTTP-level integration tests for login, the current-admin endpoint,
//! account lockout, and admin account management.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    admin_token, body_json, create_admin, delete_auth, get, get_auth, login, patch_json_auth,
    post_form, post_json_auth, ADMIN_EMAIL, ADMIN_PASSWORD,
};
use esdeco_api::bootstrap::ensure_bootstrap_admin;
use esdeco_api::config::BootstrapAdmin;
use esdeco_db::repositories::AdminRepo;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    create_admin(&pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let app = common::build_test_app(pool.clone());

    let response = post_form(
        app,
        "/api/v1/auth/login",
        &[("username", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["expires_in"], 24 * 3600);

    let admin = AdminRepo::find_by_email(&pool, ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();
    assert!(admin.last_login_at.is_some());
    assert_eq!(admin.failed_login_count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_email_is_case_insensitive(pool: PgPool) {
    create_admin(&pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let token = login(
        common::build_test_app(pool),
        "Admin@ESWebsite.com",
        ADMIN_PASSWORD,
    )
    .await;
    assert!(!token.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_admin(&pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    let app = common::build_test_app(pool);

    let response = post_form(
        app,
        "/api/v1/auth/login",
        &[("username", ADMIN_EMAIL), ("password", "not-the-password")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_form(
        app,
        "/api/v1/auth/login",
        &[("username", "ghost@eswebsite.com"), ("password", "whatever1")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_admin(pool: PgPool) {
    let admin = create_admin(&pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    AdminRepo::deactivate(&pool, admin.id).await.unwrap();

    let app = common::build_test_app(pool);
    let response = post_form(
        app,
        "/api/v1/auth/login",
        &[("username", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)],
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_locks_after_five_failures(pool: PgPool) {
    create_admin(&pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    for _ in 0..5 {
        let response = post_form(
            common::build_test_app(pool.clone()),
            "/api/v1/auth/login",
            &[("username", ADMIN_EMAIL), ("password", "wrong-password")],
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    // Even the right password is refused while locked.
    let response = post_form(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        &[("username", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = AdminRepo::find_by_email(&pool, ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();
    assert!(admin.locked_until.is_some());
}

async fn fail_login(pool: &PgPool, times: usize) {
    for _ in 0..times {
        let response = post_form(
            common::build_test_app(pool.clone()),
            "/api/v1/auth/login",
            &[("username", ADMIN_EMAIL), ("password", "wrong-password")],
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

async fn login_status(pool: &PgPool, password: &str) -> StatusCode {
    post_form(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        &[("username", ADMIN_EMAIL), ("password", password)],
    )
    .await
    .status()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_single_typo_after_lock_expiry_does_not_relock(pool: PgPool) {
    let admin = create_admin(&pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    fail_login(&pool, 5).await;
    AdminRepo::lock_account(&pool, admin.id, Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    assert_eq!(login_status(&pool, "wrong-password").await, StatusCode::UNAUTHORIZED);

    let stored = AdminRepo::find_by_email(&pool, ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.failed_login_count, 1);
    assert!(stored.locked_until.is_none());

    assert_eq!(login_status(&pool, ADMIN_PASSWORD).await, StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_after_lock_expiry_resets_failures(pool: PgPool) {
    let admin = create_admin(&pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    fail_login(&pool, 5).await;
    AdminRepo::lock_account(&pool, admin.id, Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    assert_eq!(login_status(&pool, ADMIN_PASSWORD).await, StatusCode::OK);

    let stored = AdminRepo::find_by_email(&pool, ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.failed_login_count, 0);
    assert!(stored.locked_until.is_none());
    assert!(stored.last_login_at.is_some());

    // The next mistake starts a fresh streak.
    assert_eq!(login_status(&pool, "wrong-password").await, StatusCode::UNAUTHORIZED);
    assert_eq!(login_status(&pool, ADMIN_PASSWORD).await, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Token handling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_profile_without_hash(pool: PgPool) {
    let token = admin_token(&pool).await;
    let response = get_auth(common::build_test_app(pool), "/api/v1/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], ADMIN_EMAIL);
    assert!(json.get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_without_token(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/inquiries").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_with_garbage_token(pool: PgPool) {
    let response = get_auth(
        common::build_test_app(pool),
        "/api/v1/inquiries",
        "not.a.jwt",
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid or expired token");
}

// ---------------------------------------------------------------------------
// Admin management
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_admin_and_reject_duplicate(pool: PgPool) {
    let token = admin_token(&pool).await;
    let body = json!({
        "name": "Second Admin",
        "email": "Second@ESWebsite.com",
        "password": "another-password"
    });

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/admins",
        body.clone(),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["email"], "second@eswebsite.com");
    assert_eq!(json["is_active"], true);

    let response =
        post_json_auth(common::build_test_app(pool), "/api/v1/admins", body, &token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Admin with this email already exists");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_admin_rejects_short_password(pool: PgPool) {
    let token = admin_token(&pool).await;
    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/admins",
        json!({ "name": "Short", "email": "short@eswebsite.com", "password": "abc" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_admins(pool: PgPool) {
    let token = admin_token(&pool).await;
    create_admin(&pool, "other@eswebsite.com", "other-password").await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/admins", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let admins = json.as_array().unwrap();
    assert_eq!(admins.len(), 2);
    assert!(admins.iter().all(|a| a.get("password_hash").is_none()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_admin_changes_password(pool: PgPool) {
    let token = admin_token(&pool).await;
    let other = create_admin(&pool, "other@eswebsite.com", "old-password").await;

    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admins/{}", other.id),
        json!({ "name": "Renamed", "new_password": "brand-new-password" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Renamed");

    let new_token = login(
        common::build_test_app(pool),
        "other@eswebsite.com",
        "brand-new-password",
    )
    .await;
    assert!(!new_token.is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_admin_with_empty_body(pool: PgPool) {
    let token = admin_token(&pool).await;
    let admin = AdminRepo::find_by_email(&pool, ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();

    let response = patch_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/admins/{}", admin.id),
        json!({}),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No update data provided");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_unknown_admin(pool: PgPool) {
    let token = admin_token(&pool).await;
    let response = patch_json_auth(
        common::build_test_app(pool),
        "/api/v1/admins/99999",
        json!({ "name": "Nobody" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deactivate_admin(pool: PgPool) {
    let token = admin_token(&pool).await;
    let other = create_admin(&pool, "other@eswebsite.com", "other-password").await;

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/admins/{}", other.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_form(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        &[("username", "other@eswebsite.com"), ("password", "other-password")],
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_cannot_deactivate_self(pool: PgPool) {
    let token = admin_token(&pool).await;
    let me = AdminRepo::find_by_email(&pool, ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();

    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/admins/{}", me.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_bootstrap_admin_only_on_empty_table(pool: PgPool) {
    let seed = BootstrapAdmin {
        name: "Owner".to_string(),
        email: "owner@eswebsite.com".to_string(),
        password: "owner-password".to_string(),
    };

    assert!(ensure_bootstrap_admin(&pool, &seed).await.unwrap());
    assert!(!ensure_bootstrap_admin(&pool, &seed).await.unwrap());
    assert_eq!(AdminRepo::count(&pool).await.unwrap(), 1);

    let token = login(
        common::build_test_app(pool),
        "owner@eswebsite.com",
        "owner-password",
    )
    .await;
    assert!(!token.is_empty());
}
