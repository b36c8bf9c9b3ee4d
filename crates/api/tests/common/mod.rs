#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use esdeco_api::auth::jwt::JwtConfig;
use esdeco_api::auth::password::hash_password;
use esdeco_api::config::{ServerConfig, DEFAULT_STATIC_DIR};
use esdeco_api::router::build_app_router;
use esdeco_api::state::AppState;
use esdeco_db::models::admin::{Admin, CreateAdmin};
use esdeco_db::repositories::AdminRepo;
use esdeco_mail::{Mailer, RecordingMailer};

pub const ADMIN_EMAIL: &str = "admin@eswebsite.com";
pub const ADMIN_PASSWORD: &str = "decorations-2024";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: DEFAULT_STATIC_DIR.to_string(),
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_hours: 24,
        },
        bootstrap_admin: None,
    }
}

/// Full application router backed by a recording mailer.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_mailer(pool, Some(Arc::new(RecordingMailer::new())))
}

/// Full application router with an explicit mailer (or none at all).
pub fn build_test_app_with_mailer(pool: PgPool, mailer: Option<Arc<dyn Mailer>>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an admin directly and return the row.
pub async fn create_admin(pool: &PgPool, email: &str, password: &str) -> Admin {
    let input = CreateAdmin {
        name: "Test Admin".to_string(),
        email: email.to_string(),
        password_hash: hash_password(password).expect("hashing should succeed"),
    };
    AdminRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed")
}

/// Log in through the API and return the access token.
pub async fn login(app: Router, email: &str, password: &str) -> String {
    let response = post_form(
        app,
        "/api/v1/auth/login",
        &[("username", email), ("password", password)],
    )
    .await;
    assert_eq!(response.status(), 200, "login should succeed");
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

/// Create the default admin and return a valid token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    create_admin(pool, ADMIN_EMAIL, ADMIN_PASSWORD).await;
    login(build_test_app(pool.clone()), ADMIN_EMAIL, ADMIN_PASSWORD).await
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

pub async fn patch_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::PATCH, uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, body, None)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::POST, uri, body, Some(token))).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::PUT, uri, body, Some(token))).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::PATCH, uri, body, Some(token))).await
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).expect("form fields should encode");
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("response should be JSON")
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("response should be UTF-8")
}
