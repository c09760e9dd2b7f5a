//! Shared harness for HTTP-level integration tests.
//!
//! Mirrors the router construction in `main.rs` via [`build_app_router`] so
//! tests exercise the same middleware stack (CORS, request ID, timeout,
//! tracing, panic recovery) that production uses.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use appraisal_api::config::ServerConfig;
use appraisal_api::router::build_app_router;
use appraisal_api::state::AppState;
use appraisal_core::upload::UploadPolicy;

/// The operator secret wired into every test config.
pub const TEST_OPERATOR_PASSWORD: &str = "test-operator-secret";

/// Multipart boundary used by [`multipart_body`].
pub const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Build a test `ServerConfig` with safe defaults and a fresh per-call
/// upload directory under the system temp dir.
pub fn test_config() -> ServerConfig {
    let upload_dir = fresh_upload_dir();
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        operator_password: TEST_OPERATOR_PASSWORD.to_string(),
        session_expiry_mins: 120,
        upload_dir,
        upload_policy: UploadPolicy::default(),
    }
}

/// Create a unique writable upload directory for one test app instance.
fn fresh_upload_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "appraisal-test-uploads-{}",
        appraisal_core::token::generate_token()
    ));
    std::fs::create_dir_all(&dir).expect("failed to create test upload dir");
    dir
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Send a GET request with a Bearer session token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::get(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and a Bearer session token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with no body but a Bearer session token.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body and a Bearer session token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::put(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a PUT request with a JSON body and no auth.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::put(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a prebuilt `multipart/form-data` body.
pub async fn post_multipart(app: Router, uri: &str, body: Vec<u8>) -> Response<Body> {
    app.oneshot(
        Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be JSON")
}

// ---------------------------------------------------------------------------
// Multipart builder
// ---------------------------------------------------------------------------

/// Build a `multipart/form-data` body from text fields plus one file part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    if let Some((filename, content_type, bytes)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"photo\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// The standard complete intake form used across tests.
pub fn complete_intake_fields<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("artist_name", "Jane Doe"),
        ("title", "Untitled I"),
        ("artwork_date", "1987"),
        ("medium", "Oil on canvas"),
        ("dimensions", "60 x 80 cm"),
        ("provenance", "Private collection"),
    ]
}

/// Submit a valid intake form with a small JPEG and return the minted token.
pub async fn submit_valid(app: Router) -> String {
    let body = multipart_body(
        &complete_intake_fields(),
        Some(("artwork.jpg", "image/jpeg", b"\xFF\xD8\xFF\xE0 fake jpeg")),
    );
    let response = post_multipart(app, "/api/v1/submissions", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["token"]
        .as_str()
        .expect("creation response must contain a token")
        .to_string()
}

/// Log the operator in and return the session token.
pub async fn operator_login(app: Router) -> String {
    let body = serde_json::json!({ "password": TEST_OPERATOR_PASSWORD });
    let response = post_json(app, "/api/v1/operator/login", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let json = body_json(response).await;
    json["data"]["session_token"]
        .as_str()
        .expect("login response must contain a session token")
        .to_string()
}
