//! Integration tests for signup, login, and the authorization gate.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_ping() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/ping", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "pong");
}

#[tokio::test]
async fn test_health_reports_memory_backend() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "memory");
}

#[tokio::test]
async fn test_signup_returns_created_without_digest() {
    let app = helpers::TestApp::new();
    let response = app
        .request(
            "POST",
            "/auth/signup",
            Some(json!({ "email": "a@x.com", "password": "pw1234" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["email"], "a@x.com");
    assert!(response.body["data"]["id"].is_i64());
    assert!(response.body["data"].get("passwordHash").is_none());
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let app = helpers::TestApp::new();
    app.signup("a@x.com", "pw1234").await;

    let response = app
        .request(
            "POST",
            "/auth/signup",
            Some(json!({ "email": "a@x.com", "password": "different" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
    assert_eq!(app.users.len(), 1);
}

#[tokio::test]
async fn test_signup_rejects_bad_bodies() {
    let app = helpers::TestApp::new();

    let missing_password = app
        .request("POST", "/auth/signup", Some(json!({ "email": "a@x.com" })), None)
        .await;
    assert_eq!(missing_password.status, StatusCode::BAD_REQUEST);

    let bad_email = app
        .request(
            "POST",
            "/auth/signup",
            Some(json!({ "email": "nope", "password": "pw" })),
            None,
        )
        .await;
    assert_eq!(bad_email.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_email.body["error"], "VALIDATION_ERROR");

    let not_json = app.request_raw("POST", "/auth/signup", "{email:", None).await;
    assert_eq!(not_json.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        not_json.body["message"],
        "Request body is missing or malformed"
    );

    assert!(app.users.is_empty());
}

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new();
    app.signup("a@x.com", "pw1234").await;

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "a@x.com", "password": "pw1234" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let token = response.body["data"]["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert!(response.body["data"]["expiresAt"].is_string());
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let app = helpers::TestApp::new();
    app.signup("a@x.com", "pw1234").await;

    let wrong_password = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "a@x.com", "password": "wrong" })),
            None,
        )
        .await;
    let unknown_email = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "b@x.com", "password": "pw1234" })),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body, unknown_email.body);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/auth/me", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_me_returns_acting_user() {
    let app = helpers::TestApp::new();
    let token = app.signup_and_login("a@x.com", "pw1234").await;

    let response = app.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], "a@x.com");
}

#[tokio::test]
async fn test_gate_rejects_malformed_headers_and_tokens() {
    let app = helpers::TestApp::new();

    for header in ["Basic YTpi", "Bearer", "Bearer not.a.jwt", "token-without-scheme"] {
        let response = app.request_raw("GET", "/auth/me", "", Some(header)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "header: {header}");
    }
}

#[tokio::test]
async fn test_token_from_other_deployment_rejected() {
    let app = helpers::TestApp::new();
    let other = helpers::TestApp::new();
    let token = app.signup_and_login("a@x.com", "pw1234").await;

    // Same secret, but the subject does not exist in the other store.
    let response = other.request("GET", "/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
