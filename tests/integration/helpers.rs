//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use fleamarket_api::{AppState, build_router};
use fleamarket_core::config::{AppConfig, AuthConfig};
use fleamarket_database::repositories::{MemoryItemStore, MemoryUserStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Listing store, for asserting on stored rows directly
    pub items: Arc<MemoryItemStore>,
    /// Account store
    pub users: Arc<MemoryUserStore>,
}

/// A response with its body parsed as JSON (`Null` when empty).
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestApp {
    /// Fresh in-memory application with a cheap hash cost.
    pub fn new() -> Self {
        let mut auth = AuthConfig::with_secret("integration-test-secret");
        auth.hash_memory_kib = 1024;
        auth.hash_iterations = 1;

        let config = AppConfig {
            server: Default::default(),
            database: Default::default(),
            auth,
            logging: Default::default(),
        };

        let users = Arc::new(MemoryUserStore::new());
        let items = Arc::new(MemoryItemStore::new());
        let state = AppState::new(config, users.clone(), items.clone())
            .expect("Failed to build app state");

        Self {
            router: build_router(state),
            items,
            users,
        }
    }

    /// Send a JSON request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        let authorization = token.map(|t| format!("Bearer {t}"));
        self.request_raw(method, path, &body, authorization.as_deref())
            .await
    }

    /// Send a request with a literal body and `Authorization` header value.
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        authorization: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(value) = authorization {
            req = req.header("Authorization", value);
        }

        let req = req
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        TestResponse { status, body }
    }

    /// Sign up and return the new account's JSON.
    pub async fn signup(&self, email: &str, password: &str) -> Value {
        let response = self
            .request(
                "POST",
                "/auth/signup",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"].clone()
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/auth/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.body["data"]["token"]
            .as_str()
            .expect("token missing")
            .to_string()
    }

    /// Sign up then log in.
    pub async fn signup_and_login(&self, email: &str, password: &str) -> String {
        self.signup(email, password).await;
        self.login(email, password).await
    }

    /// Create a listing and return its id.
    pub async fn create_item(&self, token: &str, name: &str, price: i64) -> i64 {
        let response = self
            .request(
                "POST",
                "/items",
                Some(serde_json::json!({
                    "name": name,
                    "price": price,
                    "description": "",
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"]["id"].as_i64().expect("id missing")
    }
}
