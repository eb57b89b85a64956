//! Integration tests for listing CRUD and ownership scoping.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_end_to_end_lifecycle() {
    let app = helpers::TestApp::new();

    let signup = app
        .request(
            "POST",
            "/auth/signup",
            Some(json!({ "email": "a@x.com", "password": "pw1234" })),
            None,
        )
        .await;
    assert_eq!(signup.status, StatusCode::CREATED);

    let token = app.login("a@x.com", "pw1234").await;
    assert!(!token.is_empty());

    let created = app
        .request(
            "POST",
            "/items",
            Some(json!({ "name": "X", "price": 100, "description": "" })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["data"]["id"].as_i64().expect("numeric id");

    let fetched = app
        .request("GET", &format!("/items/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["name"], "X");
    assert_eq!(fetched.body["data"]["price"], 100);
    assert_eq!(fetched.body["data"]["description"], "");
    assert_eq!(fetched.body["data"]["soldOut"], false);
    assert_eq!(fetched.body["data"], created.body["data"]);

    let deleted = app
        .request("DELETE", &format!("/items/{id}"), None, Some(&token))
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/items/{id}"), None, Some(&token))
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_without_token_creates_nothing() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/items",
            Some(json!({ "name": "X", "price": 100, "description": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(app.items.is_empty());

    let listing = app.request("GET", "/items", None, None).await;
    assert_eq!(listing.body["data"], json!([]));
}

#[tokio::test]
async fn test_list_is_public_and_spans_owners() {
    let app = helpers::TestApp::new();
    let alice = app.signup_and_login("alice@x.com", "pw").await;
    let bob = app.signup_and_login("bob@x.com", "pw").await;
    app.create_item(&alice, "Chair", 10).await;
    app.create_item(&bob, "Desk", 20).await;

    let response = app.request("GET", "/items", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let names: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Chair", "Desk"]);
}

#[tokio::test]
async fn test_other_users_listing_is_not_found() {
    let app = helpers::TestApp::new();
    let alice = app.signup_and_login("alice@x.com", "pw").await;
    let bob = app.signup_and_login("bob@x.com", "pw").await;
    let id = app.create_item(&alice, "Chair", 10).await;
    let path = format!("/items/{id}");

    let get = app.request("GET", &path, None, Some(&bob)).await;
    let put = app
        .request("PUT", &path, Some(json!({ "price": 1 })), Some(&bob))
        .await;
    let delete = app.request("DELETE", &path, None, Some(&bob)).await;

    for response in [&get, &put, &delete] {
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body["error"], "NOT_FOUND");
    }

    let still_there = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(still_there.status, StatusCode::OK);
    assert_eq!(still_there.body["data"]["price"], 10);
}

#[tokio::test]
async fn test_missing_and_foreign_are_indistinguishable() {
    let app = helpers::TestApp::new();
    let alice = app.signup_and_login("alice@x.com", "pw").await;
    let bob = app.signup_and_login("bob@x.com", "pw").await;
    let id = app.create_item(&alice, "Chair", 10).await;

    let foreign = app
        .request("GET", &format!("/items/{id}"), None, Some(&bob))
        .await;
    let missing = app.request("GET", "/items/9999", None, Some(&bob)).await;

    assert_eq!(foreign.status, missing.status);
    assert_eq!(foreign.body, missing.body);
}

#[tokio::test]
async fn test_partial_update_touches_only_sent_fields() {
    let app = helpers::TestApp::new();
    let token = app.signup_and_login("a@x.com", "pw").await;
    let created = app
        .request(
            "POST",
            "/items",
            Some(json!({ "name": "Lamp", "price": 1200, "description": "brass" })),
            Some(&token),
        )
        .await;
    let id = created.body["data"]["id"].as_i64().unwrap();
    let path = format!("/items/{id}");

    let updated = app
        .request(
            "PUT",
            &path,
            Some(json!({ "description": "polished brass" })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["description"], "polished brass");
    assert_eq!(updated.body["data"]["name"], "Lamp");
    assert_eq!(updated.body["data"]["price"], 1200);
    assert_eq!(updated.body["data"]["soldOut"], false);

    let sold = app
        .request("PUT", &path, Some(json!({ "soldOut": true })), Some(&token))
        .await;
    assert_eq!(sold.body["data"]["soldOut"], true);
    assert_eq!(sold.body["data"]["description"], "polished brass");

    let cleared = app
        .request("PUT", &path, Some(json!({ "description": null })), Some(&token))
        .await;
    assert_eq!(cleared.status, StatusCode::OK);
    assert_eq!(cleared.body["data"]["description"], "");
    assert_eq!(cleared.body["data"]["soldOut"], true);
}

#[tokio::test]
async fn test_empty_update_returns_stored_item() {
    let app = helpers::TestApp::new();
    let token = app.signup_and_login("a@x.com", "pw").await;
    let id = app.create_item(&token, "Lamp", 1200).await;
    let path = format!("/items/{id}");

    let before = app.request("GET", &path, None, Some(&token)).await;
    let after = app.request("PUT", &path, Some(json!({})), Some(&token)).await;

    assert_eq!(after.status, StatusCode::OK);
    assert_eq!(after.body["data"], before.body["data"]);

    let other = app.signup_and_login("b@x.com", "pw").await;
    let foreign = app.request("PUT", &path, Some(json!({})), Some(&other)).await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_item_bodies_rejected() {
    let app = helpers::TestApp::new();
    let token = app.signup_and_login("a@x.com", "pw").await;

    for body in [
        json!({ "price": 100 }),
        json!({ "name": "", "price": 100 }),
        json!({ "name": "X", "price": -5 }),
        json!({ "name": "X", "price": "cheap" }),
        json!({ "name": "   ", "price": 1 }),
    ] {
        let response = app.request("POST", "/items", Some(body.clone()), Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
    assert!(app.items.is_empty());

    let id = app.create_item(&token, "Chair", 10).await;
    let response = app
        .request(
            "PUT",
            &format!("/items/{id}"),
            Some(json!({ "price": -1 })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_description_defaults_to_empty() {
    let app = helpers::TestApp::new();
    let token = app.signup_and_login("a@x.com", "pw").await;

    let response = app
        .request("POST", "/items", Some(json!({ "name": "X", "price": 0 })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["description"], "");
    assert!(response.body["data"]["userId"].is_i64());
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = helpers::TestApp::new();
    let token = app.signup_and_login("a@x.com", "pw").await;

    for path in ["/items/abc", "/items/0", "/items/-1"] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "path: {path}");
    }
}

#[tokio::test]
async fn test_protected_item_routes_require_token() {
    let app = helpers::TestApp::new();
    let token = app.signup_and_login("a@x.com", "pw").await;
    let id = app.create_item(&token, "Chair", 10).await;
    let path = format!("/items/{id}");

    let get = app.request("GET", &path, None, None).await;
    let put = app.request("PUT", &path, Some(json!({ "price": 1 })), None).await;
    let delete = app.request("DELETE", &path, None, None).await;

    for response in [&get, &put, &delete] {
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(app.items.len(), 1);
}
