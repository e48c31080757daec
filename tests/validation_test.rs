//! Validation integration tests
//!
//! Tests that request bodies failing validation are answered with 400
//! and per-field errors, before any persistence call is attempted (the
//! test pool never actually connects, so reaching the database would
//! hang or fail rather than pass).

mod common;

use axum::http::StatusCode;
use uuid::Uuid;

use common::{test_server, token_for};

#[tokio::test]
async fn test_signup_empty_body_lists_all_fields() {
    let server = test_server();

    let response = server
        .post("/api/v1/user/signup")
        .json(&serde_json::json!({
            "name": "",
            "email": "",
            "password": ""
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["error"].as_array().expect("error should be an array");
    let fields: Vec<&str> = errors
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "password"]);
}

#[tokio::test]
async fn test_signup_rejects_invalid_email() {
    let server = test_server();

    let response = server
        .post("/api/v1/user/signup")
        .json(&serde_json::json!({
            "name": "Alice",
            "email": "not-an-email",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"][0]["field"], "email");
}

#[tokio::test]
async fn test_signin_requires_password() {
    let server = test_server();

    let response = server
        .post("/api/v1/user/signin")
        .json(&serde_json::json!({
            "email": "alice@example.com",
            "password": ""
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"][0]["field"], "password");
}

#[tokio::test]
async fn test_create_post_rejects_empty_title_and_content() {
    let server = test_server();
    let token = token_for(Uuid::new_v4());

    let response = server
        .post("/api/v1/blog")
        .add_header("Authorization", token.as_str())
        .json(&serde_json::json!({
            "title": "",
            "content": ""
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let errors = body["error"].as_array().expect("error should be an array");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["message"], "Title is required");
    assert_eq!(errors[1]["message"], "Content is required");
}

#[tokio::test]
async fn test_update_post_rejects_malformed_id() {
    let server = test_server();
    let token = token_for(Uuid::new_v4());

    let response = server
        .put("/api/v1/blog")
        .add_header("Authorization", token.as_str())
        .json(&serde_json::json!({
            "id": "not-a-uuid",
            "title": "New title"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"][0]["field"], "id");
}

#[tokio::test]
async fn test_update_post_rejects_empty_optional_title() {
    let server = test_server();
    let token = token_for(Uuid::new_v4());

    let response = server
        .put("/api/v1/blog")
        .add_header("Authorization", token.as_str())
        .json(&serde_json::json!({
            "id": Uuid::new_v4().to_string(),
            "title": ""
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"][0]["field"], "title");
}

#[tokio::test]
async fn test_list_rejects_non_numeric_page() {
    let server = test_server();
    let token = token_for(Uuid::new_v4());

    let response = server
        .get("/api/v1/blog/bulk?page=abc")
        .add_header("Authorization", token.as_str())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
