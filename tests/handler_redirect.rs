mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repository) = common::create_memory_server();
    common::insert_url(&repository, "aB3xY9z", "https://example.com/target").await;

    let response = server.get("/aB3xY9z").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "https://example.com/target");
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repository) = common::create_memory_server();

    let response = server.get("/zzzzzzz").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "short url not found" })
    );
}

#[tokio::test]
async fn test_redirect_malformed_code_not_found() {
    let (server, _repository) = common::create_memory_server();

    server.get("/favicon.ico").await.assert_status_not_found();
    server.get("/abc").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_is_idempotent() {
    let (server, repository) = common::create_memory_server();
    common::insert_url(&repository, "Rep3at1", "https://rust-lang.org").await;

    for _ in 0..3 {
        let response = server.get("/Rep3at1").await;
        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), "https://rust-lang.org");
    }
}

#[tokio::test]
async fn test_create_then_redirect_round_trip() {
    let (server, _repository) = common::create_memory_server();

    let created = server
        .post("/")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    created.assert_status_ok();
    let short_url = created.json::<serde_json::Value>()["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{short_url}")).await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_storage_failure() {
    let server = common::create_test_server(Arc::new(common::FailingRepository));

    let response = server.get("/aB3xY9z").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "unable to read from database" })
    );
}

#[tokio::test]
async fn test_redirect_destination_not_a_header_value() {
    let (server, _repository) = common::create_memory_server();

    let created = server
        .post("/")
        .json(&json!({ "url": "https://a.com/\nx" }))
        .await;
    created.assert_status_ok();
    let short_url = created.json::<serde_json::Value>()["shortUrl"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{short_url}")).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "error": "invalid redirect url" })
    );
}
