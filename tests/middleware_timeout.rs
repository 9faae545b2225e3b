use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum_test::TestServer;
use shorturl::api::middleware::timeout;
use std::time::Duration;

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "done"
}

async fn fast_handler() -> &'static str {
    "done"
}

fn create_server() -> TestServer {
    let app = Router::new()
        .route("/slow", get(slow_handler))
        .route("/fast", get(fast_handler))
        .layer(timeout::layer(1));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_slow_request_times_out() {
    let server = create_server();

    let response = server.get("/slow").await;

    response.assert_status(StatusCode::REQUEST_TIMEOUT);
}

#[tokio::test]
async fn test_fast_request_passes() {
    let server = create_server();

    let response = server.get("/fast").await;

    response.assert_status_ok();
    response.assert_text("done");
}
