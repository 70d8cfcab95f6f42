mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use unwrapped_dashboard::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_test_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["dataset"]["status"], "ok");
    assert_eq!(
        json["checks"]["dataset"]["message"],
        "6 rows, 2020-01-01 to 2021-04-01"
    );
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_empty_dataset() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_empty_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").expect_failure().await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["dataset"]["status"], "error");
}
