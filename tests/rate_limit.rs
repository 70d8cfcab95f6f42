mod common;

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;
use unwrapped_dashboard::config::Config;
use unwrapped_dashboard::routes::app_router;

type App = NormalizePath<axum::Router>;

fn peer() -> ConnectInfo<SocketAddr> {
    ConnectInfo("203.0.113.7:50000".parse().unwrap())
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .extension(peer())
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .extension(peer())
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &App, request: Request<Body>) -> StatusCode {
    app.clone().oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn test_control_change_succeeds_after_scrolling() {
    let app = app_router(common::create_test_state(), &Config::default());

    for _ in 0..150 {
        let status = send(&app, post_json("/api/footer", json!({ "scroll_y": 640.0 }))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let status = send(
        &app,
        post_json(
            "/api/events",
            json!({
                "event": "change",
                "control": "audio-feature-dropdown",
                "controls": { "audio-feature-dropdown": "tempo" }
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_chart_endpoints_are_rate_limited_per_client() {
    let config = Config {
        rate_limit_per_second: 1,
        rate_limit_burst: 2,
        ..Config::default()
    };
    let app = app_router(common::create_test_state(), &config);

    assert_eq!(send(&app, get("/api/entities")).await, StatusCode::OK);
    assert_eq!(send(&app, get("/api/entities")).await, StatusCode::OK);
    assert_eq!(
        send(&app, get("/api/entities")).await,
        StatusCode::TOO_MANY_REQUESTS
    );

    let status = send(&app, post_json("/api/footer", json!({ "scroll_y": 0.0 }))).await;
    assert_eq!(status, StatusCode::OK);
}
