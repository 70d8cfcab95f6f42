mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use unwrapped_dashboard::api::handlers::{entities_handler, not_found_handler};

fn server() -> TestServer {
    let app = Router::new()
        .route("/api/entities", get(entities_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_entities_default_to_songs() {
    let response = server().get("/api/entities").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["view"], "song");
    assert_eq!(json["options"].as_array().unwrap().len(), 5);
    assert_eq!(json["options"][0]["value"], "Dua Lipa | Levitating");
    assert_eq!(json["default"], "Dua Lipa | Levitating");
}

#[tokio::test]
async fn test_entities_for_artists() {
    let response = server()
        .get("/api/entities")
        .add_query_param("view", "artist")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let artists: Vec<&str> = json["options"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["label"].as_str().unwrap())
        .collect();
    assert_eq!(artists, vec!["Dua Lipa", "Nobody", "The Weeknd", "Tones and I"]);
}

#[tokio::test]
async fn test_entities_empty_view_defaults_to_songs() {
    let response = server().get("/api/entities").add_query_param("view", "").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["view"], "song");
}

#[tokio::test]
async fn test_entities_unknown_view() {
    let response = server()
        .get("/api/entities")
        .add_query_param("view", "album")
        .expect_failure()
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let app = Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/entities", get(entities_handler))
                .fallback(not_found_handler),
        )
        .with_state(common::create_test_state());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/tracks").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
