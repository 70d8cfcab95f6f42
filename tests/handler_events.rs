mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::{Value, json};
use unwrapped_dashboard::api::handlers::{event_handler, footer_handler};

fn server() -> TestServer {
    let app = Router::new()
        .route("/api/events", post(event_handler))
        .route("/api/footer", post(footer_handler))
        .with_state(common::create_test_state());

    TestServer::new(app).unwrap()
}

fn page_controls() -> Value {
    json!({
        "song-artist-dropdown": "The Weeknd | Blinding Lights",
        "start-date": "2020-01-01",
        "end-date": "2020-12-31",
        "type-radio": "song",
        "audio-feature-dropdown": "danceability",
        "x-axis-dropdown": "energy",
        "y-axis-dropdown": "valence"
    })
}

fn chart_ids(json: &Value) -> Vec<&str> {
    json["figures"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["container_id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_entity_change_refreshes_all_charts_in_order() {
    let response = server()
        .post("/api/events")
        .json(&json!({
            "event": "change",
            "control": "song-artist-dropdown",
            "controls": page_controls()
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["outcome"], "refreshed");
    assert_eq!(json["scope"], "all");
    assert_eq!(
        chart_ids(&json),
        vec!["choropleth-map", "line-graph", "dance-energy-chart", "scatter-plot"]
    );

    let line = &json["figures"][1]["figure"];
    assert_eq!(
        line["layout"]["title"],
        "Daily Popularity Trend for The Weeknd | Blinding Lights"
    );
    assert_eq!(line["data"][0]["y"], json!([90.0, 70.0]));
}

#[tokio::test]
async fn test_feature_change_refreshes_only_dance_energy() {
    let response = server()
        .post("/api/events")
        .json(&json!({
            "event": "change",
            "control": "audio-feature-dropdown",
            "controls": page_controls()
        }))
        .await;

    let json = response.json::<Value>();
    assert_eq!(json["scope"], "dance_energy");
    assert_eq!(chart_ids(&json), vec!["dance-energy-chart"]);
    assert_eq!(
        json["figures"][0]["figure"]["layout"]["title"],
        "Top Songs by Danceability"
    );
}

#[tokio::test]
async fn test_axis_change_refreshes_only_scatter() {
    for control in ["x-axis-dropdown", "y-axis-dropdown"] {
        let response = server()
            .post("/api/events")
            .json(&json!({
                "event": "change",
                "control": control,
                "controls": page_controls()
            }))
            .await;

        let json = response.json::<Value>();
        assert_eq!(json["scope"], "scatter");
        assert_eq!(chart_ids(&json), vec!["scatter-plot"]);
        assert_eq!(
            json["figures"][0]["figure"]["layout"]["title"],
            "Energy vs Valence"
        );
    }
}

#[tokio::test]
async fn test_change_on_missing_control_is_ignored() {
    let response = server()
        .post("/api/events")
        .json(&json!({
            "event": "change",
            "control": "x-axis-dropdown",
            "controls": { "song-artist-dropdown": "Dua Lipa" }
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["outcome"], "ignored");
    assert_eq!(json["control"], "x-axis-dropdown");
}

#[tokio::test]
async fn test_missing_optional_controls_still_refresh() {
    let response = server()
        .post("/api/events")
        .json(&json!({
            "event": "change",
            "control": "type-radio",
            "controls": { "type-radio": null }
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["outcome"], "refreshed");
    assert_eq!(json["failed"].as_array().unwrap().len(), 0);
    assert_eq!(chart_ids(&json).len(), 4);
}

#[tokio::test]
async fn test_scroll_keeps_footer_offset() {
    let server = server();

    for scroll_y in [0.0, 480.0, 12_000.5] {
        let response = server
            .post("/api/events")
            .json(&json!({ "event": "scroll", "scroll_y": scroll_y }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "outcome": "repositioned",
            "element_id": "bottom-pic",
            "bottom": "60px"
        }));
    }
}

#[tokio::test]
async fn test_oversized_control_value_is_rejected() {
    let response = server()
        .post("/api/events")
        .json(&json!({
            "event": "change",
            "control": "song-artist-dropdown",
            "controls": { "song-artist-dropdown": "a".repeat(1000) }
        }))
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_multibyte_entity_within_limit_refreshes() {
    let response = server()
        .post("/api/events")
        .json(&json!({
            "event": "change",
            "control": "song-artist-dropdown",
            "controls": { "song-artist-dropdown": "あ".repeat(200) }
        }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["outcome"], "refreshed");
}

#[tokio::test]
async fn test_footer_position_for_scroll() {
    let server = server();

    for scroll_y in [0.0, 2_400.0] {
        let response = server
            .post("/api/footer")
            .json(&json!({ "scroll_y": scroll_y }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "outcome": "repositioned",
            "element_id": "bottom-pic",
            "bottom": "60px"
        }));
    }
}
