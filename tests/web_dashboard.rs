mod common;

use axum::Router;
use axum_test::TestServer;
use unwrapped_dashboard::web;

#[tokio::test]
async fn test_dashboard_page_renders_controls() {
    let app = Router::new()
        .merge(web::routes::routes())
        .with_state(common::create_test_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(r#"id="song-artist-dropdown""#));
    assert!(html.contains(r#"<option value="Dua Lipa | Levitating" selected>"#));
    assert!(html.contains(r#"value="2020-01-01""#));
    assert!(html.contains(r#"value="2021-04-01""#));
    assert!(html.contains(r#"name="type" value="song" checked"#));
    assert!(html.contains(r#"<option value="tempo">Tempo</option>"#));
    assert!(html.contains(r#"id="bottom-pic""#));
    assert!(html.contains("bottom: 60px"));
    assert!(!html.contains("data-top-n"));

    for container in [
        "choropleth-map",
        "line-graph",
        "genre-distribution",
        "dance-energy-chart",
        "scatter-plot",
    ] {
        assert!(html.contains(&format!(r#"id="{container}""#)), "missing {container}");
    }
}
