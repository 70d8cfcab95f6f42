//! Request spans for the dashboard's HTTP traffic.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// One `INFO` span per request, closed with status and latency in ms.
///
/// 5xx responses are also logged at `ERROR`, which covers an interrupted
/// chart render behind `/api/events` or `/api/charts/refresh`.
///
/// ```text
/// INFO request{method=POST uri=/api/events version=HTTP/1.1}: finished processing request latency=38 ms status=200
/// INFO request{method=GET uri=/api/charts/refresh?scope=scatter version=HTTP/1.1}: finished processing request latency=21 ms status=200
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_layer_wraps_event_route() {
        let app = Router::new()
            .route("/api/events", post(|| async { StatusCode::OK }))
            .layer(layer());

        let response = app
            .oneshot(
                Request::post("/api/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
