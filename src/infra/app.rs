use axum::{Router, http};
use http::header::CONTENT_TYPE;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use uuid::Uuid;

use crate::adapters::{self, http::app_state::AppState};

pub fn create_app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(app_state.config.cors_origin.clone())
        .allow_methods([http::Method::GET, http::Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .nest("/api", adapters::http::routes::router())
        .with_state(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &http::Request<_>| {
                        let request_id = Uuid::new_v4();
                        tracing::info_span!(
                            "http-request",
                            method = %request.method(),
                            uri = %request.uri(),
                            version = ?request.version(),
                            request_id = %request_id
                        )
                    }),
                )
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_FRAME_OPTIONS,
                    http::HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    http::header::X_CONTENT_TYPE_OPTIONS,
                    http::HeaderValue::from_static("nosniff"),
                ))
                .layer(cors),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    use crate::test_utils::TestAppStateBuilder;

    fn test_server() -> TestServer {
        TestServer::new(create_app(TestAppStateBuilder::new().build())).unwrap()
    }

    #[tokio::test]
    async fn waitlist_routes_are_mounted_under_api() {
        let server = test_server();

        server
            .post("/api/waitlist")
            .json(&json!({ "email": "mounted@example.com" }))
            .await
            .assert_status(StatusCode::CREATED);

        server
            .get("/api/waitlist/count")
            .await
            .assert_json(&json!({ "count": 1 }));
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let server = test_server();

        let response = server.get("/api/waitlist/count").await;

        assert_eq!(response.header("x-content-type-options"), "nosniff");
        assert_eq!(response.header("x-frame-options"), "DENY");
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let server = test_server();

        server
            .get("/api/unknown")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
