pub mod api;
pub mod health;
pub mod page;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Page
        .route("/", get(page::handle_index))
        .route("/analyze", post(page::handle_analyze))
        // JSON API
        .route("/api/v1/analyze", post(api::handle_api_analyze))
        .nest_service("/assets", assets)
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::render::PageRenderer;

    fn test_app() -> Router {
        build_router(AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                assets_dir: "assets".to_string(),
            },
            renderer: Arc::new(PageRenderer::new().expect("templates must compile")),
        })
    }

    fn form_post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn json_post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/analyze")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "personalens-web");
    }

    #[tokio::test]
    async fn test_index_mounts_empty_form() {
        let resp = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;
        assert!(html.contains("Sales Intelligence Input"));
        assert!(!html.contains("PersonaLens Insights"));
        assert!(!html.contains("toast toast-"));
    }

    #[tokio::test]
    async fn test_analyze_without_gating_input_shows_warning_only() {
        let resp = test_app()
            .oneshot(form_post("customer_name=Acme&rep_name=Sam"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "missing input is a toast, not an HTTP error");
        let html = body_string(resp).await;
        assert_eq!(html.matches("toast toast-destructive").count(), 1);
        assert!(html.contains("Input Required"));
        assert!(!html.contains("Analysis Complete"));
        assert!(!html.contains("PersonaLens Insights"));
        assert!(html.contains(r#"value="Acme""#), "form values survive the round trip");
    }

    #[tokio::test]
    async fn test_analyze_with_linkedin_and_icp_reveals_panel() {
        let resp = test_app()
            .oneshot(form_post("linkedin_url=https%3A%2F%2Fx&selected_icp=chro"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_string(resp).await;

        assert_eq!(html.matches("toast toast-normal").count(), 1);
        assert!(html.contains("Analysis Complete"));
        assert!(html.contains("PersonaLens Insights"));
        assert_eq!(html.matches("class=\"tile\"").count(), 10);
        assert!(html.contains("Chro Leader"));
        assert!(html.contains(r#"LinkedIn Profile:</span> <span class="stat-value">30%</span>"#));
        assert!(html.contains(r#"Call Transcript:</span> <span class="stat-value">0%</span>"#));
        assert!(html.contains(r#"ICP Selection:</span> <span class="stat-value">20%</span>"#));
        assert!(html.contains(r#"Context Info:</span> <span class="stat-value">0%</span>"#));
        assert!(html.contains(r#"name="results_visible" value="true""#));
    }

    #[tokio::test]
    async fn test_open_panel_survives_failed_analyze() {
        let resp = test_app()
            .oneshot(form_post("results_visible=true"))
            .await
            .unwrap();
        let html = body_string(resp).await;
        assert!(html.contains("Input Required"));
        assert!(html.contains("PersonaLens Insights"));
    }

    #[tokio::test]
    async fn test_api_missing_input_is_422() {
        let resp = test_app().oneshot(json_post("{}")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json["error"]["code"], "UNPROCESSABLE_ENTITY");
        assert_eq!(
            json["error"]["message"],
            "Please provide at least one input (LinkedIn URL, Call Transcript, or ICP selection)"
        );
    }

    #[tokio::test]
    async fn test_api_analyze_returns_tiles_and_notification() {
        let resp = test_app()
            .oneshot(json_post(r#"{"call_transcript":"hello"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json: Value = serde_json::from_str(&body_string(resp).await).unwrap();

        assert_eq!(json["results_visible"], true);
        assert_eq!(json["tiles"].as_array().unwrap().len(), 10);
        assert_eq!(json["tiles"][0]["title"], "Persona Classification");
        assert_eq!(json["tiles"][7]["confidence"], 78);
        assert_eq!(json["notifications"][0]["title"], "Analysis Complete");
        assert_eq!(json["notifications"][0]["severity"], "normal");
    }

    async fn assert_bad_request_envelope(resp: Response) {
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            "application/json",
            "rejections must use the JSON error envelope"
        );
        let json: Value = serde_json::from_str(&body_string(resp).await).unwrap();
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert!(!json["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_api_malformed_json_uses_error_envelope() {
        let resp = test_app().oneshot(json_post("not json")).await.unwrap();
        assert_bad_request_envelope(resp).await;
    }

    #[tokio::test]
    async fn test_api_wrong_field_type_uses_error_envelope() {
        let resp = test_app()
            .oneshot(json_post(r#"{"results_visible":"maybe"}"#))
            .await
            .unwrap();
        assert_bad_request_envelope(resp).await;
    }

    #[tokio::test]
    async fn test_page_undecodable_form_uses_error_envelope() {
        let resp = test_app()
            .oneshot(form_post("linkedin_url=https%3A%2F%2Fx&results_visible=maybe"))
            .await
            .unwrap();
        assert_bad_request_envelope(resp).await;
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let resp = test_app()
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
