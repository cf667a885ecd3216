//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                             GET   健康检查
//! - /api/catalog                          GET   全部可选项
//! - /api/text/estimate                    POST  文本统计
//! - /api/convert                          POST  文本转语音
//! - /api/preview                          POST  试听音色（返回 audio/mpeg）
//! - /api/audio/:conversion_id/:filename   GET   下载生成的文件
//! - /api/stats                            GET   会话统计

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/catalog", get(handlers::get_catalog))
        .route("/text/estimate", post(handlers::estimate_text))
        .route("/convert", post(handlers::convert))
        .route("/preview", post(handlers::preview))
        .route(
            "/audio/:conversion_id/:filename",
            get(handlers::download_audio),
        )
        .route("/stats", get(handlers::get_stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::util::ServiceExt;

    use crate::application::CatalogLimits;
    use crate::infrastructure::adapters::FakeTtsClient;
    use crate::infrastructure::memory::{InMemoryConversionStats, InMemoryConversionStore};

    fn app(fake: FakeTtsClient) -> Router {
        let state = AppState::new(
            Arc::new(fake),
            Arc::new(InMemoryConversionStore::new(10)),
            Arc::new(InMemoryConversionStats::new()),
            CatalogLimits {
                chunk_size: 500,
                max_chars: 5000,
            },
            Duration::ZERO,
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn long_text() -> String {
        let paragraph = format!("{}.", "x".repeat(399));
        format!("{0}\n\n{0}\n\n{0}", paragraph)
    }

    #[tokio::test]
    async fn test_ping() {
        let app = app(FakeTtsClient::new());
        let response = send(&app, Method::GET, "/api/ping", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_catalog() {
        let app = app(FakeTtsClient::new());
        let body = json_body(send(&app, Method::GET, "/api/catalog", None).await).await;

        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["languages"].as_array().unwrap().len(), 9);
        assert_eq!(body["data"]["defaults"]["speed"], "normal");
        assert_eq!(body["data"]["limits"]["chunk_size"], 500);
    }

    #[tokio::test]
    async fn test_estimate() {
        let app = app(FakeTtsClient::new());
        let body = json_body(
            send(
                &app,
                Method::POST,
                "/api/text/estimate",
                Some(json!({ "text": long_text(), "speed": "lenta" })),
            )
            .await,
        )
        .await;

        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["chunks_needed"], 3);
        assert_eq!(body["data"]["word_count"], 3);
    }

    #[tokio::test]
    async fn test_convert_then_download() {
        let app = app(FakeTtsClient::new());
        let body = json_body(
            send(
                &app,
                Method::POST,
                "/api/convert",
                Some(json!({ "text": long_text(), "mode": "separate" })),
            )
            .await,
        )
        .await;

        assert_eq!(body["errno"], 0);
        let files = body["data"]["files"].as_array().unwrap();
        assert_eq!(files.len(), 3);
        assert_eq!(files[1]["filename"], "audio_part_02.mp3");

        let url = files[1]["url"].as_str().unwrap();
        let response = send(&app, Method::GET, url, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"audio_part_02.mp3\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"ID3|"));

        let stats = json_body(send(&app, Method::GET, "/api/stats", None).await).await;
        assert_eq!(stats["data"]["conversions"], 1);
        assert_eq!(stats["data"]["characters"], 1204);
        assert_eq!(stats["data"]["stored_conversions"], 1);
    }

    #[tokio::test]
    async fn test_convert_empty_text() {
        let app = app(FakeTtsClient::new());
        let body = json_body(
            send(&app, Method::POST, "/api/convert", Some(json!({ "text": "   " }))).await,
        )
        .await;

        assert_eq!(body["errno"], 0);
        assert!(body["data"]["conversion_id"].is_null());
        assert!(body["data"]["files"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_convert_failure_reports_part() {
        let app = app(FakeTtsClient::new().fail_on_call(2, "HTTP 429"));
        let body = json_body(
            send(&app, Method::POST, "/api/convert", Some(json!({ "text": long_text() }))).await,
        )
        .await;

        assert_eq!(body["errno"], 503);
        assert_eq!(body["error"], "failed to synthesize part 2: Service error: HTTP 429");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_preview_returns_audio() {
        let app = app(FakeTtsClient::new());
        let response = send(
            &app,
            Method::POST,
            "/api/preview",
            Some(json!({ "voice": { "voice_type": "infantil", "language": "pt" } })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "audio/mpeg");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(!bytes.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_audio_file() {
        let app = app(FakeTtsClient::new());
        let uri = format!("/api/audio/{}/audio_part_01.mp3", uuid::Uuid::new_v4());
        let body = json_body(send(&app, Method::GET, &uri, None).await).await;
        assert_eq!(body["errno"], 404);
    }
}
