pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Extra room over the upload limit for multipart framing, so oversized files
/// still reach validation and get a FILE_TOO_LARGE answer.
const BODY_LIMIT_HEADROOM: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .analyzer
        .max_upload_bytes
        .saturating_add(BODY_LIMIT_HEADROOM);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/resume/upload", post(handlers::handle_upload))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use bytes::Bytes;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::analysis::{AnalysisError, AnalyzerSettings, ResumeAnalyzer, TextExtractor};
    use crate::config::Config;

    const BOUNDARY: &str = "X-RESUME-BOUNDARY";

    struct FakeExtractor(Result<&'static str, &'static str>);

    #[async_trait]
    impl TextExtractor for FakeExtractor {
        async fn extract(&self, _bytes: Bytes) -> Result<String, AnalysisError> {
            self.0
                .map(String::from)
                .map_err(|e| AnalysisError::TextExtraction(e.to_string()))
        }
    }

    fn app(extracted: Result<&'static str, &'static str>, settings: AnalyzerSettings) -> Router {
        let config = Config {
            port: 0,
            rust_log: "info".to_string(),
            allowed_origins: vec![],
            analyzer: settings.clone(),
        };
        build_router(AppState {
            config,
            analyzer: Arc::new(ResumeAnalyzer::new(settings).unwrap()),
            extractor: Arc::new(FakeExtractor(extracted)),
        })
    }

    fn upload_request(field: &str, filename: &str, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/resume/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(Ok(""), AnalyzerSettings::default()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn test_upload_returns_analysis() {
        let text = "Core Competencies\nPython, FastAPI, PostgreSQL, REST API\nExperience\nAcme 2019 - 2024";
        let app = app(Ok(text), AnalyzerSettings::default());
        let (status, body) = send(app, upload_request("file", "cv.pdf", b"%PDF-1.7")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["technical_skills"]["languages"][0], "Python");
        assert_eq!(body["technical_skills"]["backend"][0], "FastAPI");
        assert_eq!(body["technical_skills"]["database"][0], "PostgreSQL");
        assert_eq!(body["technical_skills"]["architecture"][0], "REST API");
        assert_eq!(body["detected_experience_years"], 5);
        assert_eq!(body["generated_questions"].as_array().unwrap().len(), 8);
        assert_eq!(body["generated_questions"][0]["category"], "Python");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf() {
        let app = app(Ok("Python"), AnalyzerSettings::default());
        let (status, body) = send(app, upload_request("file", "cv.docx", b"PK")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_FILE_TYPE");
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let settings = AnalyzerSettings {
            max_upload_bytes: 16,
            ..Default::default()
        };
        let app = app(Ok("Python"), settings);
        let (status, body) = send(app, upload_request("file", "cv.pdf", &[b'x'; 32])).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_upload_past_body_limit_is_file_too_large() {
        let settings = AnalyzerSettings {
            max_upload_bytes: 16,
            ..Default::default()
        };
        let app = app(Ok("Python"), settings);
        let content = vec![b'x'; 2 * 1024 * 1024];
        let (status, body) = send(app, upload_request("file", "cv.pdf", &content)).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "FILE_TOO_LARGE");
    }

    #[tokio::test]
    async fn test_upload_exactly_at_limit_is_accepted() {
        let settings = AnalyzerSettings {
            max_upload_bytes: 16,
            ..Default::default()
        };
        let app = app(Ok("Skills\nPython"), settings);
        let (status, body) = send(app, upload_request("file", "cv.pdf", &[b'x'; 16])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["technical_skills"]["languages"][0], "Python");
    }

    #[tokio::test]
    async fn test_upload_reports_extraction_failure() {
        let app = app(Err("encrypted document"), AnalyzerSettings::default());
        let (status, body) = send(app, upload_request("file", "cv.pdf", b"%PDF")).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "TEXT_EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let app = app(Ok("Python"), AnalyzerSettings::default());
        let (status, body) = send(app, upload_request("resume", "cv.pdf", b"%PDF")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
