//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use hirehub_api::router::build_router;
use hirehub_api::state::AppState;
use hirehub_core::config::AppConfig;
use hirehub_storage::ResumeStore;
use hirehub_store::MemStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The record store, for direct assertions
    pub store: Arc<MemStore>,
    /// Temporary upload directory (removed on drop)
    pub upload_dir: tempfile::TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (Null if the body was not JSON)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with an empty store and a fresh
    /// temporary upload directory
    pub async fn new() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create temp upload dir");
        let config = AppConfig::default();

        let resumes = ResumeStore::new(
            upload_dir.path().to_str().unwrap(),
            config.storage.max_upload_size_bytes,
        )
        .await
        .expect("Failed to init resume storage");

        let store = Arc::new(MemStore::new());

        let state = AppState {
            config: Arc::new(config),
            store: Arc::clone(&store),
            resumes: Arc::new(resumes),
        };

        let router = build_router(state);

        Self {
            router,
            store,
            upload_dir,
        }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload a single multipart file to `/api/upload/resume`
    pub async fn upload(
        &self,
        field: &str,
        filename: &str,
        content_type: &str,
        data: &[u8],
    ) -> TestResponse {
        let boundary = "hirehub-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\n\
                 Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/api/upload/resume")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("Failed to build upload request");

        self.send(req).await
    }

    /// Fetch a raw (non-JSON) response, e.g. a served upload
    pub async fn get_raw(&self, path: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        (status, content_type, bytes.to_vec())
    }

    /// Create a job through the API and return its JSON body
    pub async fn create_job(&self) -> Value {
        let response = self
            .request(
                "POST",
                "/api/jobs",
                Some(serde_json::json!({
                    "title": "X",
                    "company": "Y",
                    "location": "Z",
                    "type": "Full-time",
                    "description": "d",
                    "requirements": ["A"],
                    "experienceLevel": "Entry Level",
                })),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Job creation failed: {:?}",
            response.body
        );
        response.body
    }

    /// Count files currently in the upload directory
    pub fn uploaded_file_count(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path())
            .expect("Failed to read upload dir")
            .count()
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}
