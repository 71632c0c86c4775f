#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use suresite_service::config::SiteConfig;
use suresite_service::startup::Application;
use suresite_service::{build_router, AppState};
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Router wired to a throwaway storage directory.
pub struct TestApp {
    pub router: Router,
    pub storage: TempDir,
}

pub fn test_config(storage: &TempDir) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.common.host = "127.0.0.1".to_string();
    config.common.port = 0;
    config.storage.pagebuilder_db_path = storage.path().join("pagebuilder/database.json");
    config.storage.websites_dir = storage.path().join("websites");
    config
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    pub fn with_config(customize: impl FnOnce(&mut SiteConfig)) -> Self {
        let storage = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = test_config(&storage);
        customize(&mut config);

        let router = build_router(AppState::new(config)).expect("Failed to build router");
        Self { router, storage }
    }

    pub async fn request(&self, request: Request<Body>) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Router call failed")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        into_json(response).await
    }

    pub async fn get_raw(&self, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = self
            .request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.post_raw(uri, body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = self
            .request(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await;
        into_json(response).await
    }
}

pub async fn into_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "Response body is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, body)
}

/// A real server on an ephemeral port.
pub struct SpawnedApp {
    pub address: String,
    pub storage: TempDir,
}

impl SpawnedApp {
    pub async fn spawn() -> Self {
        let storage = tempfile::tempdir().expect("Failed to create temp dir");
        let app = Application::build(test_config(&storage))
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to answer
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        }

        Self { address, storage }
    }
}
