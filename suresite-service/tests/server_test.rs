mod common;

use common::SpawnedApp;
use serde_json::json;

#[tokio::test]
async fn health_check_over_tcp() {
    let app = SpawnedApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "status": "healthy", "service": "suresite-backend" }));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = SpawnedApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/api/v1/status", app.address))
        .send()
        .await
        .unwrap();
    let generated = response
        .headers()
        .get("x-request-id")
        .expect("missing x-request-id")
        .to_str()
        .unwrap();
    assert!(!generated.is_empty());

    let response = client
        .get(format!("{}/api/v1/status", app.address))
        .header("x-request-id", "trace-me-123")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

#[tokio::test]
async fn cors_preflight_allows_any_origin() {
    let app = SpawnedApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .request(
            reqwest::Method::OPTIONS,
            format!("{}/api/v1/generate/generate-website", app.address),
        )
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:3000"
    );
    assert_eq!(response.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn cors_headers_on_simple_requests() {
    let app = SpawnedApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/", app.address))
        .header("origin", "https://editor.example")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "https://editor.example"
    );
}

#[tokio::test]
async fn security_headers_are_applied() {
    let app = SpawnedApp::spawn().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("content-security-policy"));
}
