mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use suresite_service::services::generator::{GENERATED_CSS, GENERATED_JS};

const GENERATE: &str = "/api/v1/generate/generate-website";

#[tokio::test]
async fn generate_interpolates_prompt_verbatim() {
    let app = TestApp::new();

    for prompt in [
        "A bakery landing page",
        "Portfolio with <em>bold</em> & \"quoted\" text",
        "Ünïcødé 🚀 site",
    ] {
        let (status, body) = app.post_json(GENERATE, json!({ "prompt": prompt })).await;

        assert_eq!(status, StatusCode::OK, "prompt: {}", prompt);
        let html = body["html"].as_str().unwrap();
        assert!(html.contains(prompt), "prompt not found verbatim: {}", prompt);
        assert_eq!(body["css"], GENERATED_CSS);
        assert_eq!(body["js"], GENERATED_JS);
    }
}

#[tokio::test]
async fn generate_escapes_prompt_when_configured() {
    let app = TestApp::with_config(|config| config.generation.escape_prompt = true);

    let (status, body) = app
        .post_json(GENERATE, json!({ "prompt": "<script>x()</script>" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    let html = body["html"].as_str().unwrap();
    assert!(!html.contains("<script>x()</script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn generate_requires_prompt() {
    let app = TestApp::new();

    for body in [json!({}), json!({ "prompt": "" }), json!({ "prompt": null })] {
        let (status, response) = app.post_json(GENERATE, body.clone()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response, json!({ "detail": "Prompt is required" }));
    }
}

#[tokio::test]
async fn generate_rejects_malformed_bodies() {
    let app = TestApp::new();

    let (status, body) = app.post_raw(GENERATE, "{\"prompt\":").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("Invalid request body"));

    let (status, _) = app.post_json(GENERATE, json!({ "prompt": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post_json(GENERATE, json!({ "prompt": "x", "unexpected": true }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
