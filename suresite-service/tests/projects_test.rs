mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn list_projects_uses_default_pagination() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/projects").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "projects": [], "total": 0, "page": 0, "size": 1000 })
    );
}

#[tokio::test]
async fn list_projects_echoes_pagination_without_bounds_checks() {
    let app = TestApp::new();

    for (page, size) in [(3, 25), (-1, 0), (0, -50), (i64::MAX, i64::MIN)] {
        let (status, body) = app
            .get(&format!("/api/v1/projects?page={}&size={}", page, size))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["projects"], json!([]));
        assert_eq!(body["total"], 0);
        assert_eq!(body["page"], page);
        assert_eq!(body["size"], size);
    }
}

#[tokio::test]
async fn list_projects_rejects_non_integer_pagination() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/projects?page=first").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Invalid query parameters"));
}

#[tokio::test]
async fn create_project_returns_fixed_id() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/v1/projects", json!({ "name": "Foo", "template": "blog" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "name": "Foo",
            "status": "created",
            "message": "Project created successfully"
        })
    );
}

#[tokio::test]
async fn create_project_defaults_name() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/api/v1/projects", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "New Project");
}

#[tokio::test]
async fn get_project_fabricates_any_id() {
    let app = TestApp::new();

    for id in [1_i64, 42, 0, -7, 9_007_199_254_740_993] {
        let (status, body) = app.get(&format!("/api/v1/projects/{}", id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "id": id, "name": format!("Project {}", id), "status": "active" })
        );
    }
}

#[tokio::test]
async fn get_project_accepts_ids_beyond_i64() {
    let app = TestApp::new();

    for id in ["99999999999999999999", "-99999999999999999999"] {
        let (status, body) = app.get_raw(&format!("/api/v1/projects/{}", id)).await;

        assert_eq!(status, StatusCode::OK, "id: {}", id);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            format!(
                r#"{{"id":{},"name":"Project {}","status":"active"}}"#,
                id, id
            )
        );
    }
}

#[tokio::test]
async fn get_project_rejects_non_integer_id() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/v1/projects/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("Invalid path parameter"));
}
