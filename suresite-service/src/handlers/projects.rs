//! Project endpoints. Nothing is stored: every call fabricates its answer.

use axum::{
    extract::{Path, Query},
    Json,
};
use axum_extra::extract::WithRejection;
use service_core::error::AppError;

use crate::dtos::projects::{
    CreateProjectRequest, CreateProjectResponse, Project, ProjectListParams, ProjectListResponse,
};

/// List projects
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    params(ProjectListParams),
    responses(
        (status = 200, description = "Always empty; pagination echoed", body = ProjectListResponse),
        (status = 400, description = "Non-integer pagination", body = crate::dtos::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    WithRejection(Query(params), _): WithRejection<Query<ProjectListParams>, AppError>,
) -> Json<ProjectListResponse> {
    Json(ProjectListResponse {
        projects: Vec::new(),
        total: 0,
        page: params.page,
        size: params.size,
    })
}

/// Create a project
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Project accepted (not persisted)", body = CreateProjectResponse),
        (status = 400, description = "Body malformed", body = crate::dtos::ErrorResponse)
    ),
    tag = "Projects"
)]
#[tracing::instrument(skip(request))]
pub async fn create_project(
    WithRejection(Json(request), _): WithRejection<Json<CreateProjectRequest>, AppError>,
) -> Json<CreateProjectResponse> {
    let name = request.name_or_default().to_string();
    tracing::info!(name = %name, "Project create requested");

    Json(CreateProjectResponse {
        id: 1,
        name,
        status: "created".to_string(),
        message: "Project created successfully".to_string(),
    })
}

/// Get a project by id
#[utoipa::path(
    get,
    path = "/api/v1/projects/{project_id}",
    params(("project_id" = i128, Path, description = "Any integer; no existence check")),
    responses(
        (status = 200, description = "Fabricated project", body = Project),
        (status = 400, description = "Non-integer id", body = crate::dtos::ErrorResponse)
    ),
    tag = "Projects"
)]
pub async fn get_project(
    WithRejection(Path(project_id), _): WithRejection<Path<i128>, AppError>,
) -> Json<Project> {
    Json(Project {
        id: project_id,
        name: format!("Project {}", project_id),
        status: "active".to_string(),
    })
}
