use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PROJECT_NAME: &str = "New Project";

fn default_page_size() -> i64 {
    1000
}

/// Pagination is echoed back untouched; no bounds are enforced.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectListParams {
    #[serde(default)]
    #[param(example = 0)]
    pub page: i64,
    #[serde(default = "default_page_size")]
    #[param(example = 1000)]
    pub size: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Echoed from the path; not limited to `i64`.
    #[schema(example = 7)]
    pub id: i128,
    #[schema(example = "Project 7")]
    pub name: String,
    #[schema(example = "active")]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: u64,
    pub page: i64,
    pub size: i64,
}

/// Any other fields in the body are accepted and ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[serde(default)]
    #[schema(example = "Coffee shop site")]
    pub name: Option<String>,
}

impl CreateProjectRequest {
    pub fn name_or_default(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_PROJECT_NAME,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectResponse {
    #[schema(example = 1)]
    pub id: i64,
    pub name: String,
    #[schema(example = "created")]
    pub status: String,
    #[schema(example = "Project created successfully")]
    pub message: String,
}
