//! Page export endpoints: Puck page-builder database and static site directory.

use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedJson;

use crate::dtos::export::{ExportResponse, PageExportRequest, SaveWebsiteRequest};
use crate::services::{metrics, PageExport, SitePage};
use crate::AppState;

/// Export a page to the page builder
#[utoipa::path(
    post,
    path = "/api/export-to-pagebuilder",
    request_body = PageExportRequest,
    responses(
        (status = 200, description = "Page stored in the page builder database", body = ExportResponse),
        (status = 400, description = "Title or HTML missing", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Database could not be read or written", body = crate::dtos::ErrorResponse)
    ),
    tag = "Export"
)]
#[tracing::instrument(skip(state, request))]
pub async fn export_to_pagebuilder(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PageExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let page = PageExport {
        title: request.title.unwrap_or_default(),
        path: request.path,
        html: request.html.unwrap_or_default(),
        css: request.css.unwrap_or_default(),
        js: request.js.unwrap_or_default(),
    };

    let route = state.pagebuilder.export(page).await.map_err(|e| {
        metrics::record_page_export("pagebuilder", "error");
        tracing::error!(error = %e, "Error exporting to pagebuilder");
        AppError::server_error("Failed to export to pagebuilder")
    })?;
    metrics::record_page_export("pagebuilder", "ok");

    Ok(Json(ExportResponse {
        success: true,
        message: "Page exported to pagebuilder successfully".to_string(),
        path: route,
    }))
}

/// Save a page as a static website
#[utoipa::path(
    post,
    path = "/api/save-website",
    request_body = SaveWebsiteRequest,
    responses(
        (status = 200, description = "Website files written", body = ExportResponse),
        (status = 400, description = "Page id or HTML missing, or page id unsafe", body = crate::dtos::ErrorResponse),
        (status = 500, description = "Files could not be written", body = crate::dtos::ErrorResponse)
    ),
    tag = "Export"
)]
#[tracing::instrument(skip(state, request))]
pub async fn save_website(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SaveWebsiteRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let page = SitePage {
        page_id: request.page_id.unwrap_or_default(),
        html: request.html.unwrap_or_default(),
        css: request.css.unwrap_or_default(),
        js: request.js.unwrap_or_default(),
    };

    let page_dir = state.site_writer.save(&page).await.map_err(|e| {
        metrics::record_page_export("website", "error");
        tracing::error!(error = %e, page_id = %page.page_id, "Error saving website");
        AppError::server_error("Failed to save website")
    })?;
    metrics::record_page_export("website", "ok");

    Ok(Json(ExportResponse {
        success: true,
        message: "Website saved successfully".to_string(),
        path: page_dir.display().to_string(),
    }))
}
