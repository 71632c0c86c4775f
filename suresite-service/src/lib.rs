pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;

use axum::{
    body::Body,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    error_fallback::{method_not_allowed_middleware, not_found_fallback, panic_response},
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::SiteConfig;
use crate::services::{PageBuilderStore, SiteWriter};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "SureSite API",
        description = "AI-Powered Website Builder Backend",
        version = "1.0.0"
    ),
    paths(
        handlers::system::root,
        handlers::system::health_check,
        handlers::system::api_status,
        handlers::generate::generate_website,
        handlers::chat::chat_with_ai,
        handlers::projects::list_projects,
        handlers::projects::create_project,
        handlers::projects::get_project,
        handlers::export::export_to_pagebuilder,
        handlers::export::save_website,
    ),
    components(
        schemas(
            dtos::ErrorResponse,
            dtos::system::RootResponse,
            dtos::system::HealthResponse,
            dtos::system::ApiStatusResponse,
            dtos::system::ApiEndpoints,
            dtos::generate::GenerateRequest,
            dtos::generate::GenerateResponse,
            dtos::chat::ChatMessage,
            dtos::chat::ChatRequest,
            dtos::chat::ChatReply,
            dtos::chat::ChatResponse,
            dtos::projects::Project,
            dtos::projects::ProjectListResponse,
            dtos::projects::CreateProjectRequest,
            dtos::projects::CreateProjectResponse,
            dtos::export::PageExportRequest,
            dtos::export::SaveWebsiteRequest,
            dtos::export::ExportResponse,
        )
    ),
    tags(
        (name = "Observability", description = "Liveness and API status"),
        (name = "Generation", description = "Website generation (placeholder)"),
        (name = "AI", description = "Assistant chat (placeholder)"),
        (name = "Projects", description = "Project stubs; nothing is persisted"),
        (name = "Export", description = "Page builder and static site export"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub pagebuilder: PageBuilderStore,
    pub site_writer: SiteWriter,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        let pagebuilder = PageBuilderStore::new(config.storage.pagebuilder_db_path.clone());
        let site_writer = SiteWriter::new(config.storage.websites_dir.clone());
        Self {
            config: Arc::new(config),
            pagebuilder,
            site_writer,
        }
    }
}

pub fn build_router(state: AppState) -> Result<Router, AppError> {
    let cors = state.config.cors.layer()?;

    let mut app = Router::new()
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health_check))
        .route("/metrics", get(handlers::system::metrics))
        .route("/api/v1/status", get(handlers::system::api_status))
        .route(
            "/api/v1/generate/generate-website",
            post(handlers::generate::generate_website),
        )
        .route("/api/v1/ai/chat", post(handlers::chat::chat_with_ai))
        .route(
            "/api/v1/projects",
            get(handlers::projects::list_projects).post(handlers::projects::create_project),
        )
        .route(
            "/api/v1/projects/:project_id",
            get(handlers::projects::get_project),
        )
        .route(
            "/api/export-to-pagebuilder",
            post(handlers::export::export_to_pagebuilder),
        )
        .route("/api/save-website", post(handlers::export::save_website));

    if state.config.docs.enabled {
        app = app
            .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
            .merge(Redoc::with_url("/redoc", ApiDoc::openapi()));
    }

    // Route-level so the matched template is visible to the metrics labels
    let app = app
        .route_layer(from_fn(metrics_middleware))
        .fallback(not_found_fallback)
        .with_state(state)
        // Innermost: JSON body for the router's bare 405
        .layer(from_fn(method_not_allowed_middleware))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors);

    Ok(app)
}
