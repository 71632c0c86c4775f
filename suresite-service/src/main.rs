use service_core::observability::{init_tracing, LoggingOptions};
use suresite_service::config::SiteConfig;
use suresite_service::services::init_metrics;
use suresite_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = SiteConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(LoggingOptions {
        service_name: "suresite-service",
        log_level: &config.log_level,
        otlp_endpoint: config.otlp_endpoint.as_deref(),
        pretty: config.common.debug,
    })
    .map_err(|e| {
        eprintln!("Failed to initialize tracing: {}", e);
        std::io::Error::other(format!("Tracing error: {}", e))
    })?;

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
