use service_core::axum::http::HeaderValue;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub common: core_config::Config,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub cors: CorsConfig,
    pub docs: DocsConfig,
    pub generation: GenerationConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Exact origins to allow. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Serve Swagger UI at /docs, ReDoc at /redoc and the document at /openapi.json.
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// HTML-escape the prompt before it is placed in the generated page.
    /// Off by default: the prompt is interpolated verbatim.
    pub escape_prompt: bool,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// JSON page database consumed by the Puck page builder.
    pub pagebuilder_db_path: PathBuf,
    /// Root directory for saved static websites.
    pub websites_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
            cors: CorsConfig {
                allowed_origins: Vec::new(),
            },
            docs: DocsConfig { enabled: true },
            generation: GenerationConfig {
                escape_prompt: false,
            },
            storage: StorageConfig {
                pagebuilder_db_path: PathBuf::from("pagebuilder/database.json"),
                websites_dir: PathBuf::from("websites"),
            },
        }
    }
}

impl SiteConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let default_level = if common.debug { "debug" } else { "info" };

        let config = SiteConfig {
            log_level: get_env("LOG_LEVEL", default_level),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.trim().is_empty()),
            cors: CorsConfig {
                allowed_origins: parse_origins(&get_env("CORS_ALLOWED_ORIGINS", "*")),
            },
            docs: DocsConfig {
                enabled: get_bool("DOCS_ENABLED", true)?,
            },
            generation: GenerationConfig {
                escape_prompt: get_bool("GENERATE_ESCAPE_PROMPT", false)?,
            },
            storage: StorageConfig {
                pagebuilder_db_path: get_env("PAGEBUILDER_DB_PATH", "pagebuilder/database.json")
                    .into(),
                websites_dir: get_env("WEBSITES_DIR", "websites").into(),
            },
            common,
        };

        // Fail at startup rather than on first request
        config.cors.origins()?;

        Ok(config)
    }
}

impl CorsConfig {
    /// Build the CORS layer. With no explicit origins every origin, method and
    /// header is allowed, credentials included.
    pub fn layer(&self) -> Result<CorsLayer, AppError> {
        if self.allowed_origins.is_empty() {
            return Ok(CorsLayer::very_permissive());
        }

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.origins()?))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true))
    }

    /// Parse the configured origins into header values.
    pub fn origins(&self) -> Result<Vec<HeaderValue>, AppError> {
        self.allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>().map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
                })
            })
            .collect()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_bool(key: &str, default: bool) -> Result<bool, AppError> {
    match env::var(key) {
        Ok(val) => parse_bool(&val).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!(
                "{} must be a boolean (true/false), got '{}'",
                key,
                val
            ))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
