pub mod error_fallback;
pub mod metrics;
pub mod security_headers;
pub mod tracing;
