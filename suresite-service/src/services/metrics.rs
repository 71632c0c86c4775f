//! Metrics collection for suresite-service.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use service_core::error::AppError;
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the process-wide Prometheus recorder. Call once, from `main`.
pub fn init_metrics() -> Result<(), AppError> {
    let handle = PrometheusBuilder::new().install_recorder().map_err(|e| {
        AppError::InternalError(anyhow::anyhow!(
            "failed to install Prometheus recorder: {}",
            e
        ))
    })?;

    METRICS_HANDLE.set(handle).map_err(|_| {
        AppError::InternalError(anyhow::anyhow!("metrics handle already initialized"))
    })
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}

pub fn record_generation() {
    counter!("suresite_generations_total").increment(1);
}

pub fn record_chat_message() {
    counter!("suresite_chat_messages_total").increment(1);
}

/// `kind` is `pagebuilder` or `website`; `outcome` is `ok` or `error`.
pub fn record_page_export(kind: &'static str, outcome: &'static str) {
    counter!("suresite_page_exports_total", "kind" => kind, "outcome" => outcome).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_counters_are_exported() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            record_generation();
            record_generation();
            record_chat_message();
            record_page_export("website", "ok");
        });

        let output = handle.render();
        assert!(output.contains("suresite_generations_total 2"), "{}", output);
        assert!(output.contains("suresite_chat_messages_total 1"), "{}", output);

        let export_line = output
            .lines()
            .find(|line| line.starts_with("suresite_page_exports_total{"))
            .expect("page export counter missing");
        assert!(export_line.contains(r#"kind="website""#));
        assert!(export_line.contains(r#"outcome="ok""#));
        assert!(export_line.ends_with(" 1"));
    }
}
