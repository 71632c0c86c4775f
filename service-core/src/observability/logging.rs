use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// How the process-wide subscriber should be assembled.
#[derive(Debug, Clone)]
pub struct LoggingOptions<'a> {
    pub service_name: &'a str,
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: &'a str,
    /// OTLP/gRPC collector; span export is skipped when `None`.
    pub otlp_endpoint: Option<&'a str>,
    /// Human-readable output instead of JSON lines.
    pub pretty: bool,
}

fn otlp_tracer(service_name: &str, endpoint: &str) -> anyhow::Result<sdktrace::Tracer> {
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(endpoint);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(sdktrace::config().with_resource(Resource::new(vec![
            KeyValue::new("service.name", service_name.to_string()),
        ])))
        .install_batch(runtime::Tokio)
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to initialize OTLP tracer for service '{}' at endpoint '{}': {}",
                service_name,
                endpoint,
                e
            )
        })?;

    Ok(tracer)
}

/// Install the global tracing subscriber. Must run inside a tokio runtime when
/// an OTLP endpoint is given.
pub fn init_tracing(options: LoggingOptions<'_>) -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(options.log_level));

    let telemetry = match options.otlp_endpoint {
        Some(endpoint) => {
            let tracer = otlp_tracer(options.service_name, endpoint)?;
            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };

    let fmt_layer = if options.pretty {
        tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .json()
            .flatten_event(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
