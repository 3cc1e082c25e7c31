//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and tracer name attached to every exported span.
pub const SERVICE_NAME: &str = "EmeraldShaker";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "emerald-shaker-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: an [`EnvFilter`] built from
/// `config.trace_level` (default `info`) feeding an OpenTelemetry layer that
/// writes OTLP JSON to `<data dir>/emerald-shaker-otlp.json`.
///
/// The plugin and the worker each call this once. Repeat calls are no-ops.
/// An unwritable data directory disables tracing silently.
///
/// # Example
///
/// ```rust
/// use emerald_shaker::observability::init_tracing;
/// use emerald_shaker::Config;
///
/// init_tracing(&Config {
///     trace_level: Some("debug".to_string()),
///     ..Config::default()
/// });
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
