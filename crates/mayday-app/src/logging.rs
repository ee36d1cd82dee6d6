//! `tracing-subscriber` setup.
//!
//! Precedence: `--log-level`, then `RUST_LOG`, then `[logging] level`.

use mayday_config::schema::LogLevel;
use tracing_subscriber::EnvFilter;

/// Expand a `--log-level` value. Bare levels are scoped to Mayday's crates;
/// anything else is taken as a raw filter directive.
pub fn cli_directive(value: &str) -> String {
    match serde_json::from_value::<LogLevel>(serde_json::Value::String(value.to_lowercase())) {
        Ok(level) => level.directive(),
        Err(_) => value.to_string(),
    }
}

/// Build the filter for the given overrides.
pub fn filter(cli: Option<&str>, configured: LogLevel) -> EnvFilter {
    if let Some(value) = cli {
        return EnvFilter::new(cli_directive(value));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured.directive()))
}

/// Install the global subscriber.
pub fn init(cli: Option<&str>, configured: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(filter(cli, configured))
        .init();
}

/// A subscriber for the short window before config is loaded.
pub fn bootstrap(cli: Option<&str>) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(filter(cli, LogLevel::default()))
        .finish()
}
