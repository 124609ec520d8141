//! Telemetry initialization (tracing/tracing-subscriber).
//!
//! - LOG_LEVEL holds filter directives; unset or invalid falls back to
//!   `DEFAULT_DIRECTIVES`.
//! - LOG_FORMAT picks the output: `pretty` (default), `compact` or `json`.
//!
//! Targets used across the crate: `cinesaga` (process), `corpus` (loading and
//! pools), `engine` (selection and building).

use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVES: &str = "info,engine=debug,corpus=info,cinesaga=debug,tower_http=info,axum=info";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Pretty`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            Some("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install the global subscriber. A second call is a no-op (the first
/// subscriber stays), so tests and embedders can call it freely.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let format = LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    if installed.is_ok() {
        tracing::debug!(target: "cinesaga", ?format, "Tracing initialized");
    }
}
