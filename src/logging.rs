//! Log output for the CLI.
//!
//! The subscriber is built explicitly and handed back to the caller, who
//! scopes it with `tracing::subscriber::with_default`. Nothing here installs a
//! process-wide default.

use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{Layer, Registry};

use crate::error::CliError;

/// Targets emitted by the HTTP stack underneath reqwest.
pub const HTTP_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util", "h2", "rustls"];

/// Parse a level name.
///
/// Accepts tracing's names plus `warning`, `critical`, `fatal` and `notset`
/// so the familiar spellings keep working.
pub fn parse_level(name: &str) -> Result<LevelFilter, CliError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "warning" => Ok(LevelFilter::WARN),
        "critical" | "fatal" => Ok(LevelFilter::ERROR),
        "notset" => Ok(LevelFilter::TRACE),
        other => other
            .parse()
            .map_err(|_| CliError::InvalidLogLevel(name.to_string())),
    }
}

/// Filter with `level` as the default and `http_level` for [`HTTP_TARGETS`].
pub fn targets(level: LevelFilter, http_level: LevelFilter) -> Targets {
    Targets::new()
        .with_default(level)
        .with_targets(HTTP_TARGETS.iter().map(|target| (*target, http_level)))
}

/// Build a subscriber that writes `timestamp LEVEL target: message` lines to stderr.
pub fn subscriber(level: LevelFilter, http_level: LevelFilter) -> impl Subscriber + Send + Sync {
    Registry::default().with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(targets(level, http_level)),
    )
}
