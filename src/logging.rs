use crate::conf::ConfigurationModel;
use crate::conf::section::{DEFAULT_LOG_LEVEL, LoggingConfigSection};
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is harmless.
pub fn init(config: &ConfigurationModel) {
    let (filter, rejected) = build_filter(&config.logging);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(config.ui.color_enabled())
        .with_target(false)
        .try_init();

    if let Some(err) = rejected {
        warn!(
            level = config.logging.filter_directive(),
            %err,
            "invalid log level, using {DEFAULT_LOG_LEVEL}"
        );
    }
    if let Some(path) = config.source_path() {
        debug!(path = %path.display(), "loaded configuration");
    }
}

/// Filter from `RUST_LOG`, else the configured level; an unparsable level is returned for reporting.
fn build_filter(section: &LoggingConfigSection) -> (EnvFilter, Option<ParseError>) {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return (filter, None);
    }

    match EnvFilter::try_new(section.filter_directive()) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_LEVEL), Some(err)),
    }
}
