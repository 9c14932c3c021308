use serde::Deserialize;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfigSection {
    pub level: Option<String>,
}

impl LoggingConfigSection {
    /// Filter directive used when `RUST_LOG` is not set.
    pub fn filter_directive(&self) -> &str {
        self.level
            .as_deref()
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
