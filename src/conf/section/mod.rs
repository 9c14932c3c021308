mod control;
mod logging;
mod ui;

pub use control::ControlConfigSection;
pub use logging::{DEFAULT_LOG_LEVEL, LoggingConfigSection};
pub use ui::UiConfigSection;
