use tracing::warn;
use usersapp::error::AppError;
use usersapp::{conf, control, logging};

/// Entry point that loads configuration and starts the control loop.
fn main() -> Result<(), AppError> {
    let (config, problem) = conf::load();
    logging::init(&config);
    if let Some(err) = problem {
        warn!(%err, "using default configuration");
    }

    control::control_loop(&config)
}
