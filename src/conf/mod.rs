mod error;
mod loader;
mod model;
mod paths;
pub mod section;

pub use error::ConfigError;
pub use loader::{load, load_from_path};
pub use model::ConfigurationModel;
pub use paths::{CONFIG_PATH_ENV, locate_with};
