use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a config file was ignored in favour of defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("unable to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}
