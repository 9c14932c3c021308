use super::error::ConfigError;
use super::model::ConfigurationModel;
use super::paths::locate;
use std::fs;
use std::path::Path;

/// Load the user's configuration file.
///
/// Always yields a usable model; when a located file cannot be used the
/// defaults come back together with the reason, so it can be logged once
/// logging is up.
pub fn load() -> (ConfigurationModel, Option<ConfigError>) {
    let Some(path) = locate() else {
        return (ConfigurationModel::default(), None);
    };

    match load_from_path(&path) {
        Ok(cfg) => (cfg, None),
        Err(err) => (ConfigurationModel::default(), Some(err)),
    }
}

/// Read and parse one config file. An empty file is a default configuration.
pub fn load_from_path(path: &Path) -> Result<ConfigurationModel, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = serde_yaml::from_str::<Option<ConfigurationModel>>(&contents).map_err(
        |source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
    )?;

    let mut cfg = parsed.unwrap_or_default();
    cfg.set_source_path(path.to_path_buf());
    Ok(cfg)
}
