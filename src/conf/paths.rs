use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "USERSAPP_CONFIG";

const CONFIG_FILE_NAME: &str = ".usersapprc";

/// Locate the config file from the process environment.
pub fn locate() -> Option<PathBuf> {
    locate_with(|key| env::var_os(key))
}

/// Locate the config file using `lookup` for environment variables.
///
/// An explicit `USERSAPP_CONFIG` wins even when the file is missing, so a typo
/// surfaces as a read warning. Otherwise `~/.usersapprc` is used if present.
pub fn locate_with(lookup: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    let home = lookup("HOME").map(PathBuf::from);

    let explicit = lookup(CONFIG_PATH_ENV)
        .and_then(|raw| raw.into_string().ok())
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty());
    if let Some(raw) = explicit {
        return Some(under_home(&raw, home.as_ref()));
    }

    home.map(|home| home.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Resolve a leading `~` against the home directory; without one the path is taken as is.
fn under_home(raw: &str, home: Option<&PathBuf>) -> PathBuf {
    match (raw.strip_prefix('~'), home) {
        (Some(""), Some(home)) => home.clone(),
        (Some(rest), Some(home)) if rest.starts_with('/') => home.join(&rest[1..]),
        _ => PathBuf::from(raw),
    }
}
