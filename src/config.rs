use std::env;
use std::path::{Path, PathBuf};

use crate::error::EnvError;

pub const ENV_FILENAME: &str = ".env";

/// Returns the nearest `.env`, checking `start` first and then each parent
/// directory up to the filesystem root.
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(ENV_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// Loads the nearest `.env` above `start` into the process environment.
///
/// Variables that are already set keep their values. Lines that do not parse
/// are logged and skipped. Returns `Ok(None)` when no file was found.
pub fn load_env_from(start: &Path) -> Result<Option<PathBuf>, EnvError> {
    let Some(path) = find_env_file(start) else {
        tracing::debug!(start = %start.display(), "No {} file found", ENV_FILENAME);
        return Ok(None);
    };

    let load_error = |source| EnvError::Load {
        path: path.clone(),
        source,
    };

    let mut loaded = 0usize;
    for item in dotenvy::from_path_iter(&path).map_err(load_error)? {
        let (key, value) = match item {
            Ok(pair) => pair,
            Err(err @ dotenvy::Error::LineParse(..)) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Skipping malformed line"
                );
                continue;
            }
            Err(err) => return Err(load_error(err)),
        };
        if env::var_os(&key).is_none() {
            env::set_var(&key, value);
            loaded += 1;
        }
    }

    tracing::info!(path = %path.display(), loaded, "Loaded environment file");
    Ok(Some(path))
}

/// Loads the nearest `.env` above the current working directory.
pub fn try_load_env() -> Result<Option<PathBuf>, EnvError> {
    let cwd = env::current_dir().map_err(EnvError::CurrentDir)?;
    load_env_from(&cwd)
}

/// Best-effort variant of [`try_load_env`]: failures are logged, never returned.
pub fn load_env() {
    if let Err(err) = try_load_env() {
        tracing::warn!(error = %err, "Skipped loading environment file");
    }
}

/// Reads `key` from the process environment; unset or non-unicode is `None`.
pub fn get_env(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) => Some(value),
        Err(env::VarError::NotPresent) => None,
        Err(env::VarError::NotUnicode(_)) => {
            tracing::warn!(key, "Ignoring non-unicode environment value");
            None
        }
    }
}
