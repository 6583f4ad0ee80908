use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("missing environment variable: {0}")]
    Missing(&'static str),
}
