use std::path::PathBuf;

use crate::map::style::StyleError;

pub type MapResult<T> = Result<T, MapError>;

/// Fatal failures while loading inputs or writing a composed map
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}
