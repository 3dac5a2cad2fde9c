// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VulnsightError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, VulnsightError>;

// Allow `?` on std::io::Error by converting to VulnsightError::Io with unknown path.
impl From<std::io::Error> for VulnsightError {
    fn from(source: std::io::Error) -> Self {
        VulnsightError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl VulnsightError {
    /// An I/O error tagged with the path it happened on.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        VulnsightError::Io {
            source,
            path: path.into(),
        }
    }
}
