use std::path::PathBuf;
use thiserror::Error;

/// Errors raised at the edges of the core: config loading and catalog files.
///
/// The text → drill transforms themselves never fail; every missing field
/// resolves to a documented default instead.
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl DrillError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DrillError::Io { path: path.into(), source }
    }

    /// Whether the batch can carry on after this error (skip the unit of work).
    pub fn is_recoverable(&self) -> bool {
        match self {
            DrillError::Io { .. } => true,
            DrillError::Json(_) => true,
            DrillError::Yaml(_) => false,
            DrillError::InvalidConfig(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
