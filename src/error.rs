use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepocastError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("No entry named '{path}' in source")]
    EntryMissing { path: String },
    #[error("Name collision at '{path}': a file and a folder share this segment")]
    Collision { path: String },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
impl RepocastError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepocastError::Io {
            path: path.into(),
            source,
        }
    }
}
