use std::path::PathBuf;

use crate::item::Category;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
    #[error("no templates registered for category {0}")]
    NoTemplates(Category),
    #[error("pattern {pattern:?} has {placeholders} placeholders but {values} values were supplied")]
    PlaceholderMismatch {
        pattern: String,
        placeholders: usize,
        values: usize,
    },
    #[error("item {name:?} is malformed: {reason}")]
    InvalidItem { name: String, reason: &'static str },
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
