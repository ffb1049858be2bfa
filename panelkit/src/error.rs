//! Atlas and resource error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("descriptor line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("resource not found on search path: {0}")]
    NotFound(String),

    #[error("selection is empty")]
    EmptyResult,

    #[error("expected a single image, found {0}")]
    Ambiguous(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl AtlasError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}
