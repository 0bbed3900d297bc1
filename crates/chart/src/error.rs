//! Chart error types.

use pattern::PatternError;
use thiserror::Error;

/// Chart host errors.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Invalid chart option: {name} - {reason}")]
    InvalidOptions { name: String, reason: String },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("Export failed: {0}")]
    Export(String),
}

impl ChartError {
    pub(crate) fn invalid_options(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for chart operations.
pub type Result<T> = std::result::Result<T, ChartError>;
