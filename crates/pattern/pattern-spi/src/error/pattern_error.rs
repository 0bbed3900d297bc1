//! Pattern detection error types.

use thiserror::Error;

/// Pattern detection errors.
///
/// Detection itself never fails; these errors come from validating
/// configuration before a detector is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl PatternError {
    /// Shorthand for [`PatternError::InvalidParameter`].
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for pattern detection operations.
pub type Result<T> = std::result::Result<T, PatternError>;
