//! Statistics error types.

use thiserror::Error;

/// Errors raised by statistics functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// An argument lies outside its documented domain
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },
}

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;
