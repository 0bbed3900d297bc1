//! Pattern Detection Service Provider Interface
//!
//! Defines the series model, the pattern result types and the
//! [`PatternDetector`] contract that every detector implements.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::PatternDetector;
pub use error::{PatternError, Result};
pub use model::{values, DataPoint, Pattern, PatternKind, TrendLine, MS_PER_DAY};
