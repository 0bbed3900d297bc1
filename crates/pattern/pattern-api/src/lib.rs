//! Pattern Detection API
//!
//! Configuration types and builders for pattern detection.

mod config;

pub use config::{LowValueConfig, PatternConfig, PatternConfigBuilder, StagnationConfig};

// Re-export SPI types
pub use pattern_spi::{DataPoint, Pattern, PatternError, PatternKind, Result, TrendLine};
