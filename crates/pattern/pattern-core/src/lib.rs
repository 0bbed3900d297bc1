//! Pattern detection algorithms
//!
//! This crate provides the detectors that flag index ranges of a series:
//!
//! - [`LowValueDetector`]: runs of points at or below a range-relative floor
//! - [`StagnationDetector`]: runs of insignificant changes in an otherwise
//!   active series
//!
//! plus [`fit_trend_line`], a least-squares trend that skips low-value runs.

pub mod calendar;
mod low_value;
mod stagnation;
mod trend;

// Re-export traits and models from SPI
pub use pattern_spi::{DataPoint, Pattern, PatternDetector, PatternError, PatternKind, Result, TrendLine};

// Re-export configuration from API
pub use pattern_api::{LowValueConfig, PatternConfig, StagnationConfig};

// Re-export implementations
pub use calendar::CONSECUTIVE_DAY_TOLERANCE;
pub use low_value::LowValueDetector;
pub use stagnation::StagnationDetector;
pub use trend::fit_trend_line;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::PatternDetector;
    pub use crate::{fit_trend_line, LowValueDetector, StagnationDetector};
    pub use crate::{DataPoint, Pattern, PatternKind, TrendLine};
    pub use crate::{LowValueConfig, PatternConfig, StagnationConfig};
    pub use crate::{PatternError, Result};
}
