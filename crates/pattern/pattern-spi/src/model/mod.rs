//! Data models for pattern detection.
//!
//! This module contains the series point, pattern and trend line types.

mod data_point;
mod pattern;
mod trend_line;

pub use data_point::{values, DataPoint, MS_PER_DAY};
pub use pattern::{Pattern, PatternKind};
pub use trend_line::TrendLine;
