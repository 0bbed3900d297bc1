//! # rustful-statistics
//!
//! Descriptive statistics used by the pattern detectors and the chart host.
//!
//! Every function is pure and never mutates its input. Functions that would
//! be undefined on an empty slice return `0.0` instead of failing, so a chart
//! with momentarily empty data never errors. Only [`percentile`] can fail,
//! and only on an out-of-range percentile.
//!
//! ## Example
//!
//! ```rust
//! use statistics::{mean, median, percentile};
//!
//! let values = [3.0, 1.0, 4.0, 1.0, 5.0];
//! assert_eq!(mean(&values), 2.8);
//! assert_eq!(median(&values), 3.0);
//! assert_eq!(percentile(&values, 50.0).unwrap(), 3.0);
//! ```

mod descriptive;
mod error;
mod regression;

pub use descriptive::{mean, median, moving_average, percentile, standard_deviation};
pub use error::{Result, StatsError};
pub use regression::linear_fit;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{linear_fit, mean, median, moving_average, percentile, standard_deviation};
    pub use crate::{Result, StatsError};
}
