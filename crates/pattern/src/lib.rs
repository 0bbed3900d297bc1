//! # rustful-pattern
//!
//! Pattern detection for date/value series.
//!
//! Provides the low-value and stagnation detectors, a trend line that skips
//! low-value runs, and the descriptive statistics the chart host draws.
//!
//! ```
//! use pattern::{compute_low_value_patterns, DataPoint, LowValueConfig, Pattern};
//!
//! const DAY: i64 = 86_400_000;
//! let series: Vec<DataPoint> = [40.0, 0.0, 0.0, 0.0, 35.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &v)| DataPoint::new(i as i64 * DAY, v))
//!     .collect();
//!
//! let patterns = compute_low_value_patterns(&series, &LowValueConfig::default());
//! assert_eq!(patterns, vec![Pattern::new(1, 3)]);
//! ```

pub use pattern_facade::*;

pub use statistics::{mean, median, moving_average, percentile, standard_deviation, StatsError};

/// Low-value runs in `series`.
///
/// An invalid configuration finds nothing.
pub fn compute_low_value_patterns(series: &[DataPoint], config: &LowValueConfig) -> Vec<Pattern> {
    LowValueDetector::new(*config)
        .map(|detector| detector.find_patterns(series))
        .unwrap_or_default()
}

/// Stagnation runs in `series`.
///
/// An invalid configuration finds nothing.
pub fn compute_stagnation_patterns(
    series: &[DataPoint],
    config: &StagnationConfig,
) -> Vec<Pattern> {
    StagnationDetector::new(*config)
        .map(|detector| detector.find_patterns(series))
        .unwrap_or_default()
}

/// Least-squares trend over `series` with the low-value runs found under
/// `config` left out.
///
/// Returns `None` when fewer than two points remain or `config` is invalid.
pub fn compute_trend_line(series: &[DataPoint], config: &LowValueConfig) -> Option<TrendLine> {
    let detector = LowValueDetector::new(*config).ok()?;
    fit_trend_line(series, &detector)
}

/// [`compute_trend_line`] with the default low-value configuration.
pub fn compute_default_trend_line(series: &[DataPoint]) -> Option<TrendLine> {
    fit_trend_line(series, &LowValueDetector::default())
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compute_default_trend_line, compute_low_value_patterns, compute_stagnation_patterns,
        compute_trend_line,
    };
    pub use crate::{mean, median, moving_average, percentile, standard_deviation};
    pub use crate::{DataPoint, Pattern, PatternDetector, PatternKind, TrendLine};
    pub use crate::{LowValueConfig, PatternConfig, StagnationConfig};
    pub use crate::{LowValueDetector, StagnationDetector};
}
