//! Calendar consecutiveness checks.

use pattern_spi::{DataPoint, MS_PER_DAY};

/// Largest gap, in days, between two points that still counts as
/// consecutive.
pub const CONSECUTIVE_DAY_TOLERANCE: f64 = 1.1;

/// Days elapsed between two epoch-millisecond timestamps.
///
/// Defined for the full `i64` range.
pub fn days_between(earlier: i64, later: i64) -> f64 {
    (later as i128 - earlier as i128) as f64 / MS_PER_DAY
}

/// Whether `later` follows `earlier` within `tolerance` days.
pub fn is_consecutive_days(earlier: i64, later: i64, tolerance: f64) -> bool {
    days_between(earlier, later) <= tolerance
}

/// Whether every adjacent pair in `series[start..=end]` is at most
/// [`CONSECUTIVE_DAY_TOLERANCE`] days apart.
pub fn is_calendar_consecutive(series: &[DataPoint], start: usize, end: usize) -> bool {
    series[start..=end]
        .windows(2)
        .all(|w| is_consecutive_days(w[0].timestamp, w[1].timestamp, CONSECUTIVE_DAY_TOLERANCE))
}

/// Earliest and latest timestamps of the series.
pub fn date_range(series: &[DataPoint]) -> Option<(i64, i64)> {
    let min = series.iter().map(|p| p.timestamp).min()?;
    let max = series.iter().map(|p| p.timestamp).max()?;
    Some((min, max))
}
