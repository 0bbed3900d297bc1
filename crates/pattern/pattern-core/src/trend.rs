//! Trend line fitting that skips low-value runs.

use pattern_spi::{DataPoint, PatternDetector, TrendLine};
use statistics::linear_fit;

use crate::low_value::LowValueDetector;

/// Fit a least-squares trend over the series with every low-value run
/// removed.
///
/// The fit is over position in the filtered series, not over timestamps, so
/// the slope is a change per kept point. Returns `None` when fewer than two
/// points remain.
pub fn fit_trend_line(series: &[DataPoint], low_values: &LowValueDetector) -> Option<TrendLine> {
    let patterns = low_values.find_patterns(series);

    let mut excluded = vec![false; series.len()];
    for index in patterns.iter().flat_map(|p| p.indices()) {
        excluded[index] = true;
    }

    let kept: Vec<f64> = series
        .iter()
        .zip(&excluded)
        .filter(|(_, &skip)| !skip)
        .map(|(point, _)| point.value)
        .collect();

    linear_fit(&kept).map(|(slope, intercept)| TrendLine::new(slope, intercept))
}
