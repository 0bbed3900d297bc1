//! Mean, median, spread and percentile functions.

use crate::error::{Result, StatsError};

/// Arithmetic mean. Returns `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of the values. Returns `0.0` for an empty slice.
///
/// For an even count the two middle values are averaged.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let sorted = sorted_copy(values);
    let middle = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        (sorted[middle - 1] + sorted[middle]) / 2.0
    } else {
        sorted[middle]
    }
}

/// Population standard deviation (divides by `n`).
///
/// Returns `0.0` when fewer than two values are given.
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Percentile by linear interpolation between closest ranks (R-7 / Excel
/// `PERCENTILE.INC`).
///
/// The rank position is `p / 100 * (n - 1)`; the result interpolates between
/// the sorted values at the floor and ceiling of that position.
///
/// # Errors
///
/// [`StatsError::InvalidArgument`] when `p` is outside `[0, 100]` or NaN.
/// An empty slice returns `Ok(0.0)` before `p` is inspected.
pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    if values.is_empty() {
        return Ok(0.0);
    }
    if !(0.0..=100.0).contains(&p) {
        return Err(StatsError::InvalidArgument {
            name: "percentile".to_string(),
            reason: format!("must be between 0 and 100, got {}", p),
        });
    }

    let sorted = sorted_copy(values);
    let position = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    if lower == upper {
        return Ok(sorted[lower]);
    }

    let fraction = position - lower as f64;
    Ok(sorted[lower] * (1.0 - fraction) + sorted[upper] * fraction)
}

/// Simple moving average over a sliding window.
///
/// Produces `n - window + 1` values. When `window` is zero or larger than
/// the input, the input is returned unchanged, so callers must not assume
/// the output length is `n - window + 1`.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window < 1 || window > values.len() {
        return values.to_vec();
    }

    values.windows(window).map(mean).collect()
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[-2.0, 2.0]), 0.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_median_odd() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let values = vec![3.0, 1.0, 2.0];
        let _ = median(&values);
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn test_standard_deviation_population() {
        // Classic example: mean 5, population std dev 2
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((standard_deviation(&values) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_standard_deviation_small_inputs() {
        assert_eq!(standard_deviation(&[]), 0.0);
        assert_eq!(standard_deviation(&[42.0]), 0.0);
    }

    #[test]
    fn test_standard_deviation_constant() {
        assert_eq!(standard_deviation(&[7.0, 7.0, 7.0]), 0.0);
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [1.0, 2.0, 3.0, 4.0];
        // position = 0.25 * 3 = 0.75
        assert!((percentile(&values, 25.0).unwrap() - 1.75).abs() < 1e-12);
        // position = 0.9 * 3 = 2.7
        assert!((percentile(&values, 90.0).unwrap() - 3.7).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_bounds() {
        let values = [10.0, 30.0, 20.0];
        assert_eq!(percentile(&values, 0.0).unwrap(), 10.0);
        assert_eq!(percentile(&values, 100.0).unwrap(), 30.0);
    }

    #[test]
    fn test_percentile_out_of_range() {
        let values = [1.0, 2.0, 3.0];
        assert!(matches!(
            percentile(&values, 150.0),
            Err(StatsError::InvalidArgument { .. })
        ));
        assert!(matches!(
            percentile(&values, -1.0),
            Err(StatsError::InvalidArgument { .. })
        ));
        assert!(percentile(&values, f64::NAN).is_err());
    }

    #[test]
    fn test_percentile_empty_returns_zero() {
        assert_eq!(percentile(&[], 50.0).unwrap(), 0.0);
        assert_eq!(percentile(&[], 150.0).unwrap(), 0.0);
    }

    #[test]
    fn test_moving_average() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(moving_average(&values, 3), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_moving_average_full_window() {
        let values = [2.0, 4.0, 6.0];
        assert_eq!(moving_average(&values, 3), vec![4.0]);
    }

    #[test]
    fn test_moving_average_degenerate_window() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(moving_average(&values, 0), values.to_vec());
        assert_eq!(moving_average(&values, 4), values.to_vec());
    }

    #[test]
    fn test_moving_average_identity_window() {
        let values = [1.5, -2.0, 8.25];
        assert_eq!(moving_average(&values, 1), values.to_vec());
    }
}
