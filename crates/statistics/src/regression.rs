//! Ordinary least squares over sequence positions.

use crate::descriptive::mean;

/// Fit `value = intercept + slope * position` by ordinary least squares,
/// where `position` is the 0-based index in `values`.
///
/// Returns `(slope, intercept)`, or `None` when fewer than two values are
/// given. The slope is per position, not per unit of time.
pub fn linear_fit(values: &[f64]) -> Option<(f64, f64)> {
    if values.len() < 2 {
        return None;
    }

    let x_mean = (values.len() - 1) as f64 / 2.0;
    let y_mean = mean(values);

    let (ss_xy, ss_xx) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(ss_xy, ss_xx), (i, &y)| {
            let dx = i as f64 - x_mean;
            (ss_xy + dx * (y - y_mean), ss_xx + dx * dx)
        });

    let slope = ss_xy / ss_xx;
    let intercept = y_mean - slope * x_mean;
    Some((slope, intercept))
}
