//! Integration tests for rustful-statistics

use statistics::prelude::*;

fn daily_values() -> Vec<f64> {
    vec![12.0, 15.5, 11.0, 18.25, 14.0, 16.5, 13.0, 17.0, 12.5, 19.0]
}

#[test]
fn test_empty_inputs_degrade_to_zero() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(median(&[]), 0.0);
    assert_eq!(standard_deviation(&[]), 0.0);
    assert_eq!(percentile(&[], 75.0).unwrap(), 0.0);
    assert!(moving_average(&[], 3).is_empty());
}

#[test]
fn test_single_value() {
    assert_eq!(mean(&[9.0]), 9.0);
    assert_eq!(median(&[9.0]), 9.0);
    assert_eq!(standard_deviation(&[9.0]), 0.0);
    assert_eq!(percentile(&[9.0], 33.0).unwrap(), 9.0);
}

#[test]
fn test_percentile_matches_median() {
    let values = daily_values();
    assert_eq!(percentile(&values, 50.0).unwrap(), median(&values));
}

#[test]
fn test_percentile_rejects_out_of_range() {
    let values = daily_values();
    let err = percentile(&values, 150.0).unwrap_err();
    assert!(matches!(err, StatsError::InvalidArgument { .. }));
    assert!(err.to_string().contains("percentile"));

    assert!(matches!(
        percentile(&values, -1.0),
        Err(StatsError::InvalidArgument { .. })
    ));
}

#[test]
fn test_quartiles_are_ordered() {
    let values = daily_values();
    let q1 = percentile(&values, 25.0).unwrap();
    let q2 = percentile(&values, 50.0).unwrap();
    let q3 = percentile(&values, 75.0).unwrap();
    assert!(q1 <= q2 && q2 <= q3);
}

#[test]
fn test_moving_average_length() {
    let values = daily_values();
    let smoothed = moving_average(&values, 5);
    assert_eq!(smoothed.len(), values.len() - 5 + 1);
    assert!((smoothed[0] - mean(&values[..5])).abs() < 1e-12);
}

#[test]
fn test_linear_fit_on_noisy_trend() {
    let values: Vec<f64> = (0..50)
        .map(|i| 5.0 + 0.5 * i as f64 + if i % 2 == 0 { 0.1 } else { -0.1 })
        .collect();
    let (slope, intercept) = linear_fit(&values).unwrap();
    assert!((slope - 0.5).abs() < 0.01);
    assert!((intercept - 5.0).abs() < 0.2);
}
