//! Integration tests for rustful-pattern

use chrono::NaiveDate;
use pattern::prelude::*;
use pattern::{PatternConfigBuilder, StatsError};

const DAY: i64 = 86_400_000;

fn daily(values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::new(i as i64 * DAY, v))
        .collect()
}

fn plateau_series() -> Vec<DataPoint> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    [10.0, 10.5, 10.4, 10.6, 80.0, 79.0, 81.0]
        .iter()
        .enumerate()
        .map(|(i, &v)| DataPoint::from_date(start + chrono::Days::new(i as u64), v))
        .collect()
}

#[test]
fn test_statistics_on_empty_input() {
    assert_eq!(mean(&[]), 0.0);
    assert_eq!(median(&[]), 0.0);
    assert_eq!(standard_deviation(&[42.0]), 0.0);
    assert_eq!(percentile(&[], 50.0).unwrap(), 0.0);
}

#[test]
fn test_percentile_matches_median() {
    let values = [7.0, 1.0, 4.0, 9.0, 3.0, 12.0];
    assert_eq!(percentile(&values, 50.0).unwrap(), median(&values));
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
}

#[test]
fn test_moving_average_window_one_is_identity() {
    let values = [3.0, 1.0, 4.0, 1.0, 5.0];
    assert_eq!(moving_average(&values, 1), values.to_vec());
}

#[test]
fn test_whole_series_low() {
    let series = daily(&[2.0; 6]);
    let patterns = compute_low_value_patterns(&series, &LowValueConfig::default());
    assert_eq!(patterns, vec![Pattern::new(0, 5)]);
}

#[test]
fn test_interior_gap_splits_low_run() {
    let mut series = daily(&[50.0, 0.0, 0.0, 0.0, 0.0, 60.0]);
    for point in &mut series[3..] {
        point.timestamp += 2 * DAY;
    }

    let patterns = compute_low_value_patterns(&series, &LowValueConfig::default());

    assert_eq!(patterns, vec![Pattern::new(1, 2), Pattern::new(3, 4)]);
}

#[test]
fn test_zero_variance_has_no_stagnation() {
    let series = daily(&[5.0; 10]);
    let patterns = compute_stagnation_patterns(&series, &StagnationConfig::default());
    assert!(patterns.is_empty());
}

#[test]
fn test_plateau_scenario() {
    // changes: 0.5, 0.1, 0.2, 69.4, 1, 2 -> average 12.2, significant 6.1
    // one change in six is active, so the gate needs a share of at most 1/6
    let series = plateau_series();

    let open = StagnationConfig::new(3, 0.5, 0.15).unwrap();
    let patterns = compute_stagnation_patterns(&series, &open);
    assert_eq!(patterns, vec![Pattern::new(0, 3), Pattern::new(4, 6)]);

    let strict = StagnationConfig::new(3, 0.5, 0.3).unwrap();
    assert!(compute_stagnation_patterns(&series, &strict).is_empty());
}

#[test]
fn test_trend_line_on_linear_series() {
    let values: Vec<f64> = (0..20).map(|i| 2.0 * i as f64 + 5.0).collect();
    let trend = compute_default_trend_line(&daily(&values)).unwrap();
    assert!((trend.slope - 2.0).abs() < 1e-9);
    assert!((trend.intercept - 5.0).abs() < 1e-9);
}

#[test]
fn test_trend_line_needs_two_points() {
    assert!(compute_default_trend_line(&[]).is_none());
    assert!(compute_default_trend_line(&daily(&[4.0])).is_none());
}

#[test]
fn test_invalid_config_finds_nothing() {
    let series = daily(&[50.0, 0.0, 0.0, 60.0]);
    let bad = LowValueConfig {
        threshold: f64::NAN,
        consecutive_days: 2,
    };
    assert!(compute_low_value_patterns(&series, &bad).is_empty());
    assert!(compute_trend_line(&series, &bad).is_none());

    let bad = StagnationConfig {
        consecutive_days: 0,
        ..StagnationConfig::default()
    };
    assert!(compute_stagnation_patterns(&series, &bad).is_empty());
}

#[test]
fn test_config_builder_feeds_detectors() {
    let config = PatternConfigBuilder::new()
        .low_value_threshold(0.1)
        .low_value_consecutive_days(3)
        .build()
        .unwrap();

    let series = daily(&[100.0, 5.0, 5.0, 100.0, 5.0, 5.0, 5.0]);
    let patterns = compute_low_value_patterns(&series, &config.low_value);
    assert_eq!(patterns, vec![Pattern::new(4, 6)]);
}

#[test]
fn test_detectors_share_trait() {
    let detectors: Vec<Box<dyn PatternDetector>> = vec![
        Box::new(LowValueDetector::default()),
        Box::new(StagnationDetector::default()),
    ];
    let kinds: Vec<PatternKind> = detectors.iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![PatternKind::LowValue, PatternKind::Stagnation]);
}
