//! End-to-end tests for rustful-pattern crate
//!
//! Tests complete detection workflows using only this crate's API.

use pattern::prelude::*;
use pattern::calendar::{date_range, is_calendar_consecutive};

const DAY: i64 = 86_400_000;

/// Ninety days of activity with an outage (days 20..=24) and a flat week
/// (days 50..=56).
fn activity_series() -> Vec<DataPoint> {
    (0..90)
        .map(|day| {
            let value = match day {
                20..=24 => 0.0,
                50..=56 => 60.0,
                _ if day % 2 == 0 => 40.0 + (day % 7) as f64 * 4.0,
                _ => 80.0 - (day % 5) as f64 * 4.0,
            };
            DataPoint::new(day * DAY, value)
        })
        .collect()
}

#[test]
fn e2e_detection_workflow() {
    let series = activity_series();
    let config = PatternConfig::default();

    let low = compute_low_value_patterns(&series, &config.low_value);
    assert_eq!(low, vec![Pattern::new(20, 24)]);

    let stagnation_config = StagnationConfig::new(5, 0.2, 0.5).unwrap();
    let stagnant = compute_stagnation_patterns(&series, &stagnation_config);

    // the outage, and the flat week plus the two days that step into it
    assert_eq!(stagnant, vec![Pattern::new(20, 24), Pattern::new(48, 56)]);
    for pattern in &stagnant {
        assert!(pattern.end < series.len());
        assert!(is_calendar_consecutive(&series, pattern.start, pattern.end));
    }
}

#[test]
fn e2e_patterns_are_ordered_and_disjoint() {
    let series = activity_series();
    let stagnation_config = StagnationConfig::new(2, 0.5, 0.3).unwrap();

    for patterns in [
        compute_low_value_patterns(&series, &LowValueConfig::new(0.3, 1).unwrap()),
        compute_stagnation_patterns(&series, &stagnation_config),
    ] {
        for pair in patterns.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
    }
}

#[test]
fn e2e_trend_ignores_outage() {
    // A steady climb of 1 per day broken by a five day outage
    let series: Vec<DataPoint> = (0..40)
        .map(|day| {
            let value = if (10..15).contains(&day) {
                0.0
            } else {
                100.0 + day as f64
            };
            DataPoint::new(day * DAY, value)
        })
        .collect();

    let trend = compute_default_trend_line(&series).unwrap();

    // Positions close up over the outage so the climb looks steeper per kept
    // point but never negative.
    assert!(trend.slope > 1.0);
    assert!(trend.intercept > 90.0);

    // a run length of 10 keeps the outage in and drags the line down
    let naive = compute_trend_line(&series, &LowValueConfig::new(0.0, 10).unwrap()).unwrap();
    assert!(naive.intercept < trend.intercept);
}

#[test]
fn e2e_statistics_summary() {
    let series = activity_series();
    let values: Vec<f64> = series.iter().map(|p| p.value).collect();

    let mean_value = mean(&values);
    let median_value = median(&values);
    let p25 = percentile(&values, 25.0).unwrap();
    let p75 = percentile(&values, 75.0).unwrap();
    let smoothed = moving_average(&values, 5);

    assert!(p25 <= median_value && median_value <= p75);
    assert!(standard_deviation(&values) > 0.0);
    assert_eq!(smoothed.len(), values.len() - 4);
    assert!(mean_value > 0.0);

    let (first, last) = date_range(&series).unwrap();
    assert_eq!(last - first, 89 * DAY);
}
