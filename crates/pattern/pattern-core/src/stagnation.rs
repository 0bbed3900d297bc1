//! Stagnation run detector

use pattern_api::StagnationConfig;
use pattern_spi::{DataPoint, Pattern, PatternDetector, PatternKind, Result};
use serde::{Deserialize, Serialize};

use crate::calendar::is_calendar_consecutive;

/// Flags runs of calendar-consecutive points whose changes are small
/// relative to the series' typical nonzero change.
///
/// Detection has two phases. A global gate first requires the share of
/// significant changes to reach `active_change_percentage`; a series that
/// is flat everywhere yields no patterns. The scan then closes a run
/// whenever the next change is significant, and keeps runs that are long
/// enough, free of gaps over 1.1 days and free of significant changes.
///
/// A change is significant when `|Δy| > average_change * change_threshold`.
///
/// @algorithm Stagnation
/// @category PatternDetector
/// @complexity O(n)
/// @since 0.3.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StagnationDetector {
    config: StagnationConfig,
}

impl StagnationDetector {
    /// Create a detector from a validated configuration.
    pub fn new(config: StagnationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &StagnationConfig {
        &self.config
    }

    /// Mean of the nonzero absolute changes between neighbours.
    ///
    /// Zero changes are left out so repeated values don't drag the average
    /// toward zero. Returns `0.0` for fewer than two points or when no
    /// change is nonzero.
    pub fn average_change(series: &[DataPoint]) -> f64 {
        let (total, count) = changes(series)
            .filter(|&change| change > 0.0)
            .fold((0.0, 0usize), |(total, count), change| (total + change, count + 1));

        if count > 0 {
            total / count as f64
        } else {
            0.0
        }
    }

    /// Smallest change magnitude that counts as significant.
    pub fn significant_change(&self, average_change: f64) -> f64 {
        average_change * self.config.change_threshold
    }

    /// Whether enough of the series' changes are significant for stagnation
    /// to be meaningful. Always false for fewer than two points.
    pub fn has_enough_active_changes(&self, series: &[DataPoint], average_change: f64) -> bool {
        if series.len() < 2 {
            return false;
        }

        let significant = self.significant_change(average_change);
        let active = changes(series).filter(|&change| change > significant).count();

        active as f64 / (series.len() - 1) as f64 >= self.config.active_change_percentage
    }

    fn is_stagnation_period(
        &self,
        series: &[DataPoint],
        start: usize,
        end: usize,
        significant: f64,
    ) -> bool {
        if end - start + 1 < self.config.consecutive_days {
            return false;
        }
        if !is_calendar_consecutive(series, start, end) {
            return false;
        }
        changes(&series[start..=end]).all(|change| change <= significant)
    }
}

impl Default for StagnationDetector {
    fn default() -> Self {
        Self {
            config: StagnationConfig::default(),
        }
    }
}

impl PatternDetector for StagnationDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Stagnation
    }

    fn find_patterns(&self, series: &[DataPoint]) -> Vec<Pattern> {
        if series.len() < self.config.consecutive_days {
            return Vec::new();
        }

        let average = Self::average_change(series);
        if !self.has_enough_active_changes(series, average) {
            return Vec::new();
        }

        let significant = self.significant_change(average);
        let last = series.len() - 1;
        let mut patterns = Vec::new();
        let mut run_start = 0;

        for index in 0..series.len() {
            let closes = index == last
                || (series[index + 1].value - series[index].value).abs() > significant;

            if closes {
                if self.is_stagnation_period(series, run_start, index, significant) {
                    patterns.push(Pattern::new(run_start, index));
                }
                run_start = index + 1;
            }
        }

        patterns
    }
}

/// Absolute changes between neighbouring points.
fn changes(series: &[DataPoint]) -> impl Iterator<Item = f64> + '_ {
    series.windows(2).map(|w| (w[1].value - w[0].value).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: i64 = 86_400_000;

    fn daily(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| DataPoint::new(i as i64 * DAY, v))
            .collect()
    }

    fn detector(days: usize, change: f64, active: f64) -> StagnationDetector {
        StagnationDetector::new(StagnationConfig::new(days, change, active).unwrap()).unwrap()
    }

    #[test]
    fn test_average_change_skips_zeros() {
        let series = daily(&[1.0, 1.0, 3.0, 3.0, 7.0]);
        // nonzero changes: 2, 4
        assert_eq!(StagnationDetector::average_change(&series), 3.0);
    }

    #[test]
    fn test_average_change_degenerate() {
        assert_eq!(StagnationDetector::average_change(&[]), 0.0);
        assert_eq!(StagnationDetector::average_change(&daily(&[5.0])), 0.0);
        assert_eq!(StagnationDetector::average_change(&daily(&[5.0, 5.0])), 0.0);
    }

    #[test]
    fn test_gate_rejects_flat_series() {
        let series = daily(&[4.0; 8]);
        let detector = detector(3, 0.2, 0.5);
        let average = StagnationDetector::average_change(&series);
        assert!(!detector.has_enough_active_changes(&series, average));
        assert!(detector.find_patterns(&series).is_empty());
    }

    #[test]
    fn test_gate_needs_two_points() {
        let detector = detector(1, 0.2, 0.0);
        assert!(!detector.has_enough_active_changes(&daily(&[1.0]), 0.0));
        assert!(detector.find_patterns(&daily(&[1.0])).is_empty());
    }

    #[test]
    fn test_finds_quiet_stretch() {
        // changes: 10, 10, 0.1, 0.1, 0.1, 10, 10 -> average 40.3 / 7 = 5.757
        // significant = 0.2 * 5.757 = 1.151; 4 of 7 changes active
        let series = daily(&[0.0, 10.0, 0.0, 0.1, 0.0, 0.1, 10.1, 0.1]);
        let patterns = detector(3, 0.2, 0.5).find_patterns(&series);
        assert_eq!(patterns, vec![Pattern::new(2, 5)]);
    }

    #[test]
    fn test_run_shorter_than_consecutive_days() {
        let series = daily(&[0.0, 10.0, 0.0, 0.1, 10.0, 0.0]);
        let patterns = detector(3, 0.2, 0.5).find_patterns(&series);
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_gap_rejects_run() {
        let mut series = daily(&[0.0, 10.0, 0.0, 0.1, 0.0, 0.1, 10.1, 0.1]);
        for point in &mut series[4..] {
            point.timestamp += 3 * DAY;
        }
        let patterns = detector(3, 0.2, 0.5).find_patterns(&series);
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_default_config() {
        let detector = StagnationDetector::default();
        assert_eq!(detector.config(), &StagnationConfig::default());
        assert_eq!(detector.kind(), PatternKind::Stagnation);
    }
}
