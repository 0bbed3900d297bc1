//! Low-value run detector

use pattern_api::LowValueConfig;
use pattern_spi::{DataPoint, Pattern, PatternDetector, PatternKind, Result};
use serde::{Deserialize, Serialize};

use crate::calendar::is_calendar_consecutive;

/// Flags runs of calendar-consecutive points whose value sits at or below
/// `min + (max - min) * threshold`.
///
/// A run breaks at the first point above the cutoff and at any gap of more
/// than 1.1 days between neighbours, so a low stretch interrupted by a
/// missing day yields two runs and neither spans the gap. A run becomes a
/// pattern when it holds at least `consecutive_days` points.
///
/// @algorithm LowValue
/// @category PatternDetector
/// @complexity O(n)
/// @since 0.3.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LowValueDetector {
    config: LowValueConfig,
}

impl LowValueDetector {
    /// Create a detector from a validated configuration.
    pub fn new(config: LowValueConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &LowValueConfig {
        &self.config
    }

    /// The value cutoff for `series`, or `None` for an empty series.
    pub fn low_threshold(&self, series: &[DataPoint]) -> Option<f64> {
        let (min, max) = value_bounds(series)?;
        Some(min + (max - min) * self.config.threshold)
    }

    fn close_run(&self, start: usize, end: usize, patterns: &mut Vec<Pattern>) {
        if end - start + 1 >= self.config.consecutive_days {
            patterns.push(Pattern::new(start, end));
        }
    }
}

impl Default for LowValueDetector {
    fn default() -> Self {
        Self {
            config: LowValueConfig::default(),
        }
    }
}

impl PatternDetector for LowValueDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::LowValue
    }

    fn find_patterns(&self, series: &[DataPoint]) -> Vec<Pattern> {
        if series.len() < self.config.consecutive_days {
            return Vec::new();
        }
        let Some(cutoff) = self.low_threshold(series) else {
            return Vec::new();
        };

        let mut patterns = Vec::new();
        let mut run_start: Option<usize> = None;

        for (index, point) in series.iter().enumerate() {
            if point.value > cutoff {
                if let Some(start) = run_start.take() {
                    self.close_run(start, index - 1, &mut patterns);
                }
                continue;
            }

            match run_start {
                Some(start) if !is_calendar_consecutive(series, index - 1, index) => {
                    self.close_run(start, index - 1, &mut patterns);
                    run_start = Some(index);
                }
                Some(_) => {}
                None => run_start = Some(index),
            }
        }

        // Trailing run reaching the end of the series
        if let Some(start) = run_start {
            self.close_run(start, series.len() - 1, &mut patterns);
        }

        patterns
    }
}

fn value_bounds(series: &[DataPoint]) -> Option<(f64, f64)> {
    if series.is_empty() {
        return None;
    }
    let min = series.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
    let max = series.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}
