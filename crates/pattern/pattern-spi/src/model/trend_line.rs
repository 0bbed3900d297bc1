//! Trend line type.

use serde::{Deserialize, Serialize};

/// A least-squares line `value = intercept + slope * position`.
///
/// `position` is the index within the series the line was fitted on, so the
/// slope is a change per point, not per unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the line at a position.
    pub fn value_at(&self, position: f64) -> f64 {
        self.intercept + self.slope * position
    }
}
