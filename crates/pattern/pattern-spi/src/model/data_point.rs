//! Series point type.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Milliseconds in one day.
pub const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// A single `(timestamp, value)` observation.
///
/// The timestamp is a linear epoch value in milliseconds so that gaps can be
/// measured with plain subtraction. JSON input may use `x`/`y` for the two
/// fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Unix epoch milliseconds
    #[serde(alias = "x")]
    pub timestamp: i64,
    /// Observed value
    #[serde(alias = "y")]
    pub value: f64,
}

impl DataPoint {
    /// Create a point from epoch milliseconds.
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Create a point from a UTC date-time.
    pub fn from_datetime(at: DateTime<Utc>, value: f64) -> Self {
        Self::new(at.timestamp_millis(), value)
    }

    /// Create a point at midnight UTC of the given calendar date.
    pub fn from_date(date: NaiveDate, value: f64) -> Self {
        Self::from_datetime(date.and_time(NaiveTime::MIN).and_utc(), value)
    }

    /// The timestamp as a UTC date-time, if it is representable.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Extract the values of a series, in order.
pub fn values(series: &[DataPoint]) -> Vec<f64> {
    series.iter().map(|p| p.value).collect()
}
