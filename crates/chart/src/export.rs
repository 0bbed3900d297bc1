//! CSV export of a series.

use chrono::{DateTime, SecondsFormat};
use pattern::{DataPoint, PatternError};

use crate::error::{ChartError, Result};

/// Format an epoch-millisecond timestamp as RFC 3339 UTC with milliseconds,
/// e.g. `2024-01-31T00:00:00.000Z`.
pub fn format_date(timestamp: i64) -> Result<String> {
    let datetime = DateTime::from_timestamp_millis(timestamp)
        .ok_or_else(|| PatternError::InvalidTimestamp(timestamp.to_string()))?;
    Ok(datetime.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Write `points` as CSV with a `Date,Value` header.
pub fn to_csv(points: &[DataPoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Date", "Value"])
        .map_err(|e| ChartError::Export(e.to_string()))?;

    for point in points {
        writer
            .write_record([format_date(point.timestamp)?, point.value.to_string()])
            .map_err(|e| ChartError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChartError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ChartError::Export(e.to_string()))
}
