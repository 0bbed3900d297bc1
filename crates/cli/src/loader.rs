//! Series loading from CSV and JSON files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use pattern::DataPoint;
use serde::Deserialize;

/// Error type for data loading operations.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Failed to parse CSV: {0}")]
    Csv(String),

    #[error("Failed to parse JSON: {0}")]
    Json(String),

    #[error("Column '{0}' not found")]
    MissingColumn(String),

    #[error("Row {row}: cannot read {field} '{text}'")]
    BadField {
        row: usize,
        field: &'static str,
        text: String,
    },

    #[error("No data points found")]
    Empty,
}

const DATE_HEADERS: [&str; 4] = ["date", "timestamp", "time", "x"];
const VALUE_HEADERS: [&str; 2] = ["value", "y"];

/// Load a series, picking the format from the file extension.
///
/// Files without a `.csv` or `.json` extension are tried as CSV, then JSON.
/// The result is sorted by timestamp.
pub fn load_series(path: &Path, column: Option<&str>) -> Result<Vec<DataPoint>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mut points = match ext.as_str() {
        "csv" => read_csv(open(path)?, column)?,
        "json" => read_json(open(path)?)?,
        _ => read_csv(open(path)?, column).or_else(|_| read_json(open(path)?))?,
    };

    if points.is_empty() {
        return Err(LoadError::Empty);
    }
    points.sort_by_key(|p| p.timestamp);
    Ok(points)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    File::open(path).map(BufReader::new).map_err(|e| LoadError::Open {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Read a CSV series with a header row.
///
/// The date column is the first header named `date`, `timestamp`, `time`
/// or `x`, else column 0. The value column is `column` (a header name or a
/// 0-based index), else the first header named `value` or `y`, else the
/// first column after the date column.
pub fn read_csv<R: Read>(reader: R, column: Option<&str>) -> Result<Vec<DataPoint>, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv(e.to_string()))?
        .clone();

    let find = |names: &[&str]| {
        headers
            .iter()
            .position(|h| names.iter().any(|name| h.trim().eq_ignore_ascii_case(name)))
    };

    let date_idx = find(&DATE_HEADERS).unwrap_or(0);
    let value_idx = match column {
        Some(col) => headers
            .iter()
            .position(|h| h == col)
            .or_else(|| col.parse::<usize>().ok().filter(|&i| i < headers.len()))
            .ok_or_else(|| LoadError::MissingColumn(col.to_string()))?,
        None => find(&VALUE_HEADERS)
            .or_else(|| (0..headers.len()).find(|&i| i != date_idx))
            .ok_or_else(|| LoadError::MissingColumn("value".to_string()))?,
    };

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| LoadError::Csv(e.to_string()))?;
        let row = row + 1;

        let date = record.get(date_idx).unwrap_or("").trim();
        let value = record.get(value_idx).unwrap_or("").trim();
        if date.is_empty() && value.is_empty() {
            continue;
        }

        let timestamp = parse_timestamp(date).ok_or_else(|| bad_field(row, "date", date))?;
        let value = value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| bad_field(row, "value", value))?;
        points.push(DataPoint::new(timestamp, value));
    }

    Ok(points)
}

#[derive(Deserialize)]
struct JsonPoint {
    #[serde(alias = "x", alias = "date")]
    timestamp: JsonTime,
    #[serde(alias = "y")]
    value: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTime {
    Millis(i64),
    Text(String),
}

/// Read a JSON array of `{timestamp|x|date, value|y}` objects.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<DataPoint>, LoadError> {
    let raw: Vec<JsonPoint> =
        serde_json::from_reader(reader).map_err(|e| LoadError::Json(e.to_string()))?;

    raw.into_iter()
        .enumerate()
        .map(|(index, point)| {
            let timestamp = match point.timestamp {
                JsonTime::Millis(ms) => ms,
                JsonTime::Text(text) => {
                    parse_timestamp(&text).ok_or_else(|| bad_field(index + 1, "date", &text))?
                }
            };
            if !point.value.is_finite() {
                return Err(bad_field(index + 1, "value", &point.value.to_string()));
            }
            Ok(DataPoint::new(timestamp, point.value))
        })
        .collect()
}

/// Parse epoch milliseconds, an RFC 3339 instant or a `YYYY-MM-DD` date
/// (midnight UTC).
pub fn parse_timestamp(text: &str) -> Option<i64> {
    if let Ok(ms) = text.parse::<i64>() {
        return Some(ms);
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.timestamp_millis());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .map(|date| DataPoint::from_date(date, 0.0).timestamp)
}

fn bad_field(row: usize, field: &'static str, text: &str) -> LoadError {
    LoadError::BadField {
        row,
        field,
        text: text.to_string(),
    }
}
