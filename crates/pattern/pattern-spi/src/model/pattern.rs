//! Pattern result types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which detector flagged a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// A run of points at or below the range-relative floor
    LowValue,
    /// A run of insignificant changes in an otherwise active series
    Stagnation,
}

impl PatternKind {
    /// Stable identifier, used as the renderer category.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::LowValue => "lowValue",
            PatternKind::Stagnation => "stagnation",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inclusive index range `[start, end]` into the scanned series.
///
/// Invariant: `start <= end < series.len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    pub start: usize,
    pub end: usize,
}

impl Pattern {
    /// Create a pattern. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "pattern start {} after end {}", start, end);
        Self { start, end }
    }

    /// Number of points covered.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A pattern always covers at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }

    /// Iterate over the covered indices.
    pub fn indices(&self) -> std::ops::RangeInclusive<usize> {
        self.start..=self.end
    }
}
