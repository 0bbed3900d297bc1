//! Pattern detector trait definition.

use crate::model::{DataPoint, Pattern, PatternKind};

/// A scanner that flags contiguous index ranges of a series.
///
/// Implementations are pure: every call recomputes from scratch and the
/// series is never mutated.
///
/// # Preconditions
///
/// The series must be sorted ascending by timestamp. Detectors do not sort;
/// an unsorted series yields unspecified (but panic-free) boundaries.
pub trait PatternDetector: Send + Sync {
    /// The category this detector reports, used to pick a highlight color.
    fn kind(&self) -> PatternKind;

    /// Scan the series and return non-overlapping patterns ordered by start.
    fn find_patterns(&self, series: &[DataPoint]) -> Vec<Pattern>;
}
