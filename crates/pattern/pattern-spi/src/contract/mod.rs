//! Contract definitions for pattern detection.
//!
//! This module contains trait definitions that detectors must implement.

mod pattern_detector;

pub use pattern_detector::PatternDetector;
