//! Pattern Detection Facade
//!
//! Unified re-exports for the pattern detection module.
//!
//! This facade provides a single entry point to all pattern detection functionality:
//! - `PatternDetector` trait and the series/pattern models from SPI
//! - Configuration types from API
//! - Detector implementations (`LowValueDetector`, `StagnationDetector`) and
//!   trend fitting from Core

// Re-export everything from SPI
pub use pattern_spi::*;

// Re-export everything from API
pub use pattern_api::*;

// Re-export everything from Core
pub use pattern_core::*;
