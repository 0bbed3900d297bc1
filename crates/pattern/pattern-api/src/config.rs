//! Detector configuration types.

use pattern_spi::{PatternError, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Low Value
// ============================================================================

/// Low-value detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LowValueConfig {
    /// Fraction of the value range (max - min) added to the minimum to form
    /// the low-value cutoff, within `[0, 1]` (default: 0.02).
    pub threshold: f64,
    /// Minimum run length in points (default: 2).
    pub consecutive_days: usize,
}

impl Default for LowValueConfig {
    fn default() -> Self {
        Self {
            threshold: 0.02,
            consecutive_days: 2,
        }
    }
}

impl LowValueConfig {
    /// Create a validated configuration.
    pub fn new(threshold: f64, consecutive_days: usize) -> Result<Self> {
        let config = Self {
            threshold,
            consecutive_days,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(PatternError::invalid_parameter(
                "threshold",
                format!("must be within [0, 1], got {}", self.threshold),
            ));
        }
        validate_consecutive_days(self.consecutive_days)
    }
}

// ============================================================================
// Stagnation
// ============================================================================

/// Stagnation detector configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagnationConfig {
    /// Minimum run length in points (default: 3).
    pub consecutive_days: usize,
    /// Multiple of the average nonzero change above which a change counts
    /// as significant (default: 0.2).
    pub change_threshold: f64,
    /// Minimum share of significant changes, within `[0, 1]`, for the series
    /// to count as active (default: 0.85).
    pub active_change_percentage: f64,
}

impl Default for StagnationConfig {
    fn default() -> Self {
        Self {
            consecutive_days: 3,
            change_threshold: 0.2,
            active_change_percentage: 0.85,
        }
    }
}

impl StagnationConfig {
    /// Create a validated configuration.
    pub fn new(
        consecutive_days: usize,
        change_threshold: f64,
        active_change_percentage: f64,
    ) -> Result<Self> {
        let config = Self {
            consecutive_days,
            change_threshold,
            active_change_percentage,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its documented domain.
    pub fn validate(&self) -> Result<()> {
        validate_consecutive_days(self.consecutive_days)?;

        if !self.change_threshold.is_finite() || self.change_threshold < 0.0 {
            return Err(PatternError::invalid_parameter(
                "change_threshold",
                format!("must be a finite number >= 0, got {}", self.change_threshold),
            ));
        }
        if !(0.0..=1.0).contains(&self.active_change_percentage) {
            return Err(PatternError::invalid_parameter(
                "active_change_percentage",
                format!(
                    "must be within [0, 1], got {}",
                    self.active_change_percentage
                ),
            ));
        }
        Ok(())
    }
}

fn validate_consecutive_days(consecutive_days: usize) -> Result<()> {
    if consecutive_days < 1 {
        return Err(PatternError::invalid_parameter(
            "consecutive_days",
            "must be at least 1",
        ));
    }
    Ok(())
}

// ============================================================================
// Combined
// ============================================================================

/// Configuration for both detectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    pub low_value: LowValueConfig,
    pub stagnation: StagnationConfig,
}

impl PatternConfig {
    pub fn new(low_value: LowValueConfig, stagnation: StagnationConfig) -> Result<Self> {
        let config = Self {
            low_value,
            stagnation,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.low_value.validate()?;
        self.stagnation.validate()
    }

    /// Start a builder seeded with the defaults.
    pub fn builder() -> PatternConfigBuilder {
        PatternConfigBuilder::new()
    }
}

/// Builder for [`PatternConfig`]. Unset fields keep their defaults.
#[derive(Debug, Default)]
pub struct PatternConfigBuilder {
    low_threshold: Option<f64>,
    low_consecutive_days: Option<usize>,
    stagnation_consecutive_days: Option<usize>,
    change_threshold: Option<f64>,
    active_change_percentage: Option<f64>,
}

impl PatternConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the low-value threshold fraction.
    pub fn low_value_threshold(mut self, threshold: f64) -> Self {
        self.low_threshold = Some(threshold);
        self
    }

    /// Set the minimum low-value run length.
    pub fn low_value_consecutive_days(mut self, days: usize) -> Self {
        self.low_consecutive_days = Some(days);
        self
    }

    /// Set the minimum stagnation run length.
    pub fn stagnation_consecutive_days(mut self, days: usize) -> Self {
        self.stagnation_consecutive_days = Some(days);
        self
    }

    /// Set the significant-change multiplier.
    pub fn change_threshold(mut self, threshold: f64) -> Self {
        self.change_threshold = Some(threshold);
        self
    }

    /// Set the minimum active-change share.
    pub fn active_change_percentage(mut self, percentage: f64) -> Self {
        self.active_change_percentage = Some(percentage);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<PatternConfig> {
        let low_defaults = LowValueConfig::default();
        let stagnation_defaults = StagnationConfig::default();

        PatternConfig::new(
            LowValueConfig {
                threshold: self.low_threshold.unwrap_or(low_defaults.threshold),
                consecutive_days: self
                    .low_consecutive_days
                    .unwrap_or(low_defaults.consecutive_days),
            },
            StagnationConfig {
                consecutive_days: self
                    .stagnation_consecutive_days
                    .unwrap_or(stagnation_defaults.consecutive_days),
                change_threshold: self
                    .change_threshold
                    .unwrap_or(stagnation_defaults.change_threshold),
                active_change_percentage: self
                    .active_change_percentage
                    .unwrap_or(stagnation_defaults.active_change_percentage),
            },
        )
    }
}
