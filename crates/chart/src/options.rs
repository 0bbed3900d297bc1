//! Chart options and theme.

use std::time::Duration;

use pattern::PatternConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Colors and typography for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub bar_color: String,
    pub bar_hover_color: String,
    pub low_value_color: String,
    pub stagnation_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    pub font_size: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bar_color: "black".to_string(),
            bar_hover_color: "blue".to_string(),
            low_value_color: "rgba(255,0,0,0.2)".to_string(),
            stagnation_color: "rgba(255,165,0,0.2)".to_string(),
            background_color: "white".to_string(),
            text_color: "black".to_string(),
            font_family: "monospace".to_string(),
            font_size: 12,
        }
    }
}

/// Line colors for the statistic overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsColors {
    pub mean: String,
    pub median: String,
    pub moving_average: String,
}

impl Default for StatisticsColors {
    fn default() -> Self {
        Self {
            mean: "#FF0000".to_string(),
            median: "#0000FF".to_string(),
            moving_average: "#00FF00".to_string(),
        }
    }
}

/// Statistic overlays. Nothing is drawn unless `enabled` is set, and then
/// only the lines whose `show_*` flag is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsOptions {
    pub enabled: bool,
    pub show_mean: bool,
    pub show_median: bool,
    pub show_moving_average: bool,
    pub line_color: StatisticsColors,
}

impl StatisticsOptions {
    /// All three overlays switched on.
    pub fn all() -> Self {
        Self {
            enabled: true,
            show_mean: true,
            show_median: true,
            show_moving_average: true,
            line_color: StatisticsColors::default(),
        }
    }
}

/// Downsampling of large series before painting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceOptions {
    pub enable_virtualization: bool,
    /// Series longer than this are clustered.
    pub clustering_threshold: usize,
}

impl Default for PerformanceOptions {
    fn default() -> Self {
        Self {
            enable_virtualization: true,
            clustering_threshold: 1000,
        }
    }
}

/// Everything a [`Plot`](crate::Plot) needs besides its data and renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    pub theme: Theme,
    pub patterns: PatternConfig,
    pub statistics: StatisticsOptions,
    pub performance: PerformanceOptions,
    /// Quiet period after the last mutation before a repaint, in milliseconds.
    pub refresh_delay_ms: u64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            theme: Theme::default(),
            patterns: PatternConfig::default(),
            statistics: StatisticsOptions::default(),
            performance: PerformanceOptions::default(),
            refresh_delay_ms: 100,
        }
    }
}

impl ChartOptions {
    /// Create options with the given size and defaults elsewhere.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        let options = Self {
            width,
            height,
            ..Self::default()
        };
        options.validate()?;
        Ok(options)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    /// Check the canvas size and the pattern configuration.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::invalid_options(
                    name,
                    format!("must be a positive number, got {}", value),
                ));
            }
        }
        self.patterns.validate()?;
        Ok(())
    }
}
