//! # rustful-chart
//!
//! Chart host for date/value series. A [`Plot`] owns the series, runs the
//! low-value and stagnation detectors over it and paints the result through
//! a [`Renderer`] in a fixed order: pattern bands, bars, the trend line and
//! then the statistic overlays.
//!
//! ```
//! use chart::{Plot, RecordingRenderer};
//! use pattern::DataPoint;
//!
//! let points = vec![DataPoint::new(0, 3.0), DataPoint::new(86_400_000, 5.0)];
//! let mut plot = Plot::with_defaults(RecordingRenderer::new(), points).unwrap();
//! plot.render();
//! assert_eq!(plot.renderer().frames(), 1);
//! ```

mod error;
pub mod export;
mod options;
mod plot;
mod refresh;
mod renderer;
mod series;

pub use error::{ChartError, Result};
pub use export::format_date;
pub use options::{ChartOptions, PerformanceOptions, StatisticsColors, StatisticsOptions, Theme};
pub use plot::{DetectedPatterns, Plot, StatisticsSummary, MOVING_AVERAGE_WINDOW};
pub use refresh::{RefreshScheduler, RefreshState};
pub use renderer::{DrawCommand, Rect, RecordingRenderer, Renderer};
pub use series::{downsample, SeriesStore};
