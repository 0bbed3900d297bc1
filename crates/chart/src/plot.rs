//! The chart host.

use std::borrow::Cow;
use std::time::Instant;

use pattern::{
    fit_trend_line, DataPoint, LowValueDetector, Pattern, PatternConfig, PatternDetector,
    PatternKind, StagnationDetector, TrendLine,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::export;
use crate::options::{ChartOptions, Theme};
use crate::refresh::RefreshScheduler;
use crate::renderer::{Rect, Renderer};
use crate::series::{downsample, SeriesStore};

/// Width of the last bar, which has no neighbour to stretch to.
const LAST_BAR_WIDTH: f64 = 10.0;

/// Window of the moving average in [`StatisticsSummary`] and the overlay.
pub const MOVING_AVERAGE_WINDOW: usize = 5;

const TREND_LINE_COLOR: &str = "#ff0000";
const TREND_LINE_WIDTH: f64 = 2.0;
const STATISTIC_LINE_WIDTH: f64 = 1.0;

/// Aggregate values of the stored series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean: f64,
    pub median: f64,
    pub moving_average: Vec<f64>,
}

/// Patterns found in the painted series, indices into that series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedPatterns {
    pub low_value: Vec<Pattern>,
    pub stagnation: Vec<Pattern>,
}

/// A bar chart of a date/value series with pattern bands, a trend line and
/// optional statistic overlays.
///
/// Mutations take the current time and only schedule a repaint; call
/// [`tick`](Plot::tick) periodically, or [`flush`](Plot::flush) to paint
/// pending changes right away.
pub struct Plot<R: Renderer> {
    renderer: R,
    options: ChartOptions,
    series: SeriesStore,
    low_values: LowValueDetector,
    stagnation: StagnationDetector,
    refresh: RefreshScheduler,
}

impl<R: Renderer> Plot<R> {
    /// Create a plot over `points`, which need not be sorted.
    ///
    /// Nothing is painted until [`render`](Plot::render) or a due refresh.
    pub fn new(renderer: R, points: Vec<DataPoint>, options: ChartOptions) -> Result<Self> {
        if let Err(error) = options.validate() {
            tracing::warn!(%error, "chart options rejected");
            return Err(error);
        }

        Ok(Self {
            renderer,
            low_values: LowValueDetector::new(options.patterns.low_value)?,
            stagnation: StagnationDetector::new(options.patterns.stagnation)?,
            refresh: RefreshScheduler::new(options.refresh_delay()),
            series: SeriesStore::new(points),
            options,
        })
    }

    /// Create a plot with [`ChartOptions::default`].
    pub fn with_defaults(renderer: R, points: Vec<DataPoint>) -> Result<Self> {
        Self::new(renderer, points, ChartOptions::default())
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn series(&self) -> &SeriesStore {
        &self.series
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn refresh(&self) -> &RefreshScheduler {
        &self.refresh
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn add_data(&mut self, point: DataPoint, now: Instant) {
        self.series.push(point);
        self.refresh.mark_dirty(now);
    }

    /// Drop the earliest point. Returns false, and schedules nothing, when
    /// the series is empty.
    pub fn remove_oldest(&mut self, now: Instant) -> bool {
        let changed = self.series.remove_oldest();
        if changed {
            self.refresh.mark_dirty(now);
        }
        changed
    }

    /// Overwrite the earliest point. Returns false, and schedules nothing,
    /// when the series is empty.
    pub fn replace_oldest(&mut self, point: DataPoint, now: Instant) -> bool {
        let changed = self.series.replace_oldest(point);
        if changed {
            self.refresh.mark_dirty(now);
        }
        changed
    }

    pub fn set_theme(&mut self, theme: Theme, now: Instant) {
        self.options.theme = theme;
        self.refresh.mark_dirty(now);
    }

    /// Swap in new detector settings. On error the current settings stay.
    pub fn set_pattern_options(&mut self, config: PatternConfig, now: Instant) -> Result<()> {
        let detectors = LowValueDetector::new(config.low_value)
            .and_then(|low| Ok((low, StagnationDetector::new(config.stagnation)?)));
        let (low_values, stagnation) = match detectors {
            Ok(detectors) => detectors,
            Err(error) => {
                tracing::warn!(%error, "pattern options rejected");
                return Err(error.into());
            }
        };

        self.low_values = low_values;
        self.stagnation = stagnation;
        self.options.patterns = config;
        self.refresh.mark_dirty(now);
        Ok(())
    }

    /// Repaint if a refresh is due at `now`. Returns whether it painted.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.refresh.poll(now) {
            return false;
        }
        self.render();
        self.refresh.finish();
        true
    }

    /// Repaint now if anything is pending. Returns whether it painted.
    pub fn flush(&mut self) -> bool {
        if !self.refresh.force() {
            return false;
        }
        self.render();
        self.refresh.finish();
        true
    }

    /// The series as painted: the stored points, clustered when the series
    /// is larger than the clustering threshold.
    pub fn visible_points(&self) -> Cow<'_, [DataPoint]> {
        let performance = &self.options.performance;
        let points = self.series.points();
        if performance.enable_virtualization && points.len() > performance.clustering_threshold {
            Cow::Owned(downsample(points, self.options.width as usize))
        } else {
            Cow::Borrowed(points)
        }
    }

    /// Patterns in the painted series.
    pub fn patterns(&self) -> DetectedPatterns {
        let points = self.visible_points();
        DetectedPatterns {
            low_value: self.low_values.find_patterns(&points),
            stagnation: self.stagnation.find_patterns(&points),
        }
    }

    /// Trend line of the painted series.
    pub fn trend_line(&self) -> Option<TrendLine> {
        fit_trend_line(&self.visible_points(), &self.low_values)
    }

    /// Run a full paint pass regardless of the refresh state.
    pub fn render(&mut self) {
        self.renderer.clear();

        let points = self.visible_points().into_owned();
        if points.is_empty() {
            tracing::debug!("rendered empty chart");
            return;
        }

        let frame = Frame::new(&points, self.options.width, self.options.height);
        let low_value = self.low_values.find_patterns(&points);
        let stagnation = self.stagnation.find_patterns(&points);

        self.draw_bands(&frame, &points, &low_value, PatternKind::LowValue);
        self.draw_bands(&frame, &points, &stagnation, PatternKind::Stagnation);
        self.draw_bars(&frame, &points);

        let trend = fit_trend_line(&points, &self.low_values);
        if let Some(trend) = trend {
            self.draw_trend_line(&frame, &points, trend);
        }

        if self.options.statistics.enabled {
            self.draw_statistics(&frame, &points);
        }

        tracing::debug!(
            points = points.len(),
            stored = self.series.len(),
            low_value = low_value.len(),
            stagnation = stagnation.len(),
            trend = trend.is_some(),
            "rendered chart"
        );
    }

    /// Mean, median and 5-point moving average of the stored values.
    pub fn statistics(&self) -> StatisticsSummary {
        let values = self.series.values();
        StatisticsSummary {
            mean: statistics::mean(&values),
            median: statistics::median(&values),
            moving_average: statistics::moving_average(&values, MOVING_AVERAGE_WINDOW),
        }
    }

    /// The stored series as `Date,Value` CSV.
    pub fn export_csv(&self) -> Result<String> {
        export::to_csv(self.series.points())
    }

    fn draw_bands(
        &mut self,
        frame: &Frame,
        points: &[DataPoint],
        patterns: &[Pattern],
        kind: PatternKind,
    ) {
        let color = match kind {
            PatternKind::LowValue => &self.options.theme.low_value_color,
            PatternKind::Stagnation => &self.options.theme.stagnation_color,
        };

        for pattern in patterns {
            let start = frame.x(points[pattern.start].timestamp);
            let end = frame.x(points[pattern.end].timestamp);
            let band = Rect::new(start, 0.0, end - start, frame.height);
            self.renderer.draw_pattern(band, color, kind);
        }
    }

    fn draw_bars(&mut self, frame: &Frame, points: &[DataPoint]) {
        for (index, point) in points.iter().enumerate() {
            let x = frame.x(point.timestamp);
            let y = frame.y(point.value);
            let width = match points.get(index + 1) {
                Some(next) => frame.x(next.timestamp) - x,
                None => LAST_BAR_WIDTH,
            };
            let bar = Rect::new(x, y, width, frame.height - y);
            self.renderer.draw_bar(bar, &self.options.theme.bar_color);
        }
    }

    fn draw_trend_line(&mut self, frame: &Frame, points: &[DataPoint], trend: TrendLine) {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        let from = (frame.x(first.timestamp), frame.y(trend.value_at(0.0)));
        let to = (
            frame.x(last.timestamp),
            frame.y(trend.value_at((points.len() - 1) as f64)),
        );
        self.renderer
            .draw_line(from, to, TREND_LINE_COLOR, TREND_LINE_WIDTH);
    }

    fn draw_statistics(&mut self, frame: &Frame, points: &[DataPoint]) {
        let stats = &self.options.statistics;
        let values = pattern::values(points);

        if stats.show_mean {
            let y = frame.y(statistics::mean(&values));
            self.renderer.draw_line(
                (0.0, y),
                (frame.width, y),
                &stats.line_color.mean,
                STATISTIC_LINE_WIDTH,
            );
        }

        if stats.show_median {
            let y = frame.y(statistics::median(&values));
            self.renderer.draw_line(
                (0.0, y),
                (frame.width, y),
                &stats.line_color.median,
                STATISTIC_LINE_WIDTH,
            );
        }

        if stats.show_moving_average && points.len() >= MOVING_AVERAGE_WINDOW {
            // each average sits on the last point of its window
            let averages = statistics::moving_average(&values, MOVING_AVERAGE_WINDOW);
            let anchors = &points[MOVING_AVERAGE_WINDOW - 1..];
            let vertices: Vec<(f64, f64)> = anchors
                .iter()
                .zip(&averages)
                .map(|(point, &average)| (frame.x(point.timestamp), frame.y(average)))
                .collect();
            for segment in vertices.windows(2) {
                self.renderer.draw_line(
                    segment[0],
                    segment[1],
                    &stats.line_color.moving_average,
                    STATISTIC_LINE_WIDTH,
                );
            }
        }
    }
}

/// Maps timestamps and values onto the canvas for one paint pass.
///
/// Degenerate ranges put everything on the left or bottom edge.
struct Frame {
    width: f64,
    height: f64,
    time_min: i64,
    time_span: f64,
    value_min: f64,
    value_span: f64,
}

impl Frame {
    fn new(points: &[DataPoint], width: f64, height: f64) -> Self {
        let time_min = points.iter().map(|p| p.timestamp).min().unwrap_or(0);
        let time_max = points.iter().map(|p| p.timestamp).max().unwrap_or(0);
        let value_min = points.iter().map(|p| p.value).fold(f64::INFINITY, f64::min);
        let value_max = points.iter().map(|p| p.value).fold(f64::NEG_INFINITY, f64::max);

        Self {
            width,
            height,
            time_min,
            time_span: (time_max as i128 - time_min as i128) as f64,
            value_min,
            value_span: value_max - value_min,
        }
    }

    fn x(&self, timestamp: i64) -> f64 {
        if self.time_span > 0.0 {
            (timestamp as i128 - self.time_min as i128) as f64 / self.time_span * self.width
        } else {
            0.0
        }
    }

    fn y(&self, value: f64) -> f64 {
        if self.value_span > 0.0 {
            self.height - (value - self.value_min) / self.value_span * self.height
        } else {
            self.height
        }
    }
}
