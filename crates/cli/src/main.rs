//! # rustful-plot
//!
//! Command-line interface for low-value and stagnation pattern detection,
//! series statistics, trend lines and chart draw plans.

mod loader;

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart::{ChartOptions, Plot, RecordingRenderer, StatisticsOptions};
use clap::{Args, Parser, Subcommand};
use pattern::{
    compute_low_value_patterns, compute_stagnation_patterns, compute_trend_line, DataPoint,
    Pattern, PatternConfig,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rustful-plot")]
#[command(version, about = "Time series pattern detection and chart plans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args)]
struct Common {
    /// Input file (CSV or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Value column name or index for CSV input
    #[arg(short, long)]
    column: Option<String>,

    /// Pattern configuration (JSON); missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (optional, stdout otherwise)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect low-value and stagnation patterns
    Detect {
        #[command(flatten)]
        common: Common,
    },

    /// Compute descriptive statistics
    Stats {
        #[command(flatten)]
        common: Common,

        /// Percentiles to report (0-100)
        #[arg(short, long, value_delimiter = ',', default_value = "25,50,75")]
        percentiles: Vec<f64>,

        /// Moving average window
        #[arg(short, long, default_value = "5")]
        window: usize,
    },

    /// Fit the trend line with low-value runs excluded
    Trend {
        #[command(flatten)]
        common: Common,
    },

    /// Render the chart and print the draw commands
    Plan {
        #[command(flatten)]
        common: Common,

        /// Canvas width
        #[arg(long, default_value = "800")]
        width: f64,

        /// Canvas height
        #[arg(long, default_value = "400")]
        height: f64,

        /// Include mean, median and moving average overlays
        #[arg(long)]
        statistics: bool,
    },

    /// Export the sorted series as CSV
    Export {
        #[command(flatten)]
        common: Common,
    },
}

impl Commands {
    fn common(&self) -> &Common {
        match self {
            Commands::Detect { common }
            | Commands::Stats { common, .. }
            | Commands::Trend { common }
            | Commands::Plan { common, .. }
            | Commands::Export { common } => common,
        }
    }
}

/// A detected pattern with the dates it spans.
#[derive(Serialize)]
struct PatternReport {
    start: usize,
    end: usize,
    from: String,
    to: String,
}

#[derive(Serialize)]
struct DetectReport {
    total_points: usize,
    config: PatternConfig,
    low_value: Vec<PatternReport>,
    stagnation: Vec<PatternReport>,
}

#[derive(Serialize)]
struct PercentileReport {
    percentile: f64,
    value: f64,
}

#[derive(Serialize)]
struct MovingAverageReport {
    window: usize,
    values: Vec<f64>,
}

#[derive(Serialize)]
struct StatsReport {
    count: usize,
    mean: f64,
    median: f64,
    std_dev: f64,
    percentiles: Vec<PercentileReport>,
    moving_average: MovingAverageReport,
}

fn load_config(path: Option<&Path>) -> Result<PatternConfig> {
    let Some(path) = path else {
        return Ok(PatternConfig::default());
    };

    let file = File::open(path).with_context(|| format!("Failed to open config {:?}", path))?;
    let config: PatternConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config {:?}", path))?;
    config.validate().context("Invalid pattern configuration")?;
    Ok(config)
}

fn load(common: &Common) -> Result<(Vec<DataPoint>, PatternConfig)> {
    let series = loader::load_series(&common.input, common.column.as_deref())
        .with_context(|| format!("Failed to load {:?}", common.input))?;
    tracing::info!(
        points = series.len(),
        input = %common.input.display(),
        "loaded series"
    );

    let config = load_config(common.config.as_deref())?;
    Ok((series, config))
}

/// Write `text` to the output file, or stdout when none is given.
fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {:?}", path))?;
            tracing::info!(output = %path.display(), "results written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn emit_json<T: Serialize>(output: Option<&Path>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize results")?;
    emit(output, &json)
}

fn pattern_reports(series: &[DataPoint], patterns: &[Pattern]) -> Result<Vec<PatternReport>> {
    patterns
        .iter()
        .map(|p| -> Result<PatternReport> {
            Ok(PatternReport {
                start: p.start,
                end: p.end,
                from: chart::format_date(series[p.start].timestamp)?,
                to: chart::format_date(series[p.end].timestamp)?,
            })
        })
        .collect()
}

fn run_detect(common: &Common) -> Result<()> {
    let (series, config) = load(common)?;

    let low_value = compute_low_value_patterns(&series, &config.low_value);
    let stagnation = compute_stagnation_patterns(&series, &config.stagnation);
    tracing::info!(
        low_value = low_value.len(),
        stagnation = stagnation.len(),
        "patterns detected"
    );

    let report = DetectReport {
        total_points: series.len(),
        config,
        low_value: pattern_reports(&series, &low_value)?,
        stagnation: pattern_reports(&series, &stagnation)?,
    };
    emit_json(common.output.as_deref(), &report)
}

fn run_stats(common: &Common, percentiles: &[f64], window: usize) -> Result<()> {
    let (series, _) = load(common)?;
    let values = pattern::values(&series);

    let percentiles = percentiles
        .iter()
        .map(|&p| -> Result<PercentileReport> {
            let value = statistics::percentile(&values, p)
                .with_context(|| format!("Cannot compute percentile {}", p))?;
            Ok(PercentileReport {
                percentile: p,
                value,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = StatsReport {
        count: values.len(),
        mean: statistics::mean(&values),
        median: statistics::median(&values),
        std_dev: statistics::standard_deviation(&values),
        percentiles,
        moving_average: MovingAverageReport {
            window,
            values: statistics::moving_average(&values, window),
        },
    };
    emit_json(common.output.as_deref(), &report)
}

fn run_trend(common: &Common) -> Result<()> {
    let (series, config) = load(common)?;
    let trend = compute_trend_line(&series, &config.low_value);
    if trend.is_none() {
        tracing::warn!("fewer than two points left after removing low-value runs");
    }
    emit_json(common.output.as_deref(), &trend)
}

fn run_plan(common: &Common, width: f64, height: f64, statistics: bool) -> Result<()> {
    let (series, config) = load(common)?;

    let mut options = ChartOptions::new(width, height).context("Invalid canvas size")?;
    options.patterns = config;
    if statistics {
        options.statistics = StatisticsOptions::all();
    }

    let mut plot = Plot::new(RecordingRenderer::new(), series, options)?;
    plot.render();
    let commands = plot.into_renderer().into_commands();
    tracing::info!(commands = commands.len(), "chart rendered");

    emit_json(common.output.as_deref(), &commands)
}

fn run_export(common: &Common) -> Result<()> {
    let (series, _) = load(common)?;
    let plot = Plot::with_defaults(RecordingRenderer::new(), series)?;
    let csv = plot.export_csv()?;
    emit(common.output.as_deref(), &csv)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rustful_plot=info".into()),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    tracing::debug!(input = %cli.command.common().input.display(), "starting");

    match &cli.command {
        Commands::Detect { common } => run_detect(common),
        Commands::Stats {
            common,
            percentiles,
            window,
        } => run_stats(common, percentiles, *window),
        Commands::Trend { common } => run_trend(common),
        Commands::Plan {
            common,
            width,
            height,
            statistics,
        } => run_plan(common, *width, *height, *statistics),
        Commands::Export { common } => run_export(common),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
