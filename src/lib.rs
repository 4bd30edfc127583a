//! Plotprep: normalize messy chart input into plot-ready series descriptors.
//!
//! Upstream services hand charts arrays with nulls and NaNs, trend series
//! whose two sides disagree on length, and co-occurrence data in either a
//! keyed-object or a bare-matrix shape. Plotprep turns each of those into a
//! [`series::ChartDescriptor`] a plot surface can draw as-is, or into a typed
//! "nothing to plot" result.
//!
//! # Modules
//!
//! - [`series`]: Raw input types, descriptors, options and JSON I/O
//! - [`sanitize`]: Sample filtering, trend alignment and the sanitize report
//! - [`resolve`]: Co-occurrence shape detection and matrix resolution
//! - [`build`]: Descriptor builders for the three chart kinds
//! - [`pipeline`]: The normalization entry points
//! - [`error`]: Error types for plotprep operations

pub mod build;
pub mod error;
pub mod pipeline;
pub mod resolve;
pub mod sanitize;
pub mod series;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

pub use error::PlotprepError;
pub use pipeline::{
    normalize_distribution, normalize_distribution_with_report, normalize_heatmap,
    normalize_heatmap_json, normalize_heatmap_json_with_report, normalize_heatmap_with_report,
    normalize_trend, normalize_trend_with_report,
};

use sanitize::SanitizeReport;
use series::{io_json, DisplayMode, DistributionOptions, HeatmapOptions, Normalized, TrendOptions};

/// The plotprep CLI application.
#[derive(Parser)]
#[command(name = "plotprep")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Normalize histogram samples ({"data": [...]} or a bare array).
    Distribution(DistributionArgs),
    /// Normalize a trend series ({"x": [...], "y": [...]}).
    Trend(TrendArgs),
    /// Normalize co-occurrence data (keyed object or matrix).
    Heatmap(HeatmapArgs),
    /// Report which co-occurrence representation a file holds.
    Shape(ShapeArgs),
}

/// Flags shared by the three chart subcommands.
#[derive(clap::Args)]
struct CommonArgs {
    /// Input JSON file ('-' for stdin).
    input: PathBuf,

    /// Options file (JSON or YAML) with presentation defaults.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Output format ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Write the JSON outcome to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print the sanitize report to stderr.
    #[arg(long)]
    report: bool,

    /// Fail if there is nothing to plot or sanitization produced warnings.
    #[arg(long)]
    strict: bool,

    /// Chart title.
    #[arg(long)]
    title: Option<String>,

    /// X axis label.
    #[arg(long)]
    x_label: Option<String>,

    /// Y axis label.
    #[arg(long)]
    y_label: Option<String>,
}

impl CommonArgs {
    fn apply_labels(&self, title: &mut String, x_label: &mut String, y_label: &mut String) {
        if let Some(t) = &self.title {
            title.clone_from(t);
        }
        if let Some(x) = &self.x_label {
            x_label.clone_from(x);
        }
        if let Some(y) = &self.y_label {
            y_label.clone_from(y);
        }
    }
}

/// Arguments for the distribution subcommand.
#[derive(clap::Args)]
struct DistributionArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Requested number of histogram bins.
    #[arg(long)]
    bins: Option<u32>,

    /// Bar color.
    #[arg(long)]
    color: Option<String>,
}

/// Arguments for the trend subcommand.
#[derive(clap::Args)]
struct TrendArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Display mode ('lines', 'markers', or 'lines+markers').
    #[arg(long)]
    mode: Option<DisplayMode>,

    /// Line color.
    #[arg(long)]
    color: Option<String>,

    /// Show the legend (`--show-legend=false` hides it).
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    show_legend: Option<bool>,

    /// Series name shown in the legend.
    #[arg(long)]
    series_name: Option<String>,
}

/// Arguments for the heatmap subcommand.
#[derive(clap::Args)]
struct HeatmapArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Colorscale name.
    #[arg(long)]
    colorscale: Option<String>,

    /// Column labels, comma-separated. Replaces the detected labels.
    #[arg(long, value_delimiter = ',')]
    x_labels: Option<Vec<String>>,

    /// Row labels, comma-separated. Replaces the detected labels.
    #[arg(long, value_delimiter = ',')]
    y_labels: Option<Vec<String>>,
}

/// Arguments for the shape subcommand.
#[derive(clap::Args)]
struct ShapeArgs {
    /// Input JSON file ('-' for stdin).
    input: PathBuf,
}

/// Run the plotprep CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PlotprepError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Distribution(args)) => run_distribution(args),
        Some(Commands::Trend(args)) => run_trend(args),
        Some(Commands::Heatmap(args)) => run_heatmap(args),
        Some(Commands::Shape(args)) => run_shape(args),
        None => {
            println!("plotprep {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Normalize messy chart input into plot-ready series descriptors.");
            println!();
            println!("Run 'plotprep --help' for usage information.");
            Ok(())
        }
    }
}

/// Output format for an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(s: &str) -> Result<Self, PlotprepError> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(PlotprepError::UnsupportedFormat(format!(
                "output '{}' (supported: text, json)",
                other
            ))),
        }
    }
}

/// Loads options from `path` if given, else the defaults.
fn load_options<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T, PlotprepError> {
    match path {
        Some(p) => io_json::read_options(p),
        None => Ok(T::default()),
    }
}

/// Execute the distribution subcommand.
fn run_distribution(args: DistributionArgs) -> Result<(), PlotprepError> {
    let format = OutputFormat::parse(&args.common.output)?;

    let mut opts: DistributionOptions = load_options(args.common.options.as_deref())?;
    args.common
        .apply_labels(&mut opts.title, &mut opts.x_label, &mut opts.y_label);
    if let Some(bins) = args.bins {
        opts.bins = bins;
    }
    if let Some(color) = args.color {
        opts.color = color;
    }

    let value = io_json::read_json_value(&args.common.input)?;
    let samples = io_json::distribution_samples(&value, &args.common.input)?;
    let (outcome, report) = normalize_distribution_with_report(samples.as_deref(), &opts);

    finish(&args.common, format, &outcome, &report)
}

/// Execute the trend subcommand.
fn run_trend(args: TrendArgs) -> Result<(), PlotprepError> {
    let format = OutputFormat::parse(&args.common.output)?;

    let mut opts: TrendOptions = load_options(args.common.options.as_deref())?;
    args.common
        .apply_labels(&mut opts.title, &mut opts.x_label, &mut opts.y_label);
    if let Some(mode) = args.mode {
        opts.mode = mode;
    }
    if let Some(color) = args.color {
        opts.color = color;
    }
    if let Some(show) = args.show_legend {
        opts.show_legend = show;
    }
    if let Some(name) = args.series_name {
        opts.series_name = name;
    }

    let value = io_json::read_json_value(&args.common.input)?;
    let (x, y) = io_json::trend_series(&value, &args.common.input)?;
    let (outcome, report) = normalize_trend_with_report(x.as_deref(), y.as_deref(), &opts);

    finish(&args.common, format, &outcome, &report)
}

/// Execute the heatmap subcommand.
fn run_heatmap(args: HeatmapArgs) -> Result<(), PlotprepError> {
    let format = OutputFormat::parse(&args.common.output)?;

    let mut opts: HeatmapOptions = load_options(args.common.options.as_deref())?;
    args.common
        .apply_labels(&mut opts.title, &mut opts.x_label, &mut opts.y_label);
    if let Some(colorscale) = args.colorscale {
        opts.colorscale = colorscale;
    }
    if args.x_labels.is_some() {
        opts.x_labels = args.x_labels;
    }
    if args.y_labels.is_some() {
        opts.y_labels = args.y_labels;
    }

    let value = io_json::read_json_value(&args.common.input)?;
    let (outcome, report) = normalize_heatmap_json_with_report(&value, &opts);

    finish(&args.common, format, &outcome, &report)
}

/// Execute the shape subcommand.
fn run_shape(args: ShapeArgs) -> Result<(), PlotprepError> {
    let value = io_json::read_json_value(&args.input)?;
    if value.is_null() {
        println!("absent");
        return Ok(());
    }

    match resolve::classify(&value) {
        series::CooccurrenceInput::Unsupported(why) => println!("unsupported ({})", why),
        input => println!("{}", input.shape_name()),
    }
    Ok(())
}

/// Emits the outcome and report, then applies the strict policy.
fn finish(
    common: &CommonArgs,
    format: OutputFormat,
    outcome: &Normalized,
    report: &SanitizeReport,
) -> Result<(), PlotprepError> {
    match (&common.out, format) {
        (Some(path), OutputFormat::Json) => io_json::write_outcome_json(path, outcome)?,
        (Some(path), OutputFormat::Text) => std::fs::write(path, outcome.to_string())?,
        (None, OutputFormat::Json) => {
            let json = io_json::to_json_string(outcome).map_err(|source| {
                PlotprepError::DescriptorWrite {
                    path: PathBuf::from("-"),
                    source,
                }
            })?;
            println!("{}", json);
        }
        (None, OutputFormat::Text) => print!("{}", outcome),
    }

    if common.report {
        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(report).map_err(|source| {
                    PlotprepError::DescriptorWrite {
                        path: PathBuf::from("-"),
                        source,
                    }
                })?;
                eprintln!("{}", json);
            }
            OutputFormat::Text => eprint!("{}", report),
        }
    }

    if common.strict {
        if let Some(reason) = outcome.empty_reason() {
            return Err(PlotprepError::NothingToPlot { reason });
        }
        let warning_count = report.warning_count();
        if warning_count > 0 {
            return Err(PlotprepError::StrictFailure { warning_count });
        }
    }

    Ok(())
}
