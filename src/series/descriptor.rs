//! Plot-ready descriptors and the typed "nothing to plot" result.
//!
//! A [`ChartDescriptor`] is what the plot surface receives. It carries data
//! arrays that have already been sanitized and a small layout record; chrome
//! such as margins, grid colors, and hover templates is left to the surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::raw::AxisValue;

/// Outcome of a normalization pipeline.
///
/// Either a complete descriptor or a typed empty result; never a partial
/// descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Normalized {
    Ready(ChartDescriptor),
    Empty(EmptyResult),
}

impl Normalized {
    /// Shorthand for an empty outcome with the default message.
    pub fn empty(reason: EmptyReason) -> Self {
        Normalized::Empty(EmptyResult::new(reason))
    }

    /// The descriptor, if the pipeline produced one.
    pub fn descriptor(&self) -> Option<&ChartDescriptor> {
        match self {
            Normalized::Ready(d) => Some(d),
            Normalized::Empty(_) => None,
        }
    }

    /// The empty reason, if the pipeline produced nothing plottable.
    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            Normalized::Ready(_) => None,
            Normalized::Empty(e) => Some(e.reason),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Normalized::Empty(_))
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalized::Empty(empty) => writeln!(f, "Nothing to plot: {}", empty),
            Normalized::Ready(chart) => write!(f, "{}", chart),
        }
    }
}

/// Why a pipeline produced nothing plottable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyReason {
    /// Input absent or structurally empty.
    NoData,
    /// Input present but every entry was filtered out.
    NoValidData,
    /// Heatmap input matched neither accepted representation.
    UnsupportedFormat,
}

impl EmptyReason {
    /// Stable identifier, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            EmptyReason::NoData => "no-data",
            EmptyReason::NoValidData => "no-valid-data",
            EmptyReason::UnsupportedFormat => "unsupported-format",
        }
    }

    /// Placeholder text a caller can show instead of the chart.
    pub fn default_message(&self) -> &'static str {
        match self {
            EmptyReason::NoData => "No data available",
            EmptyReason::NoValidData => "No valid data available",
            EmptyReason::UnsupportedFormat => "Unsupported data format",
        }
    }
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Sentinel returned instead of a descriptor when there is nothing to plot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyResult {
    pub reason: EmptyReason,
    /// Human-readable placeholder text.
    pub message: String,
}

impl EmptyResult {
    pub fn new(reason: EmptyReason) -> Self {
        Self {
            reason,
            message: reason.default_message().to_string(),
        }
    }
}

impl fmt::Display for EmptyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.reason)
    }
}

/// A finalized series plus its layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub series: SeriesDescriptor,
    pub layout: LayoutDescriptor,
}

impl fmt::Display for ChartDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} \"{}\"", self.series.kind(), self.layout.title)?;
        match &self.series {
            SeriesDescriptor::Histogram { values, bins, .. } => {
                writeln!(f, "  {} value(s), {} bin(s) requested", values.len(), bins)?;
            }
            SeriesDescriptor::Scatter { x, mode, name, .. } => {
                writeln!(f, "  {} point(s) as {} ('{}')", x.len(), mode, name)?;
            }
            SeriesDescriptor::Heatmap { x, y, colorscale, .. } => {
                writeln!(f, "  {} x {} cells, colorscale {}", y.len(), x.len(), colorscale)?;
            }
        }
        writeln!(f, "  x axis: {}", self.layout.x_axis)?;
        writeln!(f, "  y axis: {}", self.layout.y_axis)?;
        Ok(())
    }
}

impl fmt::Display for AxisDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(axis_type) = self.axis_type {
            write!(f, " [{}]", axis_type)?;
        }
        if self.reversed {
            write!(f, " (reversed)")?;
        }
        Ok(())
    }
}

/// The data-carrying part of a chart, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesDescriptor {
    /// Histogram of raw values; the plot surface does the binning.
    Histogram {
        values: Vec<f64>,
        bins: u32,
        color: String,
    },
    /// Line/marker series over an x axis.
    Scatter {
        x: Vec<AxisValue>,
        y: Vec<f64>,
        mode: DisplayMode,
        name: String,
        color: String,
    },
    /// Labeled matrix; `z[i][j]` belongs to row `y[i]` and column `x[j]`.
    Heatmap {
        x: Vec<String>,
        y: Vec<String>,
        z: Vec<Vec<f64>>,
        colorscale: String,
        show_scale: bool,
    },
}

impl SeriesDescriptor {
    /// Short name of the series kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SeriesDescriptor::Histogram { .. } => "histogram",
            SeriesDescriptor::Scatter { .. } => "scatter",
            SeriesDescriptor::Heatmap { .. } => "heatmap",
        }
    }

    /// Number of plotted points (cells for a heatmap).
    pub fn point_count(&self) -> usize {
        match self {
            SeriesDescriptor::Histogram { values, .. } => values.len(),
            SeriesDescriptor::Scatter { x, .. } => x.len(),
            SeriesDescriptor::Heatmap { z, .. } => z.iter().map(Vec::len).sum(),
        }
    }
}

/// Layout hints that depend on the data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutDescriptor {
    pub title: String,
    pub x_axis: AxisDescriptor,
    pub y_axis: AxisDescriptor,
    pub show_legend: bool,
}

/// One axis of the layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisDescriptor {
    pub title: String,
    /// Inferred axis type; absent when the surface should choose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    /// Draw the axis in reverse (first heatmap row on top).
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reversed: bool,
}

impl AxisDescriptor {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Axis-type hint for the independent axis of a trend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisType {
    Date,
    Linear,
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisType::Date => f.write_str("date"),
            AxisType::Linear => f.write_str("linear"),
        }
    }
}

/// How a trend series is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[default]
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Lines => "lines",
            DisplayMode::Markers => "markers",
            DisplayMode::LinesMarkers => "lines+markers",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lines" => Ok(DisplayMode::Lines),
            "markers" => Ok(DisplayMode::Markers),
            "lines+markers" => Ok(DisplayMode::LinesMarkers),
            other => Err(format!(
                "'{}' (expected lines, markers, or lines+markers)",
                other
            )),
        }
    }
}
