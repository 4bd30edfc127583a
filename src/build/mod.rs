//! Series builder: sanitized data + options -> plot-ready descriptor.
//!
//! Each builder applies exactly one piece of inferred logic for its chart
//! kind (bin count passthrough, axis-type inference, reversed heatmap rows).
//! No numeric work such as bucketing or color mapping happens here; that
//! belongs to the plot surface.

use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::TrendPoints;
use crate::series::{
    AxisDescriptor, AxisType, AxisValue, CanonicalMatrix, ChartDescriptor, DistributionOptions,
    HeatmapOptions, LayoutDescriptor, SeriesDescriptor, TrendOptions,
};

/// `YYYY-MM-DD` at the start of a string, ASCII digits only.
static ISO_DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date pattern"));

/// Builds a histogram descriptor. The bin count is passed through as-is.
pub fn build_distribution(values: Vec<f64>, opts: &DistributionOptions) -> ChartDescriptor {
    ChartDescriptor {
        series: SeriesDescriptor::Histogram {
            values,
            bins: opts.bins,
            color: opts.color.clone(),
        },
        layout: LayoutDescriptor {
            title: opts.title.clone(),
            x_axis: AxisDescriptor::titled(&opts.x_label),
            y_axis: AxisDescriptor::titled(&opts.y_label),
            show_legend: false,
        },
    }
}

/// Builds a trend descriptor with an inferred x axis type.
pub fn build_trend(points: TrendPoints, opts: &TrendOptions) -> ChartDescriptor {
    let axis_type = infer_axis_type(&points.x);
    log::debug!("trend: x axis inferred as {:?}", axis_type);

    ChartDescriptor {
        series: SeriesDescriptor::Scatter {
            x: points.x,
            y: points.y,
            mode: opts.mode,
            name: opts.series_name.clone(),
            color: opts.color.clone(),
        },
        layout: LayoutDescriptor {
            title: opts.title.clone(),
            x_axis: AxisDescriptor {
                title: opts.x_label.clone(),
                axis_type: Some(axis_type),
                reversed: false,
            },
            y_axis: AxisDescriptor::titled(&opts.y_label),
            show_legend: opts.show_legend,
        },
    }
}

/// Builds a heatmap descriptor. Rows are drawn top-down (reversed y axis).
pub fn build_heatmap(matrix: CanonicalMatrix, opts: &HeatmapOptions) -> ChartDescriptor {
    let (rows, cols, cells) = matrix.into_parts();

    ChartDescriptor {
        series: SeriesDescriptor::Heatmap {
            x: cols,
            y: rows,
            z: cells,
            colorscale: opts.colorscale.clone(),
            show_scale: true,
        },
        layout: LayoutDescriptor {
            title: opts.title.clone(),
            x_axis: AxisDescriptor::titled(&opts.x_label),
            y_axis: AxisDescriptor {
                title: opts.y_label.clone(),
                axis_type: None,
                reversed: true,
            },
            show_legend: false,
        },
    }
}

/// `Date` only if every value is a string starting with `YYYY-MM-DD`.
///
/// A single number or non-conforming string makes the whole axis linear.
pub fn infer_axis_type(x: &[AxisValue]) -> AxisType {
    let all_dates = x
        .iter()
        .all(|v| v.as_text().is_some_and(|s| ISO_DATE_PREFIX.is_match(s)));
    if all_dates {
        AxisType::Date
    } else {
        AxisType::Linear
    }
}
