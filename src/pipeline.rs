//! The three normalization pipelines.
//!
//! raw input -> sanitize -> (resolve, heatmap only) -> build -> descriptor
//!
//! Each pipeline is a pure function of its arguments: calling it twice with
//! the same input yields equal output, and nothing carries over between
//! calls. The `*_with_report` variants additionally return a
//! [`SanitizeReport`] describing what was dropped or filled; the descriptor
//! is identical either way.

use serde_json::Value;

use crate::build::{build_distribution, build_heatmap, build_trend};
use crate::resolve::{classify, resolve_matrix};
use crate::sanitize::{sanitize_pairs, sanitize_samples, SanitizeReport};
use crate::series::{
    AsAxisValue, AsSample, CooccurrenceInput, DistributionOptions, EmptyReason, HeatmapOptions,
    Normalized, TrendOptions,
};

/// Normalizes histogram input.
///
/// Null, non-numeric, NaN and infinite samples are dropped; the remaining
/// values keep their order.
pub fn normalize_distribution<S: AsSample>(
    data: Option<&[S]>,
    opts: &DistributionOptions,
) -> Normalized {
    normalize_distribution_with_report(data, opts).0
}

/// [`normalize_distribution`] plus a report of what was dropped.
pub fn normalize_distribution_with_report<S: AsSample>(
    data: Option<&[S]>,
    opts: &DistributionOptions,
) -> (Normalized, SanitizeReport) {
    let mut report = SanitizeReport::new("distribution");
    let outcome = match sanitize_samples(data, &mut report) {
        Ok(values) => Normalized::Ready(build_distribution(values, opts)),
        Err(reason) => Normalized::empty(reason),
    };
    (outcome, report)
}

/// Normalizes trend input.
///
/// Mismatched lengths are silently truncated to the shorter side.
pub fn normalize_trend<X: AsAxisValue, Y: AsSample>(
    x: Option<&[X]>,
    y: Option<&[Y]>,
    opts: &TrendOptions,
) -> Normalized {
    normalize_trend_with_report(x, y, opts).0
}

/// [`normalize_trend`] plus a report of truncation and dropped pairs.
pub fn normalize_trend_with_report<X: AsAxisValue, Y: AsSample>(
    x: Option<&[X]>,
    y: Option<&[Y]>,
    opts: &TrendOptions,
) -> (Normalized, SanitizeReport) {
    let mut report = SanitizeReport::new("trend");
    let outcome = match sanitize_pairs(x, y, &mut report) {
        Ok(points) => Normalized::Ready(build_trend(points, opts)),
        Err(reason) => Normalized::empty(reason),
    };
    (outcome, report)
}

/// Normalizes co-occurrence input whose representation is already known.
pub fn normalize_heatmap(data: Option<&CooccurrenceInput>, opts: &HeatmapOptions) -> Normalized {
    normalize_heatmap_with_report(data, opts).0
}

/// [`normalize_heatmap`] plus a report of filled and repaired cells.
pub fn normalize_heatmap_with_report(
    data: Option<&CooccurrenceInput>,
    opts: &HeatmapOptions,
) -> (Normalized, SanitizeReport) {
    let mut report = SanitizeReport::new("heatmap");
    let Some(input) = data else {
        return (Normalized::empty(EmptyReason::NoData), report);
    };

    let resolved = resolve_matrix(
        input,
        opts.x_labels.as_deref(),
        opts.y_labels.as_deref(),
        &mut report,
    );
    let outcome = match resolved {
        Ok(matrix) => Normalized::Ready(build_heatmap(matrix, opts)),
        Err(reason) => Normalized::empty(reason),
    };
    (outcome, report)
}

/// Normalizes untyped JSON co-occurrence input.
///
/// `null` is an absent input; anything else goes through [`classify`].
pub fn normalize_heatmap_json(data: &Value, opts: &HeatmapOptions) -> Normalized {
    normalize_heatmap_json_with_report(data, opts).0
}

/// [`normalize_heatmap_json`] plus a report.
pub fn normalize_heatmap_json_with_report(
    data: &Value,
    opts: &HeatmapOptions,
) -> (Normalized, SanitizeReport) {
    if data.is_null() {
        return normalize_heatmap_with_report(None, opts);
    }
    let input = classify(data);
    log::debug!("heatmap: classified input as {}", input.shape_name());
    normalize_heatmap_with_report(Some(&input), opts)
}
