//! Input sanitization for the distribution and trend pipelines.
//!
//! This module rejects or cleans raw input before any chart-specific logic
//! runs:
//! - Distribution samples lose null, non-numeric, NaN and infinite entries
//! - Trend series are truncated to the shorter side, then unusable pairs go
//!
//! Every function returns `Err(EmptyReason)` when nothing plottable remains;
//! that is an expected outcome, not a fault.

mod report;

pub use report::{
    SanitizeCounts, SanitizeIssue, SanitizeIssueCode, SanitizeReport, SanitizeSeverity,
};

use crate::series::{AsAxisValue, AsSample, AxisValue, EmptyReason, RawSample};

/// Sanitized trend points, x and y of equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendPoints {
    pub x: Vec<AxisValue>,
    pub y: Vec<f64>,
}

impl TrendPoints {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Filters distribution samples down to finite numbers, preserving order.
///
/// Absent or empty input yields `NoData`; input where every entry is
/// filtered out yields `NoValidData`.
pub fn sanitize_samples<S: AsSample>(
    data: Option<&[S]>,
    report: &mut SanitizeReport,
) -> Result<Vec<f64>, EmptyReason> {
    let data = match data {
        Some(d) if !d.is_empty() => d,
        _ => return Err(EmptyReason::NoData),
    };
    report.input = SanitizeCounts::points(data.len());

    let mut missing = 0usize;
    let mut non_numeric = 0usize;
    let mut non_finite = 0usize;
    let mut values = Vec::with_capacity(data.len());

    for sample in data {
        match sample.raw_sample() {
            RawSample::Number(v) if v.is_finite() => values.push(v),
            RawSample::Number(_) => non_finite += 1,
            RawSample::Missing => missing += 1,
            RawSample::NonNumeric => non_numeric += 1,
        }
    }

    if missing > 0 {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::DroppedMissing,
            format!("{} null sample(s) dropped", missing),
        ));
    }
    if non_numeric > 0 {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::DroppedNonNumeric,
            format!("{} non-numeric sample(s) dropped", non_numeric),
        ));
    }
    if non_finite > 0 {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::DroppedNonFinite,
            format!("{} NaN/infinite sample(s) dropped", non_finite),
        ));
    }

    log::debug!(
        "distribution: kept {} of {} sample(s)",
        values.len(),
        data.len()
    );
    report.output = SanitizeCounts::points(values.len());

    if values.is_empty() {
        return Err(EmptyReason::NoValidData);
    }
    Ok(values)
}

/// Aligns the two sides of a trend series.
///
/// Both sides are truncated to the shorter length without complaint (the
/// longer tail is discarded). Pairs whose y is not a finite number, or whose
/// x cannot sit on an axis, are then dropped so that x and y stay aligned.
pub fn sanitize_pairs<X: AsAxisValue, Y: AsSample>(
    x: Option<&[X]>,
    y: Option<&[Y]>,
    report: &mut SanitizeReport,
) -> Result<TrendPoints, EmptyReason> {
    let (x, y) = match (x, y) {
        (Some(x), Some(y)) if !x.is_empty() && !y.is_empty() => (x, y),
        _ => return Err(EmptyReason::NoData),
    };
    report.input = SanitizeCounts::points(x.len().max(y.len()));

    let len = x.len().min(y.len());
    if x.len() > len {
        report.add(SanitizeIssue::info(
            SanitizeIssueCode::TruncatedX,
            format!("{} trailing x value(s) discarded", x.len() - len),
        ));
    }
    if y.len() > len {
        report.add(SanitizeIssue::info(
            SanitizeIssueCode::TruncatedY,
            format!("{} trailing y value(s) discarded", y.len() - len),
        ));
    }

    let mut points = TrendPoints {
        x: Vec::with_capacity(len),
        y: Vec::with_capacity(len),
    };
    let mut dropped = 0usize;
    for (xv, yv) in x[..len].iter().zip(&y[..len]) {
        match (xv.axis_value(), yv.finite_value()) {
            (Some(xv), Some(yv)) => {
                points.x.push(xv);
                points.y.push(yv);
            }
            _ => dropped += 1,
        }
    }

    if dropped > 0 {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::DroppedInvalidPair,
            format!("{} pair(s) with a missing or non-finite value dropped", dropped),
        ));
    }

    log::debug!(
        "trend: x={} y={} truncated to {}, kept {} pair(s)",
        x.len(),
        y.len(),
        len,
        points.len()
    );
    report.output = SanitizeCounts::points(points.len());

    if points.is_empty() {
        return Err(EmptyReason::NoValidData);
    }
    Ok(points)
}
