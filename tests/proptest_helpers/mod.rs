#![allow(dead_code)]

use plotprep::series::{AxisValue, Normalized, SeriesDescriptor};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use serde_json::{Map, Value};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Finite values small enough to survive a JSON round trip unchanged.
pub fn arb_finite() -> BoxedStrategy<f64> {
    (-1.0e6f64..1.0e6).boxed()
}

/// A sample that may be missing, non-finite or fine.
pub fn arb_sample() -> BoxedStrategy<Option<f64>> {
    prop_oneof![
        6 => arb_finite().prop_map(Some),
        1 => Just(None),
        1 => Just(Some(f64::NAN)),
        1 => Just(Some(f64::INFINITY)),
        1 => Just(Some(f64::NEG_INFINITY)),
    ]
    .boxed()
}

/// `YYYY-MM-DD`, optionally followed by a time part.
pub fn arb_iso_date() -> BoxedStrategy<String> {
    (1900u32..2100, 1u32..=12, 1u32..=28, any::<bool>())
        .prop_map(|(y, m, d, with_time)| {
            if with_time {
                format!("{:04}-{:02}-{:02}T12:00:00Z", y, m, d)
            } else {
                format!("{:04}-{:02}-{:02}", y, m, d)
            }
        })
        .boxed()
}

/// Strings that never start with a `YYYY-MM-DD` prefix.
pub fn arb_non_date_text() -> BoxedStrategy<String> {
    "[a-z][a-z0-9 ]{0,8}".boxed()
}

/// A rectangular, non-empty matrix of finite values.
pub fn arb_dense(max_rows: usize, max_cols: usize) -> BoxedStrategy<Vec<Vec<f64>>> {
    (1..=max_rows, 1..=max_cols)
        .prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::collection::vec(arb_finite(), cols), rows)
        })
        .boxed()
}

/// A keyed co-occurrence object over keys `k0..kN`, with some cells missing.
pub fn arb_sparse_json(max_keys: usize) -> BoxedStrategy<Value> {
    (1..=max_keys)
        .prop_flat_map(|n| {
            prop::collection::vec(prop::collection::vec(prop::option::of(arb_finite()), n), n)
        })
        .prop_map(|grid| {
            let mut root = Map::new();
            for (r, row) in grid.iter().enumerate() {
                let mut cells = Map::new();
                for (c, cell) in row.iter().enumerate() {
                    if let Some(v) = cell {
                        cells.insert(format!("k{}", c), Value::from(*v));
                    }
                }
                root.insert(format!("k{}", r), Value::Object(cells));
            }
            Value::Object(root)
        })
        .boxed()
}

pub fn histogram_values(outcome: &Normalized) -> Option<&Vec<f64>> {
    match outcome.descriptor().map(|d| &d.series) {
        Some(SeriesDescriptor::Histogram { values, .. }) => Some(values),
        _ => None,
    }
}

pub fn scatter_points(outcome: &Normalized) -> Option<(&Vec<AxisValue>, &Vec<f64>)> {
    match outcome.descriptor().map(|d| &d.series) {
        Some(SeriesDescriptor::Scatter { x, y, .. }) => Some((x, y)),
        _ => None,
    }
}

pub type HeatmapParts<'a> = (&'a Vec<String>, &'a Vec<String>, &'a Vec<Vec<f64>>);

/// `(x labels, y labels, z)` of a heatmap outcome.
pub fn heatmap_parts(outcome: &Normalized) -> Option<HeatmapParts<'_>> {
    match outcome.descriptor().map(|d| &d.series) {
        Some(SeriesDescriptor::Heatmap { x, y, z, .. }) => Some((x, y, z)),
        _ => None,
    }
}
