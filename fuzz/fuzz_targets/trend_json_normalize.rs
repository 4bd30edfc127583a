//! Fuzz target for trend normalization.
//!
//! Checks that x and y always come out with equal length.

#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use plotprep::series::{io_json, SeriesDescriptor, TrendOptions};

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Ok((x, y)) = io_json::trend_series(&value, Path::new("fuzz")) else {
        return;
    };
    let outcome = plotprep::normalize_trend(x.as_deref(), y.as_deref(), &TrendOptions::default());

    if let Some(SeriesDescriptor::Scatter { x, y, .. }) = outcome.descriptor().map(|d| &d.series) {
        assert_eq!(x.len(), y.len());
    }
});
