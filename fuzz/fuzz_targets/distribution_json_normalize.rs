//! Fuzz target for distribution normalization.
//!
//! Feeds arbitrary JSON arrays through the sample filter and checks that
//! every surviving value is finite.

#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use plotprep::series::{io_json, DistributionOptions, SeriesDescriptor};

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 * 1024 {
        return;
    }

    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let Ok(samples) = io_json::distribution_samples(&value, Path::new("fuzz")) else {
        return;
    };
    let outcome = plotprep::normalize_distribution(samples.as_deref(), &DistributionOptions::default());

    if let Some(SeriesDescriptor::Histogram { values, .. }) = outcome.descriptor().map(|d| &d.series) {
        assert!(values.iter().all(|v| v.is_finite()));
    }
});
