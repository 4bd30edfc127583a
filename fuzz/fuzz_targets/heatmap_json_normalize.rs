//! Fuzz target for heatmap normalization.
//!
//! Any JSON document is classified and resolved; the result must be either
//! a rectangular matrix or a typed empty outcome, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use plotprep::series::{HeatmapOptions, SeriesDescriptor};

fuzz_target!(|data: &[u8]| {
    // Keyed input expands to keys x keys cells
    if data.len() > 4096 {
        return;
    }

    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let outcome = plotprep::normalize_heatmap_json(&value, &HeatmapOptions::default());

    if let Some(SeriesDescriptor::Heatmap { x, y, z, .. }) = outcome.descriptor().map(|d| &d.series) {
        assert_eq!(z.len(), y.len());
        assert!(z.iter().all(|row| row.len() == x.len()));
    }
});
