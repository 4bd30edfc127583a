//! Data model shared by the three normalization pipelines.
//!
//! Everything here is transient: values are rebuilt on every call and
//! nothing is cached between renders.
//!
//! # Design Principles
//!
//! 1. **Explicit raw input**: loosely typed entries (null, NaN, strings) are
//!    classified through [`AsSample`] / [`AsAxisValue`] instead of being
//!    coerced implicitly.
//!
//! 2. **Checked shapes**: [`CanonicalMatrix`] cannot be built with ragged
//!    rows or label counts that disagree with the cells.
//!
//! 3. **No partial output**: a pipeline yields a full [`ChartDescriptor`] or
//!    an [`EmptyResult`], see [`Normalized`].
//!
//! # Example
//!
//! ```
//! use plotprep::series::{DistributionOptions, Normalized};
//!
//! let samples = [1.0, f64::NAN, 3.0];
//! let outcome = plotprep::normalize_distribution(Some(&samples[..]), &DistributionOptions::default());
//! assert!(matches!(outcome, Normalized::Ready(_)));
//! ```

mod cooccurrence;
mod descriptor;
pub mod io_json;
mod matrix;
mod options;
mod raw;

// Re-export core types for convenient access
pub use cooccurrence::{CooccurrenceInput, DenseMatrix, SparseKeyed};
pub use descriptor::{
    AxisDescriptor, AxisType, ChartDescriptor, DisplayMode, EmptyReason, EmptyResult,
    LayoutDescriptor, Normalized, SeriesDescriptor,
};
pub use matrix::CanonicalMatrix;
pub use options::{DistributionOptions, HeatmapOptions, TrendOptions, DEFAULT_BINS, DEFAULT_COLOR};
pub use raw::{AsAxisValue, AsSample, AxisValue, RawSample};
