//! Raw input values as they arrive from callers.
//!
//! Chart input is routinely messy: gaps show up as `null`, upstream
//! computations leak `NaN` or infinities, and JSON payloads mix numbers with
//! strings. These traits give every accepted element type a single, total
//! conversion into the values the pipelines work with, so sanitization never
//! has to guess at runtime what it was handed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single raw sample for the distribution and trend pipelines.
///
/// This is the explicit form of "number, null, or something else" that
/// loosely typed producers emit.
#[derive(Clone, Debug, PartialEq)]
pub enum RawSample {
    /// A null/undefined entry.
    Missing,
    /// A numeric entry (possibly NaN or infinite).
    Number(f64),
    /// An entry that is present but not numeric (e.g. a string).
    NonNumeric,
}

impl From<f64> for RawSample {
    fn from(v: f64) -> Self {
        RawSample::Number(v)
    }
}

impl From<Option<f64>> for RawSample {
    fn from(v: Option<f64>) -> Self {
        v.map_or(RawSample::Missing, RawSample::Number)
    }
}

impl From<&Value> for RawSample {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => RawSample::Missing,
            // serde_json numbers are always finite, but an arbitrary-precision
            // number could fail conversion
            Value::Number(n) => n.as_f64().map_or(RawSample::NonNumeric, RawSample::Number),
            _ => RawSample::NonNumeric,
        }
    }
}

/// Conversion of one raw entry into a sample.
pub trait AsSample {
    /// Classifies this entry.
    fn raw_sample(&self) -> RawSample;

    /// Returns the value if it is a finite number, `None` otherwise.
    fn finite_value(&self) -> Option<f64> {
        match self.raw_sample() {
            RawSample::Number(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }
}

impl AsSample for RawSample {
    fn raw_sample(&self) -> RawSample {
        self.clone()
    }
}

impl AsSample for f64 {
    fn raw_sample(&self) -> RawSample {
        RawSample::Number(*self)
    }
}

impl AsSample for f32 {
    fn raw_sample(&self) -> RawSample {
        RawSample::Number(f64::from(*self))
    }
}

impl AsSample for i64 {
    fn raw_sample(&self) -> RawSample {
        RawSample::Number(*self as f64)
    }
}

impl AsSample for Option<f64> {
    fn raw_sample(&self) -> RawSample {
        RawSample::from(*self)
    }
}

impl AsSample for Value {
    fn raw_sample(&self) -> RawSample {
        RawSample::from(self)
    }
}

/// A value on the independent (x) axis of a trend series.
///
/// Either a plain number or a label such as an ISO date string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Text(String),
}

impl AxisValue {
    /// Returns the text, if this is a textual value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AxisValue::Text(s) => Some(s),
            AxisValue::Number(_) => None,
        }
    }
}

impl From<f64> for AxisValue {
    fn from(v: f64) -> Self {
        AxisValue::Number(v)
    }
}

impl From<&str> for AxisValue {
    fn from(s: &str) -> Self {
        AxisValue::Text(s.to_string())
    }
}

impl From<String> for AxisValue {
    fn from(s: String) -> Self {
        AxisValue::Text(s)
    }
}

/// Conversion of one raw entry into an x-axis value.
///
/// Returns `None` for entries that cannot be placed on an axis at all
/// (null, non-finite numbers, nested structures).
pub trait AsAxisValue {
    fn axis_value(&self) -> Option<AxisValue>;
}

impl AsAxisValue for AxisValue {
    fn axis_value(&self) -> Option<AxisValue> {
        match self {
            AxisValue::Number(v) if !v.is_finite() => None,
            other => Some(other.clone()),
        }
    }
}

impl AsAxisValue for f64 {
    fn axis_value(&self) -> Option<AxisValue> {
        self.is_finite().then_some(AxisValue::Number(*self))
    }
}

impl AsAxisValue for i64 {
    fn axis_value(&self) -> Option<AxisValue> {
        Some(AxisValue::Number(*self as f64))
    }
}

impl AsAxisValue for &str {
    fn axis_value(&self) -> Option<AxisValue> {
        Some(AxisValue::Text((*self).to_string()))
    }
}

impl AsAxisValue for String {
    fn axis_value(&self) -> Option<AxisValue> {
        Some(AxisValue::Text(self.clone()))
    }
}

impl AsAxisValue for Value {
    fn axis_value(&self) -> Option<AxisValue> {
        match self {
            Value::Number(n) => n.as_f64().and_then(|v| v.axis_value()),
            Value::String(s) => Some(AxisValue::Text(s.clone())),
            _ => None,
        }
    }
}
