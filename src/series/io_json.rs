//! JSON reading and writing at the edges of the pipelines.
//!
//! Input files hold raw chart data as produced by an upstream service;
//! options files hold presentation options (JSON or YAML); outputs are
//! normalized outcomes written as pretty JSON.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::descriptor::Normalized;
use crate::error::PlotprepError;

/// Reads a JSON document from a file, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn read_json_value(path: &Path) -> Result<Value, PlotprepError> {
    let parse = |source| PlotprepError::InputJsonParse {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return serde_json::from_str(&text).map_err(parse);
    }

    let file = File::open(path).map_err(PlotprepError::Io)?;
    serde_json::from_reader(BufReader::new(file)).map_err(parse)
}

/// Extracts the sample array for the distribution chart.
///
/// Accepts a bare array or an object with a `data` key. `null` or `{}`
/// means the input is absent; an object with other keys but no `data` is
/// rejected.
pub fn distribution_samples(value: &Value, path: &Path) -> Result<Option<Vec<Value>>, PlotprepError> {
    match value {
        Value::Object(map) => match map.get("data") {
            Some(inner) => optional_array(inner, "data", path),
            None if map.is_empty() => Ok(None),
            None => Err(PlotprepError::InvalidInput {
                path: path.to_path_buf(),
                message: format!(
                    "expected a 'data' key, found {}",
                    map.keys()
                        .map(|k| format!("'{}'", k))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            }),
        },
        other => optional_array(other, "data", path),
    }
}

/// Extracts the `x` and `y` arrays for the trend chart.
///
/// A missing or `null` key means that side is absent.
pub fn trend_series(
    value: &Value,
    path: &Path,
) -> Result<(Option<Vec<Value>>, Option<Vec<Value>>), PlotprepError> {
    match value {
        Value::Null => Ok((None, None)),
        Value::Object(map) => {
            let x = map
                .get("x")
                .map(|v| optional_array(v, "x", path))
                .transpose()?
                .flatten();
            let y = map
                .get("y")
                .map(|v| optional_array(v, "y", path))
                .transpose()?
                .flatten();
            Ok((x, y))
        }
        _ => Err(PlotprepError::InvalidInput {
            path: path.to_path_buf(),
            message: "expected an object with 'x' and 'y' arrays".to_string(),
        }),
    }
}

fn optional_array(value: &Value, field: &str, path: &Path) -> Result<Option<Vec<Value>>, PlotprepError> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(items.clone())),
        other => Err(PlotprepError::InvalidInput {
            path: path.to_path_buf(),
            message: format!("'{}' must be an array, found {}", field, json_type_name(other)),
        }),
    }
}

/// Short name of a JSON value's type, for messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Loads chart options from a JSON or YAML file (chosen by extension).
///
/// Fields missing from the file keep their defaults.
pub fn read_options<T: DeserializeOwned>(path: &Path) -> Result<T, PlotprepError> {
    let text = std::fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let options_error = |message: String| PlotprepError::OptionsParse {
        path: path.to_path_buf(),
        message,
    };

    match ext.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|e| options_error(e.to_string())),
        _ => serde_json::from_str(&text).map_err(|e| options_error(e.to_string())),
    }
}

/// Writes a normalized outcome to a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_outcome_json(path: &Path, outcome: &Normalized) -> Result<(), PlotprepError> {
    let file = File::create(path).map_err(PlotprepError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, outcome).map_err(|source| PlotprepError::DescriptorWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Serializes an outcome to a pretty JSON string.
pub fn to_json_string(outcome: &Normalized) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

/// Parses an outcome previously written by [`to_json_string`].
pub fn from_json_str(json: &str) -> Result<Normalized, serde_json::Error> {
    serde_json::from_str(json)
}
