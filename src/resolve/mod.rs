//! Heatmap shape resolution.
//!
//! Co-occurrence data is accepted in two representations. This module
//! decides which one was supplied ([`classify`]) and turns either into a
//! [`CanonicalMatrix`] ([`resolve_matrix`]).
//!
//! Detection order matters and mirrors what upstream producers rely on:
//! 1. an object whose first value is not an array is keyed input
//! 2. an array whose first element is an array is a dense matrix
//! 3. anything else is unsupported
//!
//! Missing keyed cells become zero, and dense matrices are made
//! rectangular. Both are fill policies, not errors.

use serde_json::{Map, Value};

use crate::sanitize::{SanitizeCounts, SanitizeIssue, SanitizeIssueCode, SanitizeReport};
use crate::series::io_json::json_type_name;
use crate::series::{CanonicalMatrix, CooccurrenceInput, DenseMatrix, EmptyReason, SparseKeyed};

/// Classifies untyped JSON into one of the accepted representations.
///
/// This is total: every value maps to exactly one variant. `null` is
/// classified as unsupported here; callers that treat it as an absent input
/// should check for it first (see [`crate::normalize_heatmap_json`]).
pub fn classify(value: &Value) -> CooccurrenceInput {
    match value {
        Value::Object(map) if !map.values().next().is_some_and(Value::is_array) => {
            CooccurrenceInput::SparseKeyed(sparse_from_json(map))
        }
        Value::Array(items) if items.first().is_some_and(Value::is_array) => {
            CooccurrenceInput::DenseMatrix(dense_from_json(items))
        }
        Value::Object(_) => {
            CooccurrenceInput::Unsupported("an object of arrays".to_string())
        }
        Value::Array(items) if items.is_empty() => {
            CooccurrenceInput::Unsupported("an empty array".to_string())
        }
        Value::Array(_) => CooccurrenceInput::Unsupported("a flat array".to_string()),
        other => CooccurrenceInput::Unsupported(json_type_name(other).to_string()),
    }
}

fn sparse_from_json(map: &Map<String, Value>) -> SparseKeyed {
    let mut sparse = SparseKeyed::new();
    for (row_key, row) in map {
        // Non-object rows have no readable cells; every lookup falls back to zero
        let cells: Vec<(String, f64)> = match row {
            Value::Object(cells) => cells
                .iter()
                .filter_map(|(col_key, v)| v.as_f64().map(|n| (col_key.clone(), n)))
                .collect(),
            _ => Vec::new(),
        };
        sparse.insert_row(row_key.clone(), cells);
    }
    sparse
}

fn dense_from_json(items: &[Value]) -> DenseMatrix {
    let rows: Vec<Vec<Option<f64>>> = items
        .iter()
        .map(|row| match row {
            Value::Array(cells) => cells.iter().map(Value::as_f64).collect(),
            _ => Vec::new(),
        })
        .collect();
    DenseMatrix::from_optional(rows)
}

/// Resolves classified input into a canonical matrix.
///
/// `x_labels` / `y_labels` are caller overrides for the column and row
/// labels; when present they are used verbatim.
pub fn resolve_matrix(
    input: &CooccurrenceInput,
    x_labels: Option<&[String]>,
    y_labels: Option<&[String]>,
    report: &mut SanitizeReport,
) -> Result<CanonicalMatrix, EmptyReason> {
    if x_labels.is_some() || y_labels.is_some() {
        report.add(SanitizeIssue::info(
            SanitizeIssueCode::LabelOverrideApplied,
            "caller-supplied labels used instead of inferred ones",
        ));
    }

    let matrix = match input {
        CooccurrenceInput::SparseKeyed(sparse) => {
            log::debug!("heatmap: keyed input with {} row key(s)", sparse.len());
            resolve_sparse(sparse, x_labels, y_labels, report)?
        }
        CooccurrenceInput::DenseMatrix(dense) => {
            log::debug!("heatmap: dense input with {} row(s)", dense.rows().len());
            resolve_dense(dense, x_labels, y_labels, report)?
        }
        CooccurrenceInput::Unsupported(seen) => {
            log::debug!("heatmap: unsupported input ({})", seen);
            return Err(EmptyReason::UnsupportedFormat);
        }
    };

    report.output = SanitizeCounts::matrix(matrix.rows().len(), matrix.cols().len());
    if matrix.is_empty() {
        return Err(EmptyReason::NoData);
    }
    Ok(matrix)
}

fn resolve_sparse(
    sparse: &SparseKeyed,
    x_labels: Option<&[String]>,
    y_labels: Option<&[String]>,
    report: &mut SanitizeReport,
) -> Result<CanonicalMatrix, EmptyReason> {
    if sparse.is_empty() {
        return Err(EmptyReason::NoData);
    }
    report.input = SanitizeCounts::matrix(sparse.len(), sparse.column_keys().count());

    let keys: Vec<String> = sparse.keys().map(str::to_string).collect();
    let cols = x_labels.map_or_else(|| keys.clone(), <[String]>::to_vec);
    let rows = y_labels.map_or(keys, <[String]>::to_vec);

    let mut filled = 0usize;
    let cells: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| {
            cols.iter()
                .map(|col| {
                    sparse.get(row, col).unwrap_or_else(|| {
                        filled += 1;
                        0.0
                    })
                })
                .collect()
        })
        .collect();

    if filled > 0 {
        report.add(SanitizeIssue::info(
            SanitizeIssueCode::ZeroFilledCell,
            format!("{} missing cell(s) filled with 0", filled),
        ));
    }

    CanonicalMatrix::new(rows, cols, cells).ok_or(EmptyReason::NoData)
}

fn resolve_dense(
    dense: &DenseMatrix,
    x_labels: Option<&[String]>,
    y_labels: Option<&[String]>,
    report: &mut SanitizeReport,
) -> Result<CanonicalMatrix, EmptyReason> {
    let raw = dense.rows();
    let first_width = match raw.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Err(EmptyReason::NoData),
    };
    report.input = SanitizeCounts::matrix(raw.len(), first_width);

    if dense.coerced_cells() > 0 {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::NonNumericCellZeroed,
            format!(
                "{} non-numeric or non-finite cell(s) replaced with 0",
                dense.coerced_cells()
            ),
        ));
    }

    let cols = x_labels.map_or_else(|| ordinal_labels("Col", first_width), <[String]>::to_vec);
    let rows = y_labels.map_or_else(|| ordinal_labels("Row", raw.len()), <[String]>::to_vec);

    let cells = rectangularize(raw, rows.len(), cols.len(), report);
    CanonicalMatrix::new(rows, cols, cells).ok_or(EmptyReason::NoData)
}

/// `"Row 1"`, `"Row 2"`, ... (1-indexed).
fn ordinal_labels(prefix: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{} {}", prefix, i)).collect()
}

/// Pads or truncates `raw` to exactly `rows × cols`, recording each repair.
fn rectangularize(
    raw: &[Vec<f64>],
    rows: usize,
    cols: usize,
    report: &mut SanitizeReport,
) -> Vec<Vec<f64>> {
    let mut padded = 0usize;
    let mut truncated = 0usize;

    let mut cells: Vec<Vec<f64>> = raw
        .iter()
        .take(rows)
        .map(|row| {
            let mut row = row.clone();
            if row.len() < cols {
                padded += 1;
                row.resize(cols, 0.0);
            } else if row.len() > cols {
                truncated += 1;
                row.truncate(cols);
            }
            row
        })
        .collect();

    if padded > 0 {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::RaggedRowPadded,
            format!("{} short row(s) padded with 0 to {} column(s)", padded, cols),
        ));
    }
    if truncated > 0 {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::RaggedRowTruncated,
            format!("{} long row(s) truncated to {} column(s)", truncated, cols),
        ));
    }
    if raw.len() > rows {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::MatrixRowsDropped,
            format!("{} row(s) beyond the row labels dropped", raw.len() - rows),
        ));
    }
    if cells.len() < rows {
        report.add(SanitizeIssue::warning(
            SanitizeIssueCode::MatrixRowsPadded,
            format!("{} zero row(s) added to match the row labels", rows - cells.len()),
        ));
        cells.resize(rows, vec![0.0; cols]);
    }

    cells
}
