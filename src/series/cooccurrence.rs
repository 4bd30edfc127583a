//! The two accepted co-occurrence representations.
//!
//! Heatmap input arrives either keyed (`row -> column -> count`) or as a
//! dense 2D matrix. [`CooccurrenceInput`] makes the choice explicit; use
//! [`crate::resolve::classify`] to obtain one from untyped JSON.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Co-occurrence input, after the representation has been decided.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", content = "data", rename_all = "kebab-case")]
pub enum CooccurrenceInput {
    SparseKeyed(SparseKeyed),
    DenseMatrix(DenseMatrix),
    /// Neither representation; carries a short description of what was seen.
    Unsupported(String),
}

impl CooccurrenceInput {
    /// Name of the representation, as printed by the CLI.
    pub fn shape_name(&self) -> &'static str {
        match self {
            CooccurrenceInput::SparseKeyed(_) => "sparse-keyed",
            CooccurrenceInput::DenseMatrix(_) => "dense-matrix",
            CooccurrenceInput::Unsupported(_) => "unsupported",
        }
    }
}

/// Keyed counts: row key -> column key -> count, in insertion order.
///
/// Only finite counts are stored. Anything else is treated as absent and
/// resolves to zero like any other missing cell.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SparseKeyed {
    rows: IndexMap<String, IndexMap<String, f64>>,
}

impl SparseKeyed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a row. Non-finite counts are dropped.
    pub fn insert_row<K, I>(&mut self, key: impl Into<String>, cells: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let cells = cells
            .into_iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(k, v)| (k.into(), v))
            .collect();
        self.rows.insert(key.into(), cells);
    }

    /// Builder-style variant of [`SparseKeyed::insert_row`].
    pub fn with_row<K, I>(mut self, key: impl Into<String>, cells: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        self.insert_row(key, cells);
        self
    }

    /// Row keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    /// Distinct column keys across all rows, in first-seen order.
    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.rows
            .values()
            .flat_map(|cells| cells.keys())
            .map(String::as_str)
            .collect::<IndexSet<&str>>()
            .into_iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a cell; `None` if the row or the column is absent.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        self.rows.get(row)?.get(col).copied()
    }
}

/// A dense matrix of counts, one inner vector per row.
///
/// Rows may have different lengths here; the resolver makes the matrix
/// rectangular. Non-finite cells are replaced by zero on construction and
/// counted in [`DenseMatrix::coerced_cells`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DenseMatrix {
    rows: Vec<Vec<f64>>,
    #[serde(skip)]
    coerced_cells: usize,
}

impl DenseMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        let mut coerced_cells = 0;
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|v| {
                        if v.is_finite() {
                            v
                        } else {
                            coerced_cells += 1;
                            0.0
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            rows,
            coerced_cells,
        }
    }

    /// Builds a matrix from cells that may be missing or non-numeric.
    pub fn from_optional(rows: Vec<Vec<Option<f64>>>) -> Self {
        let missing: usize = rows
            .iter()
            .map(|row| row.iter().filter(|c| c.is_none()).count())
            .sum();
        let mut matrix = Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(|c| c.unwrap_or(0.0)).collect())
                .collect(),
        );
        matrix.coerced_cells += missing;
        matrix
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of cells that were not finite numbers and became zero.
    pub fn coerced_cells(&self) -> usize {
        self.coerced_cells
    }
}
