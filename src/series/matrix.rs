//! The canonical, rectangular co-occurrence matrix.

use serde::Serialize;

/// Resolved heatmap data: row labels, column labels, and a `rows × cols`
/// matrix of finite values.
///
/// The shape invariant (`cells.len() == rows.len()` and every row has
/// `cols.len()` entries) is checked on construction, so a value of this type
/// can be handed to the series builder as-is.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CanonicalMatrix {
    rows: Vec<String>,
    cols: Vec<String>,
    cells: Vec<Vec<f64>>,
}

impl CanonicalMatrix {
    /// Builds a matrix, returning `None` if the shape does not match the labels.
    pub fn new(rows: Vec<String>, cols: Vec<String>, cells: Vec<Vec<f64>>) -> Option<Self> {
        let rectangular =
            cells.len() == rows.len() && cells.iter().all(|row| row.len() == cols.len());
        rectangular.then_some(Self { rows, cols, cells })
    }

    /// Row labels, top to bottom.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Column labels, left to right.
    pub fn cols(&self) -> &[String] {
        &self.cols
    }

    /// Matrix cells, one inner vector per row.
    pub fn cells(&self) -> &[Vec<f64>] {
        &self.cells
    }

    /// True when there is nothing to draw (no rows or no columns).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Splits the matrix into `(rows, cols, cells)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Vec<Vec<f64>>) {
        (self.rows, self.cols, self.cells)
    }
}
