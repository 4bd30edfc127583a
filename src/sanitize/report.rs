//! Sanitize report types for tracking what normalization changed.
//!
//! Normalization is deliberately permissive: it drops unusable samples,
//! truncates mismatched series, and zero-fills missing cells without
//! complaint. This report makes those decisions visible on request without
//! changing the descriptor that is produced.

use serde::Serialize;
use std::fmt;

/// A report generated while normalizing one chart input.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SanitizeReport {
    /// Chart kind ("distribution", "trend", "heatmap").
    pub chart: String,
    /// What was received.
    pub input: SanitizeCounts,
    /// What reached the descriptor.
    pub output: SanitizeCounts,
    /// Issues discovered during normalization.
    pub issues: Vec<SanitizeIssue>,
}

impl SanitizeReport {
    /// Create a new empty report for a chart kind.
    pub fn new(chart: impl Into<String>) -> Self {
        Self {
            chart: chart.into(),
            ..Default::default()
        }
    }

    /// Add an issue to the report.
    pub fn add(&mut self, issue: SanitizeIssue) {
        self.issues.push(issue);
    }

    /// Count of warning-level issues (data dropped or altered).
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == SanitizeSeverity::Warning)
            .count()
    }

    /// Count of info-level issues (policy notes).
    pub fn info_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == SanitizeSeverity::Info)
            .count()
    }

    /// Returns true if any input data was dropped or altered.
    pub fn is_lossy(&self) -> bool {
        self.warning_count() > 0
    }

    /// Returns true if an issue with this code was recorded.
    pub fn has(&self, code: SanitizeIssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }
}

impl fmt::Display for SanitizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.chart, self.input)?;

        // Show output counts if they differ from input
        if self.output != self.input {
            writeln!(f, "  output: {}", self.output)?;
        }

        let warnings = self.warning_count();
        if warnings > 0 {
            writeln!(f)?;
            writeln!(f, "Warnings ({}):", warnings)?;
            for issue in self
                .issues
                .iter()
                .filter(|i| i.severity == SanitizeSeverity::Warning)
            {
                writeln!(f, "  - {}", issue.message)?;
            }
        }

        let infos = self.info_count();
        if infos > 0 {
            writeln!(f)?;
            writeln!(f, "Notes ({}):", infos)?;
            for issue in self
                .issues
                .iter()
                .filter(|i| i.severity == SanitizeSeverity::Info)
            {
                writeln!(f, "  - {}", issue.message)?;
            }
        }

        Ok(())
    }
}

/// Size of the data at one stage.
///
/// `points` counts samples (distribution), the longer of the two input
/// sequences or the final pair count (trend), or cells (heatmap). `shape`
/// is `[rows, cols]` for heatmaps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SanitizeCounts {
    pub points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<[usize; 2]>,
}

impl SanitizeCounts {
    pub fn points(points: usize) -> Self {
        Self {
            points,
            shape: None,
        }
    }

    pub fn matrix(rows: usize, cols: usize) -> Self {
        Self {
            points: rows * cols,
            shape: Some([rows, cols]),
        }
    }
}

impl fmt::Display for SanitizeCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Some([rows, cols]) => write!(f, "{} x {} matrix", rows, cols),
            None => write!(f, "{} point(s)", self.points),
        }
    }
}

/// A single issue discovered during normalization.
#[derive(Clone, Debug, Serialize)]
pub struct SanitizeIssue {
    pub severity: SanitizeSeverity,
    pub code: SanitizeIssueCode,
    pub message: String,
}

impl SanitizeIssue {
    /// Create a warning-level issue (data dropped or altered).
    pub fn warning(code: SanitizeIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: SanitizeSeverity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Create an info-level issue (policy note).
    pub fn info(code: SanitizeIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: SanitizeSeverity::Info,
            code,
            message: message.into(),
        }
    }
}

/// Severity level for sanitize issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SanitizeSeverity {
    /// Input data was dropped or altered; `--strict` fails on these.
    Warning,
    /// A policy decision was applied.
    Info,
}

/// Stable issue codes for programmatic consumption.
///
/// These codes are part of the JSON schema and should remain stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SanitizeIssueCode {
    // Distribution samples
    /// Null/undefined samples were dropped.
    DroppedMissing,
    /// Samples that are not numbers were dropped.
    DroppedNonNumeric,
    /// NaN or infinite samples were dropped.
    DroppedNonFinite,

    // Trend pairs
    /// The x sequence was longer than y and its tail was discarded (info).
    TruncatedX,
    /// The y sequence was longer than x and its tail was discarded (info).
    TruncatedY,
    /// Pairs with an unusable x or y value were dropped.
    DroppedInvalidPair,

    // Heatmap cells
    /// Cells missing from keyed input were filled with zero.
    ZeroFilledCell,
    /// Dense rows shorter than the column count were zero-padded.
    RaggedRowPadded,
    /// Dense rows longer than the column count were truncated.
    RaggedRowTruncated,
    /// Zero rows were appended to match the row labels.
    MatrixRowsPadded,
    /// Rows beyond the row labels were dropped.
    MatrixRowsDropped,
    /// Non-numeric or non-finite dense cells were replaced with zero.
    NonNumericCellZeroed,
    /// Caller-supplied labels replaced the inferred ones.
    LabelOverrideApplied,
}
