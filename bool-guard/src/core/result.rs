//! Audit result types.

use super::{CheckStatus, Verdict};
use std::path::{Path, PathBuf};

/// A CSV cell whose trimmed value is outside its column's allowed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// 1-based line number in the file (data row index + 2)
    pub row: usize,
    /// The offending trimmed value
    pub value: String,
}

/// How often a distinct value occurred in a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    /// The distinct trimmed value
    pub value: String,
    /// Number of rows holding this value
    pub count: usize,
    /// Whether the value is in the allowed set
    pub allowed: bool,
}

/// Outcome of checking one contract column in one CSV file.
#[derive(Debug, Clone)]
pub struct ColumnReport {
    /// Column name from the contract
    pub column: String,
    /// Allowed values, in display order
    pub allowed: Vec<String>,
    /// Passed, Failed, or Skipped when the column is absent from the header
    pub status: CheckStatus,
    /// Distinct values, most frequent first
    pub value_counts: Vec<ValueCount>,
    /// Every violation, in row order
    pub violations: Vec<Violation>,
}

impl ColumnReport {
    /// Creates a skipped report for a column missing from the header.
    pub fn missing(column: impl Into<String>, allowed: Vec<String>) -> Self {
        Self {
            column: column.into(),
            allowed,
            status: CheckStatus::Skipped,
            value_counts: Vec::new(),
            violations: Vec::new(),
        }
    }
}

/// Outcome of checking one CSV file against its contract entry.
#[derive(Debug, Clone)]
pub struct CsvFileReport {
    /// Path as displayed, relative to the audited directory
    pub path: PathBuf,
    /// The glob pattern that matched this file
    pub pattern: String,
    /// Number of data rows (header excluded)
    pub row_count: usize,
    /// One report per contract column; empty when the file has no data rows
    pub columns: Vec<ColumnReport>,
}

impl CsvFileReport {
    /// Returns true if the file had no data rows and was skipped.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Verdict of this file: fails if any column failed.
    pub fn verdict(&self) -> Verdict {
        self.columns.iter().map(|c| Verdict::from(c.status)).collect()
    }

    /// Total number of violations across all columns.
    pub fn violation_count(&self) -> usize {
        self.columns.iter().map(|c| c.violations.len()).sum()
    }
}

/// Outcome of the CSV contract checker.
#[derive(Debug, Clone, Default)]
pub struct CsvAuditReport {
    /// Reports for every matched file, in contract order then path order
    pub files: Vec<CsvFileReport>,
}

impl CsvAuditReport {
    /// Returns true if no file matched any contract pattern.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Verdict of the CSV checker.
    pub fn verdict(&self) -> Verdict {
        self.files.iter().map(CsvFileReport::verdict).collect()
    }
}

/// A strict boolean string comparison found in a dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardIssue {
    /// 1-based line number
    pub line: usize,
    /// The text matched by the bad pattern
    pub matched: String,
    /// The trimmed line, cut to 120 characters
    pub context: String,
}

/// Outcome of scanning one dashboard file.
#[derive(Debug, Clone)]
pub struct DashboardFileReport {
    /// Path as displayed, relative to the audited directory
    pub path: PathBuf,
    /// Every surviving issue, in line order
    pub issues: Vec<DashboardIssue>,
}

impl DashboardFileReport {
    /// Passed when no issue was found, Failed otherwise.
    pub fn status(&self) -> CheckStatus {
        if self.issues.is_empty() {
            CheckStatus::Passed
        } else {
            CheckStatus::Failed
        }
    }
}

/// Outcome of the dashboard pattern scanner.
#[derive(Debug, Clone, Default)]
pub struct DashboardAuditReport {
    /// Reports for every scanned file, in path order
    pub files: Vec<DashboardFileReport>,
}

impl DashboardAuditReport {
    /// Returns true if no dashboard file matched.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Verdict of the dashboard scanner.
    pub fn verdict(&self) -> Verdict {
        self.files.iter().map(|f| Verdict::from(f.status())).collect()
    }
}

/// Counts of audited units by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditSummary {
    /// Columns checked plus dashboard files scanned
    pub total_checks: usize,
    /// Number of checks that passed
    pub passed_checks: usize,
    /// Number of checks that failed
    pub failed_checks: usize,
    /// Number of checks that were skipped (missing columns, empty files)
    pub skipped_checks: usize,
}

impl AuditSummary {
    fn count(&mut self, status: CheckStatus) {
        self.total_checks += 1;
        match status {
            CheckStatus::Passed => self.passed_checks += 1,
            CheckStatus::Failed => self.failed_checks += 1,
            CheckStatus::Skipped => self.skipped_checks += 1,
        }
    }
}

/// The complete outcome of an audit run.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// The audited directory
    pub root: PathBuf,
    /// CSV contract checker outcome
    pub csv: CsvAuditReport,
    /// Dashboard scanner outcome
    pub dashboards: DashboardAuditReport,
}

impl AuditReport {
    /// Creates a report from the two checker outcomes.
    pub fn new(
        root: impl AsRef<Path>,
        csv: CsvAuditReport,
        dashboards: DashboardAuditReport,
    ) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            csv,
            dashboards,
        }
    }

    /// The combined verdict of both checkers.
    pub fn verdict(&self) -> Verdict {
        self.csv.verdict().and(self.dashboards.verdict())
    }

    /// Counts every column and dashboard file by status.
    ///
    /// An empty CSV file counts as one skipped check.
    pub fn summary(&self) -> AuditSummary {
        let mut summary = AuditSummary::default();
        for file in &self.csv.files {
            if file.is_empty() {
                summary.count(CheckStatus::Skipped);
            }
            for column in &file.columns {
                summary.count(column.status);
            }
        }
        for file in &self.dashboards.files {
            summary.count(file.status());
        }
        summary
    }
}
