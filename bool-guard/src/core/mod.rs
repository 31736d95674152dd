//! Core audit types.
//!
//! This module holds the outcome types shared by both checkers and the
//! verdict that drives the process exit code.
//!
//! ## Overview
//!
//! - **[`CheckStatus`]**: Passed, Failed or Skipped for one audited unit
//! - **[`Verdict`]**: The overall PASS/FAIL of a run, with FAIL absorbing
//! - **[`AuditReport`]**: Everything both checkers found, ready to render
//!
//! ## Structure
//!
//! ```text
//! AuditReport
//!     ├── CsvAuditReport
//!     │   └── CsvFileReport
//!     │       └── ColumnReport (value counts, violations)
//!     └── DashboardAuditReport
//!         └── DashboardFileReport (issues)
//! ```

mod result;
mod status;
mod verdict;

pub use result::{
    AuditReport, AuditSummary, ColumnReport, CsvAuditReport, CsvFileReport, DashboardAuditReport,
    DashboardFileReport, DashboardIssue, ValueCount, Violation,
};
pub use status::CheckStatus;
pub use verdict::Verdict;
