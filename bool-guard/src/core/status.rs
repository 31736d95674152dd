//! Outcome status of a single check.

use std::fmt;

/// The status of one audited unit: a CSV column or a dashboard file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// The check ran and found nothing wrong
    Passed,
    /// The check ran and found at least one violation
    Failed,
    /// The check did not run (e.g., no data rows, column missing)
    Skipped,
}

impl CheckStatus {
    /// Returns true if this is a Passed status.
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckStatus::Passed)
    }

    /// Returns true if this is a Failed status.
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed)
    }

    /// Returns true if this is a Skipped status.
    pub fn is_skipped(&self) -> bool {
        matches!(self, CheckStatus::Skipped)
    }

    /// Returns the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
            CheckStatus::Skipped => "skipped",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
