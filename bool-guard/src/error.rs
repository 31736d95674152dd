//! Error types for the boolean audit.
//!
//! Missing inputs, missing columns and contract violations are not errors:
//! they are reported as outcomes. `AuditError` covers the faults that end a
//! run, such as an unreadable file, a malformed CSV or a bad pattern.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for the audit.
#[derive(Error, Debug)]
pub enum AuditError {
    /// A file could not be opened or read.
    #[error("IO error reading '{}': {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file is not valid UTF-8.
    #[error("File '{}' is not valid UTF-8", path.display())]
    Encoding {
        /// File that failed
        path: PathBuf,
    },

    /// A CSV file could not be parsed.
    #[error("Malformed CSV '{}': {source}", path.display())]
    Csv {
        /// File that failed
        path: PathBuf,
        /// Underlying parser error
        #[source]
        source: csv::Error,
    },

    /// A data row ends before a column the contract checks.
    #[error("Row {row} of '{}' has no '{column}' field", path.display())]
    MissingField {
        /// File that failed
        path: PathBuf,
        /// Contract column the row does not reach
        column: String,
        /// 1-based line number of the row
        row: usize,
    },

    /// A filename glob pattern is invalid.
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A directory entry could not be read while expanding a glob.
    #[error("Glob expansion failed: {0}")]
    Glob(#[from] glob::GlobError),

    /// A scanner regular expression is invalid.
    #[error("Invalid regex '{pattern}': {source}")]
    InvalidRegex {
        /// The offending pattern
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Error while rendering a report.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    /// Error related to configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// A type alias for `Result<T, AuditError>`.
pub type Result<T> = std::result::Result<T, AuditError>;

impl AuditError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a CSV parse error for the given path.
    pub fn csv(path: impl AsRef<Path>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
