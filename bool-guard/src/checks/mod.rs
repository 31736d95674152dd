//! The two checkers that make up an audit.
//!
//! - **[`CsvContractChecker`]**: CSV columns against their allowed value sets
//! - **[`DashboardScanner`]**: HTML dashboards for strict boolean comparisons
//!
//! Each checker returns its own report; neither shares state with the other.

mod csv_contract;
mod dashboard;

pub use csv_contract::{CsvContractChecker, ROW_NUMBER_OFFSET};
pub use dashboard::{
    DashboardRules, DashboardScanner, BAD_PATTERNS, FIX_EXAMPLE, FIX_HINT, HTML_GLOB,
    MAX_CONTEXT_CHARS, OK_PATTERNS,
};
