//! Boolean value contracts for CSV reports.
//!
//! A contract maps a filename glob pattern to the columns whose values must
//! stay within a fixed set of literal strings. The built-in table encodes the
//! casing each generated report is expected to use.
//!
//! # Examples
//!
//! ```rust
//! use bool_guard::contract::{ContractEntry, ContractTable};
//!
//! let table = ContractTable::new().entry(
//!     ContractEntry::new("scores*.csv")
//!         .column("Golden_Cross", ["True", "False"])
//!         .column("Has_Deal", ["TRUE", "FALSE", ""]),
//! );
//!
//! let rule = &table.entries()[0].columns()[1];
//! assert!(rule.allows(""));
//! assert!(!rule.allows("true"));
//! ```

use std::collections::BTreeSet;

/// The set of literal values one column may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRule {
    column: String,
    allowed: BTreeSet<String>,
}

impl ColumnRule {
    /// Creates a rule for `column` permitting exactly the given values.
    pub fn new<I, S>(column: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            column: column.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The column this rule applies to.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The permitted values.
    pub fn allowed(&self) -> &BTreeSet<String> {
        &self.allowed
    }

    /// Returns true if `value` is permitted. Matching is exact and case-sensitive.
    pub fn allows(&self, value: &str) -> bool {
        self.allowed.contains(value)
    }
}

/// Column rules for every CSV file matching one glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEntry {
    pattern: String,
    columns: Vec<ColumnRule>,
}

impl ContractEntry {
    /// Creates an entry with no column rules.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            columns: Vec::new(),
        }
    }

    /// Adds a column rule.
    pub fn column<I, S>(mut self, column: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.push(ColumnRule::new(column, allowed));
        self
    }

    /// The filename glob pattern, relative to the audited directory.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Column rules in declaration order.
    pub fn columns(&self) -> &[ColumnRule] {
        &self.columns
    }
}

/// Ordered list of contract entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractTable {
    entries: Vec<ContractEntry>,
}

impl ContractTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn entry(mut self, entry: ContractEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[ContractEntry] {
        &self.entries
    }

    /// The contract shipped with the tool.
    pub fn builtin() -> Self {
        Self::new()
            .entry(
                ContractEntry::new("output_combined_score_sp500*.csv")
                    .column("Golden_Cross", ["True", "False"])
                    .column("In_News_Screening", ["TRUE", "FALSE"])
                    // empty for stocks without news coverage
                    .column("Has_Deal", ["TRUE", "FALSE", ""]),
            )
            .entry(
                ContractEntry::new("output_momentum_sp500*.csv")
                    .column("Golden_Cross", ["True", "False"]),
            )
            .entry(
                ContractEntry::new("output_screening_largecap_sp500*.csv")
                    .column("Has_Deal", ["TRUE", "FALSE"]),
            )
            .entry(
                ContractEntry::new("output_screening_smallcap_russell2000*.csv")
                    .column("Has_Deal", ["TRUE", "FALSE"]),
            )
    }
}
