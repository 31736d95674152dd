//! CSV contract checker.

use crate::contract::{ColumnRule, ContractEntry, ContractTable};
use crate::core::{
    CheckStatus, ColumnReport, CsvAuditReport, CsvFileReport, ValueCount, Violation,
};
use crate::prelude::*;
use crate::sources::{display_path, expand_glob, CsvTable};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Offset from a zero-based data row index to its 1-based line number:
/// one for the header line, one for 1-based counting.
pub const ROW_NUMBER_OFFSET: usize = 2;

/// Checks CSV files against a contract table.
///
/// Every file matching every entry is checked, even after the first
/// violation, so the report is complete.
///
/// # Examples
///
/// ```rust
/// use bool_guard::checks::CsvContractChecker;
/// use bool_guard::contract::ColumnRule;
/// use bool_guard::sources::CsvTable;
///
/// let table = CsvTable::parse("Golden_Cross\nTrue\nTRUE\n").unwrap();
/// let rule = ColumnRule::new("Golden_Cross", ["True", "False"]);
///
/// let report = CsvContractChecker::check_column(&table, &rule).unwrap();
/// assert_eq!(report.violations.len(), 1);
/// assert_eq!(report.violations[0].row, 3);
/// ```
#[derive(Debug, Clone)]
pub struct CsvContractChecker<'a> {
    contracts: &'a ContractTable,
}

impl<'a> CsvContractChecker<'a> {
    /// Creates a checker for `contracts`.
    pub fn new(contracts: &'a ContractTable) -> Self {
        Self { contracts }
    }

    /// Checks every file under `root` matched by any contract entry.
    #[instrument(skip_all, fields(entries = self.contracts.entries().len()))]
    pub fn run(&self, root: &Path) -> Result<CsvAuditReport> {
        let mut report = CsvAuditReport::default();

        for entry in self.contracts.entries() {
            let paths = expand_glob(root, entry.pattern())?;
            if paths.is_empty() {
                debug!(pattern = entry.pattern(), "No CSV files matched");
                continue;
            }
            for path in &paths {
                report.files.push(self.check_file(root, entry, path)?);
            }
        }

        Ok(report)
    }

    /// Checks one file against one contract entry.
    pub fn check_file(
        &self,
        root: &Path,
        entry: &ContractEntry,
        path: &Path,
    ) -> Result<CsvFileReport> {
        let table = CsvTable::load(path)?;
        let shown = display_path(root, path);

        let columns = if table.is_empty() {
            info!(file = %shown.display(), "Empty CSV, skipping");
            Vec::new()
        } else {
            entry
                .columns()
                .iter()
                .map(|rule| Self::check_column(&table, rule))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(CsvFileReport {
            path: shown,
            pattern: entry.pattern().to_string(),
            row_count: table.row_count(),
            columns,
        })
    }

    /// Checks one column of a loaded table.
    ///
    /// Values are trimmed before the membership test. A column absent from
    /// the header yields a skipped report. Extra fields in a row are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MissingField`] for the first data row that ends
    /// before the column.
    pub fn check_column(table: &CsvTable, rule: &ColumnRule) -> Result<ColumnReport> {
        let allowed: Vec<String> = rule.allowed().iter().cloned().collect();

        let Some(index) = table.column_index(rule.column()) else {
            debug!(column = rule.column(), "Column not found, skipping");
            return Ok(ColumnReport::missing(rule.column(), allowed));
        };

        let mut value_counts: Vec<ValueCount> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut violations = Vec::new();

        for (row_index, raw) in table.column_values(index).enumerate() {
            let Some(raw) = raw else {
                return Err(AuditError::MissingField {
                    path: table.path().to_path_buf(),
                    column: rule.column().to_string(),
                    row: row_index + ROW_NUMBER_OFFSET,
                });
            };
            let value = raw.trim();
            let is_allowed = rule.allows(value);

            match positions.get(value) {
                Some(&position) => value_counts[position].count += 1,
                None => {
                    positions.insert(value.to_string(), value_counts.len());
                    value_counts.push(ValueCount {
                        value: value.to_string(),
                        count: 1,
                        allowed: is_allowed,
                    });
                }
            }

            if !is_allowed {
                violations.push(Violation {
                    row: row_index + ROW_NUMBER_OFFSET,
                    value: value.to_string(),
                });
            }
        }

        // stable: ties keep first-seen order
        value_counts.sort_by(|a, b| b.count.cmp(&a.count));

        let status = if violations.is_empty() {
            CheckStatus::Passed
        } else {
            warn!(
                column = rule.column(),
                violations = violations.len(),
                "Contract violations found"
            );
            CheckStatus::Failed
        };

        Ok(ColumnReport {
            column: rule.column().to_string(),
            allowed,
            status,
            value_counts,
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn golden_cross() -> ColumnRule {
        ColumnRule::new("Golden_Cross", ["True", "False"])
    }

    #[test]
    fn test_allowed_values_pass() {
        let table = CsvTable::parse("Golden_Cross\nTrue\nFalse\n True \n").unwrap();
        let report = CsvContractChecker::check_column(&table, &golden_cross()).unwrap();

        assert_eq!(report.status, CheckStatus::Passed);
        assert!(report.violations.is_empty());
        assert_eq!(report.value_counts[0].value, "True");
        assert_eq!(report.value_counts[0].count, 2);
    }

    #[test]
    fn test_violations_use_file_row_numbers() {
        let table =
            CsvTable::parse("Ticker,Golden_Cross\nA,True\nB,TRUE\nC,False\nD,true\n").unwrap();
        let report = CsvContractChecker::check_column(&table, &golden_cross()).unwrap();

        assert_eq!(report.status, CheckStatus::Failed);
        assert_eq!(
            report.violations,
            vec![
                Violation {
                    row: 3,
                    value: "TRUE".to_string()
                },
                Violation {
                    row: 5,
                    value: "true".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_value_counts_sorted_by_frequency() {
        let table =
            CsvTable::parse("Ticker,Has_Deal\nA,TRUE\nB,\nC,FALSE\nD,\nE,FALSE\nF,\n").unwrap();
        let rule = ColumnRule::new("Has_Deal", ["TRUE", "FALSE", ""]);
        let report = CsvContractChecker::check_column(&table, &rule).unwrap();

        let counts: Vec<(&str, usize)> = report
            .value_counts
            .iter()
            .map(|c| (c.value.as_str(), c.count))
            .collect();

        assert_eq!(counts, vec![("", 3), ("FALSE", 2), ("TRUE", 1)]);
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_empty_value_counted_and_flagged() {
        let table = CsvTable::parse("Ticker,Has_Deal\nA,TRUE\nB,\nC, \n").unwrap();
        let rule = ColumnRule::new("Has_Deal", ["TRUE", "FALSE"]);
        let report = CsvContractChecker::check_column(&table, &rule).unwrap();

        assert_eq!(report.violations.len(), 2);
        assert_eq!(report.violations[0].row, 3);
        assert_eq!(report.violations[0].value, "");
        assert_eq!(report.value_counts[0].value, "");
        assert_eq!(report.value_counts[0].count, 2);
        assert!(!report.value_counts[0].allowed);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let table = CsvTable::parse("Golden_Cross\nFalse\nTrue\n").unwrap();
        let report = CsvContractChecker::check_column(&table, &golden_cross()).unwrap();

        assert_eq!(report.value_counts[0].value, "False");
        assert_eq!(report.value_counts[1].value, "True");
    }

    #[test]
    fn test_missing_column_is_skipped() {
        let table = CsvTable::parse("Ticker\nAAPL\n").unwrap();
        let report = CsvContractChecker::check_column(&table, &golden_cross()).unwrap();

        assert_eq!(report.status, CheckStatus::Skipped);
        assert!(report.violations.is_empty());
        assert_eq!(report.allowed, vec!["False".to_string(), "True".to_string()]);
    }

    #[test]
    fn test_run_against_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("output_momentum_sp500_2024.csv"),
            "Ticker,Golden_Cross\nAAPL,True\nMSFT,TRUE\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("output_momentum_sp500_2023.csv"),
            "Ticker,Golden_Cross\n",
        )
        .unwrap();
        fs::write(dir.path().join("unrelated.csv"), "Golden_Cross\nyes\n").unwrap();

        let contracts = ContractTable::new().entry(
            ContractEntry::new("output_momentum_sp500*.csv")
                .column("Golden_Cross", ["True", "False"]),
        );
        let report = CsvContractChecker::new(&contracts).run(dir.path()).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(
            report.files[0].path,
            PathBuf::from("output_momentum_sp500_2023.csv")
        );
        assert!(report.files[0].is_empty());
        assert!(report.files[0].columns.is_empty());

        assert_eq!(report.files[1].violation_count(), 1);
        assert_eq!(report.files[1].columns[0].violations[0].row, 3);
        assert_eq!(report.verdict(), Verdict::Fail);
    }

    #[test]
    fn test_same_file_checked_by_each_matching_entry() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scores.csv"), "A,B\nTrue,TRUE\n").unwrap();

        let contracts = ContractTable::new()
            .entry(ContractEntry::new("scores*.csv").column("A", ["True", "False"]))
            .entry(ContractEntry::new("*.csv").column("B", ["True", "False"]));
        let report = CsvContractChecker::new(&contracts).run(dir.path()).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.files[0].verdict(), Verdict::Pass);
        assert_eq!(report.files[1].verdict(), Verdict::Fail);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let table = CsvTable::parse("Ticker,Golden_Cross\nAAPL,True,extra\nMSFT,False\n").unwrap();
        let report = CsvContractChecker::check_column(&table, &golden_cross()).unwrap();

        assert_eq!(report.status, CheckStatus::Passed);
        assert_eq!(report.value_counts.len(), 2);
    }

    #[test]
    fn test_short_row_only_faults_its_missing_column() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("scores.csv"), "A,B\nTrue,True\nFalse\n").unwrap();

        let first = ContractTable::new()
            .entry(ContractEntry::new("scores.csv").column("A", ["True", "False"]));
        let report = CsvContractChecker::new(&first).run(dir.path()).unwrap();
        assert_eq!(report.verdict(), Verdict::Pass);

        let second = ContractTable::new()
            .entry(ContractEntry::new("scores.csv").column("B", ["True", "False"]));
        let err = CsvContractChecker::new(&second)
            .run(dir.path())
            .unwrap_err();
        match err {
            AuditError::MissingField { path, column, row } => {
                assert_eq!(path, dir.path().join("scores.csv"));
                assert_eq!(column, "B");
                assert_eq!(row, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
