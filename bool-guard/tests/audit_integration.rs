//! End-to-end audits over fixture directories.

use bool_guard::checks::DashboardRules;
use bool_guard::contract::{ContractEntry, ContractTable};
use bool_guard::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// A directory whose reports and dashboard all follow the contract.
fn create_clean_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "output_combined_score_sp500_20240105.csv",
        "Ticker,Golden_Cross,In_News_Screening,Has_Deal\n\
         AAPL,True,TRUE,TRUE\n\
         MSFT,False,FALSE,\n\
         NVDA,True,TRUE,FALSE\n",
    );
    write(
        dir.path(),
        "output_momentum_sp500_20240105.csv",
        "\u{feff}Ticker,Golden_Cross\nAAPL,True\nMSFT,False\n",
    );
    write(
        dir.path(),
        "dashboard.html",
        "<script>\n\
         const gc = String(d.Golden_Cross).toLowerCase() === 'true';\n\
         const deal = String(d.Has_Deal).toUpperCase() !== 'FALSE';\n\
         </script>\n",
    );
    dir
}

fn run(dir: &Path) -> AuditReport {
    AuditRunner::new(AuditConfig::default())
        .run_in(dir)
        .unwrap()
}

#[test]
fn test_clean_directory_passes() {
    let dir = create_clean_fixture();
    let report = run(dir.path());

    assert_eq!(report.csv.files.len(), 2);
    assert_eq!(report.dashboards.files.len(), 1);
    assert_eq!(report.verdict(), Verdict::Pass);

    let summary = report.summary();
    assert_eq!(summary.failed_checks, 0);
    assert_eq!(summary.passed_checks, 5);
}

#[test]
fn test_empty_directory_passes() {
    let dir = TempDir::new().unwrap();
    let report = run(dir.path());

    assert!(report.csv.is_empty());
    assert!(report.dashboards.is_empty());
    assert_eq!(report.verdict(), Verdict::Pass);
    assert_eq!(report.verdict().exit_code(), 0);
}

#[test]
fn test_single_csv_violation_fails_audit() {
    let dir = create_clean_fixture();
    write(
        dir.path(),
        "output_screening_largecap_sp500.csv",
        "Ticker,Has_Deal\nAAPL,TRUE\nMSFT,True\n",
    );

    let report = run(dir.path());
    assert_eq!(report.verdict(), Verdict::Fail);
    assert_eq!(report.verdict().exit_code(), 1);

    let largecap = report
        .csv
        .files
        .iter()
        .find(|f| f.path == Path::new("output_screening_largecap_sp500.csv"))
        .unwrap();
    assert_eq!(largecap.columns[0].violations[0].row, 3);
    assert_eq!(largecap.columns[0].violations[0].value, "True");
    assert!(report.dashboards.verdict().is_pass());
}

#[test]
fn test_single_dashboard_issue_fails_audit() {
    let dir = create_clean_fixture();
    write(
        dir.path(),
        "screener.html",
        "<div>\nif (row.Has_Deal === 'TRUE') { show(); }\n</div>\n",
    );

    let report = run(dir.path());
    assert!(report.csv.verdict().is_pass());
    assert_eq!(report.verdict(), Verdict::Fail);

    let screener = &report.dashboards.files[1];
    assert_eq!(screener.path, Path::new("screener.html"));
    assert_eq!(screener.issues.len(), 1);
    assert_eq!(screener.issues[0].line, 2);
}

#[test]
fn test_checking_continues_after_first_violation() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "output_combined_score_sp500.csv",
        "Golden_Cross,In_News_Screening,Has_Deal\nTRUE,True,yes\n",
    );
    write(dir.path(), "a.html", "x === 'True'\n");
    write(dir.path(), "b.html", "y !== 'FALSE'\n");

    let report = run(dir.path());
    let columns = &report.csv.files[0].columns;
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(|c| c.status == CheckStatus::Failed));
    assert_eq!(report.dashboards.files.len(), 2);
    assert!(report
        .dashboards
        .files
        .iter()
        .all(|f| f.issues.len() == 1));
}

#[test]
fn test_header_only_csv_is_skipped() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "output_momentum_sp500.csv",
        "Ticker,Golden_Cross\n",
    );

    let report = run(dir.path());
    assert!(report.csv.files[0].is_empty());
    assert_eq!(report.csv.files[0].violation_count(), 0);
    assert_eq!(report.verdict(), Verdict::Pass);

    let output = HumanFormatter::with_config(FormatterConfig::ci())
        .format(&report)
        .unwrap();
    assert!(output.contains("Empty file — skipping"));
}

#[test]
fn test_missing_column_is_not_a_failure() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "output_combined_score_sp500.csv",
        "Ticker,Golden_Cross\nAAPL,True\n",
    );

    let report = run(dir.path());
    let statuses: Vec<CheckStatus> = report.csv.files[0]
        .columns
        .iter()
        .map(|c| c.status)
        .collect();
    assert_eq!(
        statuses,
        vec![CheckStatus::Passed, CheckStatus::Skipped, CheckStatus::Skipped]
    );
    assert_eq!(report.verdict(), Verdict::Pass);
}

#[test]
fn test_row_missing_contract_field_aborts_run() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "output_momentum_sp500.csv",
        "Ticker,Golden_Cross\nAAPL,True\nMSFT\n",
    );

    let err = AuditRunner::new(AuditConfig::default())
        .run_in(dir.path())
        .unwrap_err();
    assert!(matches!(err, AuditError::MissingField { row: 3, .. }));
}

#[test]
fn test_extra_fields_in_row_pass() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "output_momentum_sp500.csv",
        "Ticker,Golden_Cross\nAAPL,True,extra\n",
    );

    let report = run(dir.path());
    assert_eq!(report.csv.files[0].columns[0].status, CheckStatus::Passed);
    assert_eq!(report.verdict(), Verdict::Pass);
}

#[test]
fn test_hidden_files_are_not_audited() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".backup.html", "if (x === 'True') {}\n");

    let report = run(dir.path());
    assert!(report.dashboards.is_empty());
    assert_eq!(report.verdict(), Verdict::Pass);
}

#[test]
fn test_injected_contract_and_rules() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "flags.csv", "Active\nY\nN\nmaybe\n");
    write(dir.path(), "app.js", "if (a == 'YES') {}\n");
    write(dir.path(), "ignored.html", "x === 'True'\n");

    let config = AuditConfig::default()
        .with_contracts(
            ContractTable::new()
                .entry(ContractEntry::new("flags.csv").column("Active", ["Y", "N"])),
        )
        .with_dashboard(
            DashboardRules::new("*.js", [r"==\s*'YES'"], [r"\.toLowerCase\(\)\s*=="]).unwrap(),
        );

    let report = AuditRunner::new(config).run_in(dir.path()).unwrap();
    assert_eq!(report.csv.files[0].columns[0].violations[0].row, 4);
    assert_eq!(report.dashboards.files.len(), 1);
    assert_eq!(report.dashboards.files[0].issues[0].matched, "== 'YES'");
}

#[test]
fn test_binary_exit_codes() {
    let clean = create_clean_fixture();
    let status = Command::new(env!("CARGO_BIN_EXE_bool-audit"))
        .current_dir(clean.path())
        .output()
        .unwrap();
    assert_eq!(status.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&status.stdout);
    assert!(stdout.contains("ALL BOOLEAN CHECKS PASSED"));

    write(clean.path(), "broken.html", "if (x === 'False') {}\n");
    let status = Command::new(env!("CARGO_BIN_EXE_bool-audit"))
        .current_dir(clean.path())
        .output()
        .unwrap();
    assert_eq!(status.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&status.stdout);
    assert!(stdout.contains("BOOLEAN AUDIT FAILED"));
    assert!(stdout.contains("Line 1: === 'False'"));
}

#[test]
fn test_binary_fatal_error_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.html"), [0xff, 0xfe, 0x00]).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bool-audit"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid UTF-8"));
}
