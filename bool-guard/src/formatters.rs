//! Console rendering of audit reports.
//!
//! Checkers only collect outcomes; this module turns an [`AuditReport`] into
//! the human-readable report printed before the exit code is set. The output
//! is meant for people and is not a stable, machine-parseable format.
//!
//! # Examples
//!
//! ```rust
//! use bool_guard::core::{AuditReport, CsvAuditReport, DashboardAuditReport};
//! use bool_guard::formatters::{FormatterConfig, HumanFormatter, ResultFormatter};
//!
//! let report = AuditReport::new(".", CsvAuditReport::default(), DashboardAuditReport::default());
//! let formatter = HumanFormatter::with_config(FormatterConfig::default().with_colors(false));
//!
//! let output = formatter.format(&report).unwrap();
//! assert!(output.contains("ALL BOOLEAN CHECKS PASSED"));
//! ```

use crate::checks::{FIX_EXAMPLE, FIX_HINT};
use crate::core::{
    AuditReport, CheckStatus, ColumnReport, CsvAuditReport, CsvFileReport, DashboardAuditReport,
    DashboardFileReport,
};
use crate::prelude::*;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Configuration options for rendering reports.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether to use ANSI colors for PASS/FAIL labels
    pub use_colors: bool,
    /// Maximum number of violations listed per column
    pub max_violations: usize,
    /// Whether to print the check counts before the final banner
    pub include_summary: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            max_violations: 5,
            include_summary: true,
        }
    }
}

impl FormatterConfig {
    /// Creates a configuration suitable for CI logs: no colors.
    pub fn ci() -> Self {
        Self {
            use_colors: false,
            ..Self::default()
        }
    }

    /// Sets whether to use colorized output.
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Sets the maximum number of violations listed per column.
    pub fn with_max_violations(mut self, max: usize) -> Self {
        self.max_violations = max;
        self
    }

    /// Sets whether to print the check counts.
    pub fn with_summary(mut self, include: bool) -> Self {
        self.include_summary = include;
        self
    }
}

/// Trait for rendering audit reports.
pub trait ResultFormatter {
    /// Renders a report.
    fn format(&self, report: &AuditReport) -> Result<String>;

    /// Renders a report with a specific configuration.
    fn format_with_config(
        &self,
        report: &AuditReport,
        _config: &FormatterConfig,
    ) -> Result<String> {
        self.format(report)
    }
}

/// Renders the console report.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    config: FormatterConfig,
}

impl HumanFormatter {
    /// Creates a new human formatter with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new human formatter with the specified configuration.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }
}

impl ResultFormatter for HumanFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        self.format_with_config(report, &self.config)
    }

    fn format_with_config(&self, report: &AuditReport, config: &FormatterConfig) -> Result<String> {
        let style = Style::new(config);
        let mut output = String::new();

        writeln!(output, "🔒 BOOLEAN AUDIT v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(output, "   Directory: {}", report.root.display())?;
        writeln!(output)?;

        write_csv_section(&mut output, &report.csv, config, &style)?;
        writeln!(output)?;
        write_dashboard_section(&mut output, &report.dashboards, &style)?;

        if config.include_summary {
            let summary = report.summary();
            writeln!(output)?;
            writeln!(output, "📊 Summary:")?;
            writeln!(output, "   Total Checks: {}", summary.total_checks)?;
            writeln!(output, "   ✅ Passed: {}", summary.passed_checks)?;
            writeln!(output, "   ❌ Failed: {}", summary.failed_checks)?;
            writeln!(output, "   ⏭️  Skipped: {}", summary.skipped_checks)?;
        }

        writeln!(output)?;
        writeln!(output, "{}", rule())?;
        if report.verdict().is_pass() {
            writeln!(
                output,
                "✅ {} — Safe to push",
                style.pass("ALL BOOLEAN CHECKS PASSED")
            )?;
        } else {
            writeln!(
                output,
                "❌ {} — do not push until fixed!",
                style.fail("BOOLEAN AUDIT FAILED")
            )?;
        }
        writeln!(output, "{}", rule())?;

        Ok(output)
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn write_heading(output: &mut String, title: &str) -> std::fmt::Result {
    writeln!(output, "{}", rule())?;
    writeln!(output, "{title}")?;
    writeln!(output, "{}", rule())
}

fn write_csv_section(
    output: &mut String,
    csv: &CsvAuditReport,
    config: &FormatterConfig,
    style: &Style,
) -> std::fmt::Result {
    write_heading(output, "PART 1: CSV BOOLEAN AUDIT")?;

    if csv.is_empty() {
        writeln!(output)?;
        writeln!(
            output,
            "   ⚠️  No CSV files matched any pattern — nothing to audit"
        )?;
        return Ok(());
    }

    for file in &csv.files {
        write_csv_file(output, file, config, style)?;
    }
    Ok(())
}

fn write_csv_file(
    output: &mut String,
    file: &CsvFileReport,
    config: &FormatterConfig,
    style: &Style,
) -> std::fmt::Result {
    writeln!(output)?;
    writeln!(output, "📄 {}", file.path.display())?;

    if file.is_empty() {
        writeln!(output, "   ⚠️  Empty file — skipping")?;
        return Ok(());
    }

    for column in &file.columns {
        write_column(output, column, config, style)?;
    }
    Ok(())
}

fn write_column(
    output: &mut String,
    column: &ColumnReport,
    config: &FormatterConfig,
    style: &Style,
) -> std::fmt::Result {
    if column.status.is_skipped() {
        writeln!(
            output,
            "   ⚠️  Column '{}' not found — skipping",
            column.column
        )?;
        return Ok(());
    }

    let allowed: Vec<String> = column.allowed.iter().map(|v| format!("'{v}'")).collect();

    writeln!(output)?;
    writeln!(output, "   Column: {}", column.column)?;
    writeln!(output, "   Allowed: {{{}}}", allowed.join(", "))?;
    writeln!(output, "   Values found:")?;
    for count in &column.value_counts {
        let marker = if count.allowed { "✅" } else { "❌" };
        writeln!(
            output,
            "      {marker} {}: {}",
            display_value(&count.value),
            count.count
        )?;
    }

    if column.status == CheckStatus::Failed {
        writeln!(
            output,
            "   ❌ {} — {} violations found!",
            style.fail("FAIL"),
            column.violations.len()
        )?;
        for violation in column.violations.iter().take(config.max_violations) {
            writeln!(
                output,
                "      Row {}: got '{}'",
                violation.row, violation.value
            )?;
        }
        if column.violations.len() > config.max_violations {
            writeln!(
                output,
                "      ... and {} more",
                column.violations.len() - config.max_violations
            )?;
        }
    } else {
        writeln!(output, "   ✅ {}", style.pass("PASS"))?;
    }
    Ok(())
}

fn write_dashboard_section(
    output: &mut String,
    dashboards: &DashboardAuditReport,
    style: &Style,
) -> std::fmt::Result {
    write_heading(output, "PART 2: DASHBOARD BOOLEAN AUDIT")?;

    if dashboards.is_empty() {
        writeln!(output)?;
        writeln!(output, "   ⚠️  No HTML files found — skipping")?;
        return Ok(());
    }

    for file in &dashboards.files {
        write_dashboard_file(output, file, style)?;
    }
    Ok(())
}

fn write_dashboard_file(
    output: &mut String,
    file: &DashboardFileReport,
    style: &Style,
) -> std::fmt::Result {
    writeln!(output)?;
    writeln!(output, "📄 {}", file.path.display())?;

    if file.issues.is_empty() {
        writeln!(
            output,
            "   ✅ {} — No strict boolean comparisons found",
            style.pass("PASS")
        )?;
        return Ok(());
    }

    writeln!(
        output,
        "   ❌ {} — {} strict boolean comparison(s) found!",
        style.fail("FAIL"),
        file.issues.len()
    )?;
    for issue in &file.issues {
        writeln!(output, "      Line {}: {}", issue.line, issue.matched)?;
        writeln!(output, "        → {}", issue.context)?;
    }
    writeln!(output)?;
    writeln!(output, "   FIX: {FIX_HINT}")?;
    writeln!(output, "   Example: {FIX_EXAMPLE}")
}

/// Empty values are shown quoted so they stay visible.
fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "''"
    } else {
        value
    }
}

struct Style {
    colors: bool,
}

impl Style {
    fn new(config: &FormatterConfig) -> Self {
        Self {
            colors: config.use_colors,
        }
    }

    fn pass(&self, text: &str) -> String {
        self.paint("32", text)
    }

    fn fail(&self, text: &str) -> String {
        self.paint("31", text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.colors {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}
