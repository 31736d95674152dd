//! Runs both checkers and assembles the report.

use crate::checks::{CsvContractChecker, DashboardScanner};
use crate::config::AuditConfig;
use crate::core::AuditReport;
use crate::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument};

/// Drives a full audit: CSV contracts first, then dashboards.
///
/// # Examples
///
/// ```rust,no_run
/// use bool_guard::audit::AuditRunner;
/// use bool_guard::config::AuditConfig;
///
/// # fn example() -> bool_guard::error::Result<()> {
/// let report = AuditRunner::new(AuditConfig::default()).run_in(".")?;
/// std::process::exit(report.verdict().exit_code().into());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AuditRunner {
    config: AuditConfig,
}

impl AuditRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: AuditConfig) -> Self {
        Self { config }
    }

    /// Audits the files directly under `root`.
    ///
    /// # Errors
    ///
    /// Fails on the first unreadable or malformed file. Violations are not
    /// errors; they are recorded in the returned report.
    #[instrument(skip(self, root), fields(root = %root.as_ref().display()))]
    pub fn run_in(&self, root: impl AsRef<Path>) -> Result<AuditReport> {
        let root = root.as_ref();
        let start = Instant::now();

        let csv = CsvContractChecker::new(&self.config.contracts).run(root)?;
        let dashboards = DashboardScanner::new(&self.config.dashboard).run(root)?;
        let report = AuditReport::new(root, csv, dashboards);

        info!(
            verdict = %report.verdict(),
            csv_files = report.csv.files.len(),
            dashboards = report.dashboards.files.len(),
            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Audit complete"
        );
        Ok(report)
    }
}
