//! Boolean audit, run before every push.
//!
//! Audits the current directory and exits 0 when every check passes, 1
//! otherwise. Takes no arguments.

use anyhow::{Context, Result};
use bool_guard::prelude::*;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    init_logging(LoggingConfig::default())?;

    let root = std::env::current_dir().context("Failed to determine the working directory")?;
    let report = AuditRunner::new(AuditConfig::default())
        .run_in(&root)
        .with_context(|| format!("Boolean audit of '{}' aborted", root.display()))?;

    let config = FormatterConfig::default().with_colors(std::io::stdout().is_terminal());
    print!("{}", HumanFormatter::with_config(config).format(&report)?);

    Ok(report.verdict().into())
}
