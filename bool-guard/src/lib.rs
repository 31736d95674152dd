//! # bool-guard - Boolean Casing Audit for Generated Reports
//!
//! bool-guard is a pre-push check that keeps boolean values consistent
//! between the CSV reports a pipeline writes and the HTML dashboards that
//! read them. A dashboard comparing `d.Has_Deal === 'True'` against a report
//! that writes `TRUE` fails silently; bool-guard catches both sides of that
//! mismatch before it is pushed.
//!
//! ## Overview
//!
//! An audit runs two independent checkers and combines their verdicts:
//!
//! - **CSV contracts**: each report column listed in the contract table must
//!   only hold its allowed literal values, e.g. `True`/`False`
//! - **Dashboard patterns**: strict `===`/`!==` comparisons against quoted
//!   `True`, `False`, `TRUE` or `FALSE` are flagged unless the compared
//!   value is lower- or upper-cased first
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bool_guard::prelude::*;
//!
//! # fn example() -> Result<()> {
//! let report = AuditRunner::new(AuditConfig::default()).run_in(".")?;
//!
//! print!("{}", HumanFormatter::new().format(&report)?);
//! if !report.verdict().is_pass() {
//!     std::process::exit(1);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Contracts
//!
//! ```rust
//! use bool_guard::config::AuditConfig;
//! use bool_guard::contract::{ContractEntry, ContractTable};
//!
//! let config = AuditConfig::default().with_contracts(
//!     ContractTable::new().entry(
//!         ContractEntry::new("daily_*.csv").column("Is_Active", ["TRUE", "FALSE"]),
//!     ),
//! );
//! assert_eq!(config.contracts.entries().len(), 1);
//! ```
//!
//! ## Architecture
//!
//! - **`contract`**: the CSV contract table
//! - **`checks`**: the CSV contract checker and the dashboard scanner
//! - **`core`**: report types and the [`Verdict`](crate::core::Verdict)
//! - **`sources`**: globbing and file loading
//! - **`audit`**: runs both checkers in order
//! - **`formatters`**: console rendering
//! - **`logging`**: `tracing` subscriber setup

pub mod audit;
pub mod checks;
pub mod config;
pub mod contract;
pub mod core;
pub mod error;
pub mod formatters;
pub mod logging;
pub mod prelude;
pub mod sources;
