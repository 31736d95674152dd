//! Prelude for commonly used types in bool-guard.

pub use crate::audit::AuditRunner;
pub use crate::config::AuditConfig;
pub use crate::core::{AuditReport, CheckStatus, Verdict};
pub use crate::error::{AuditError, Result};
pub use crate::formatters::{FormatterConfig, HumanFormatter, ResultFormatter};
pub use crate::logging::setup::{init_logging, LoggingConfig};
