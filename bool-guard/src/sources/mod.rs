//! File discovery and loading.
//!
//! Every read is a scoped acquisition: the file is opened, read fully and
//! closed before any checking starts.

mod csv;

pub use self::csv::CsvTable;

use crate::prelude::*;
use glob::MatchOptions;
use std::path::{Path, PathBuf};
use tracing::debug;

const BOM: char = '\u{feff}';

/// Expands `pattern` relative to `root` and returns the matching files sorted by path.
///
/// Unlike a strict loader, an empty match is not an error: the caller reports
/// it as an informational skip. Glob metacharacters in `root` itself are
/// escaped so only `pattern` is interpreted. Wildcards never match a leading
/// dot, so hidden files are left out unless `pattern` names the dot itself.
pub fn expand_glob(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let root_str = root.to_str().ok_or_else(|| {
        AuditError::Configuration(format!("Directory '{}' is not valid UTF-8", root.display()))
    })?;
    let full_pattern = format!("{}/{pattern}", glob::Pattern::escape(root_str));

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let matches =
        glob::glob_with(&full_pattern, options).map_err(|source| AuditError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

    let mut paths = Vec::new();
    for entry in matches {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    debug!(pattern, matched = paths.len(), "Expanded glob");
    Ok(paths)
}

/// Reads a UTF-8 text file, dropping a leading byte-order mark if present.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| AuditError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| AuditError::Encoding {
        path: path.to_path_buf(),
    })?;

    match text.strip_prefix(BOM) {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

/// Returns `path` relative to `root` for display, or `path` unchanged if it is outside it.
pub fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
