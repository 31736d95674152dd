//! Dashboard pattern scanner.
//!
//! Dashboards are scanned as plain text, never parsed. A *strict comparison*
//! is `===` or `!==` against a quoted `True`, `False`, `TRUE` or `FALSE`
//! literal. Such a comparison breaks silently as soon as the data changes
//! casing, unless the compared value is normalized first.
//!
//! A comparison is exempt when a `.toLowerCase()` or `.toUpperCase()` call
//! immediately precedes its operator. Each comparison on a line is judged on
//! its own:
//!
//! ```rust
//! use bool_guard::checks::DashboardRules;
//!
//! let rules = DashboardRules::builtin();
//!
//! assert_eq!(rules.strict_comparisons("if (x === 'True') {"), vec!["=== 'True'"]);
//! assert!(rules.strict_comparisons("String(x).toLowerCase() === 'true'").is_empty());
//! assert_eq!(
//!     rules.strict_comparisons("a.toLowerCase() === 'true' || b === 'True'"),
//!     vec!["=== 'True'"],
//! );
//! ```

use crate::core::{DashboardAuditReport, DashboardFileReport, DashboardIssue};
use crate::prelude::*;
use crate::sources::{display_path, expand_glob, read_text};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Glob selecting the dashboards to scan.
pub const HTML_GLOB: &str = "*.html";

/// Strict comparisons against case-sensitive boolean literals.
pub const BAD_PATTERNS: [&str; 8] = [
    r#"===\s*['"]True['"]"#,
    r#"===\s*['"]False['"]"#,
    r#"===\s*['"]TRUE['"]"#,
    r#"===\s*['"]FALSE['"]"#,
    r#"!==\s*['"]True['"]"#,
    r#"!==\s*['"]False['"]"#,
    r#"!==\s*['"]TRUE['"]"#,
    r#"!==\s*['"]FALSE['"]"#,
];

/// Case normalization directly before a strict comparison operator.
pub const OK_PATTERNS: [&str; 4] = [
    r"\.toLowerCase\(\)\s*===",
    r"\.toLowerCase\(\)\s*!==",
    r"\.toUpperCase\(\)\s*===",
    r"\.toUpperCase\(\)\s*!==",
];

/// Remediation printed once for every failing dashboard.
pub const FIX_HINT: &str = "Use .toLowerCase() === 'true' instead of === 'True'";

/// Example accompanying [`FIX_HINT`].
pub const FIX_EXAMPLE: &str = "String(d.Golden_Cross).toLowerCase() === 'true'";

/// Longest line context kept for an issue, in characters.
pub const MAX_CONTEXT_CHARS: usize = 120;

static BUILTIN_RULES: Lazy<DashboardRules> = Lazy::new(|| {
    // These patterns are compile-time constants and known to be valid
    #[allow(clippy::expect_used)]
    DashboardRules::new(HTML_GLOB, BAD_PATTERNS, OK_PATTERNS)
        .expect("built-in dashboard patterns must compile")
});

/// The file glob and compiled pattern lists used by the scanner.
#[derive(Debug, Clone)]
pub struct DashboardRules {
    glob: String,
    bad: Vec<Regex>,
    ok: Vec<Regex>,
}

impl DashboardRules {
    /// Compiles the given bad and OK pattern lists.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidRegex`] for the first pattern that does
    /// not compile.
    pub fn new<B, O>(glob: impl Into<String>, bad: B, ok: O) -> Result<Self>
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        O: IntoIterator,
        O::Item: AsRef<str>,
    {
        Ok(Self {
            glob: glob.into(),
            bad: compile_all(bad)?,
            ok: compile_all(ok)?,
        })
    }

    /// The built-in rules: `*.html`, [`BAD_PATTERNS`] and [`OK_PATTERNS`].
    pub fn builtin() -> Self {
        BUILTIN_RULES.clone()
    }

    /// Glob selecting the files to scan.
    pub fn glob(&self) -> &str {
        &self.glob
    }

    /// Returns the text of every strict comparison on `line` that is not
    /// immediately preceded by case normalization.
    ///
    /// Results are grouped by bad pattern in list order, then by position.
    pub fn strict_comparisons<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let normalized: Vec<(usize, usize)> = self
            .ok
            .iter()
            .flat_map(|re| re.find_iter(line))
            .map(|m| (m.start(), m.end()))
            .collect();

        self.bad
            .iter()
            .flat_map(|re| re.find_iter(line))
            .filter(|m| {
                !normalized
                    .iter()
                    .any(|&(start, end)| start < m.start() && m.start() < end)
            })
            .map(|m| m.as_str())
            .collect()
    }
}

impl Default for DashboardRules {
    fn default() -> Self {
        Self::builtin()
    }
}

fn compile_all<I>(patterns: I) -> Result<Vec<Regex>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| {
            let pattern = p.as_ref();
            Regex::new(pattern).map_err(|source| AuditError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}

/// Scans dashboards for strict boolean comparisons.
#[derive(Debug, Clone)]
pub struct DashboardScanner<'a> {
    rules: &'a DashboardRules,
}

impl<'a> DashboardScanner<'a> {
    /// Creates a scanner using `rules`.
    pub fn new(rules: &'a DashboardRules) -> Self {
        Self { rules }
    }

    /// Scans every file under `root` matching the rules' glob.
    #[instrument(skip(self, root), fields(glob = %self.rules.glob()))]
    pub fn run(&self, root: &Path) -> Result<DashboardAuditReport> {
        let paths = expand_glob(root, self.rules.glob())?;
        if paths.is_empty() {
            debug!("No dashboard files found");
        }

        let mut report = DashboardAuditReport::default();
        for path in &paths {
            report.files.push(self.scan_file(root, path)?);
        }
        Ok(report)
    }

    /// Scans one file.
    pub fn scan_file(&self, root: &Path, path: &Path) -> Result<DashboardFileReport> {
        let text = read_text(path)?;
        let issues = self.scan_text(&text);
        let shown = display_path(root, path);

        if issues.is_empty() {
            info!(file = %shown.display(), "Dashboard clean");
        } else {
            warn!(
                file = %shown.display(),
                issues = issues.len(),
                "Strict boolean comparisons found"
            );
        }

        Ok(DashboardFileReport {
            path: shown,
            issues,
        })
    }

    /// Scans text line by line; line numbers start at 1.
    pub fn scan_text(&self, text: &str) -> Vec<DashboardIssue> {
        text.lines()
            .enumerate()
            .flat_map(|(index, line)| {
                self.rules
                    .strict_comparisons(line)
                    .into_iter()
                    .map(move |matched| DashboardIssue {
                        line: index + 1,
                        matched: matched.to_string(),
                        context: line_context(line),
                    })
            })
            .collect()
    }
}

fn line_context(line: &str) -> String {
    line.trim().chars().take(MAX_CONTEXT_CHARS).collect()
}
