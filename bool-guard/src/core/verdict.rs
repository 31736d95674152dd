//! The pass/fail verdict of an audit run.

use super::CheckStatus;
use std::fmt;
use std::process::ExitCode;

/// Overall result of an audit.
///
/// `Pass` is the initial state. Once a verdict is `Fail` nothing can turn it
/// back into `Pass`: every combining operation treats `Fail` as absorbing.
///
/// # Examples
///
/// ```rust
/// use bool_guard::core::Verdict;
///
/// let csv = Verdict::Pass;
/// let dashboards = Verdict::Fail;
///
/// assert_eq!(csv.and(dashboards), Verdict::Fail);
/// assert_eq!(csv.and(dashboards).exit_code(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verdict {
    /// No violation found
    #[default]
    Pass,
    /// At least one violation found
    Fail,
}

impl Verdict {
    /// Returns `Fail` when `failed` is true and `Pass` otherwise.
    pub fn from_failed(failed: bool) -> Self {
        if failed {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    /// Combines two verdicts; the result passes only if both pass.
    #[must_use]
    pub fn and(self, other: Verdict) -> Verdict {
        match (self, other) {
            (Verdict::Pass, Verdict::Pass) => Verdict::Pass,
            _ => Verdict::Fail,
        }
    }

    /// Returns true if the verdict is `Pass`.
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    /// Process exit code for this verdict: 0 on pass, 1 on fail.
    pub fn exit_code(&self) -> u8 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail => 1,
        }
    }
}

impl From<CheckStatus> for Verdict {
    fn from(status: CheckStatus) -> Self {
        Verdict::from_failed(status.is_failed())
    }
}

impl From<Verdict> for ExitCode {
    fn from(verdict: Verdict) -> Self {
        ExitCode::from(verdict.exit_code())
    }
}

impl FromIterator<Verdict> for Verdict {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        iter.into_iter().fold(Verdict::Pass, Verdict::and)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "PASS"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}
