//! Data models for conformance results.
//!
//! This module contains the records read from the suite's per-case
//! result files and the verdict computed over them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of a single conformance case.
///
/// Older suite versions write the case id as a dotted string ("1.1.1"),
/// newer ones as the integer case number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CaseId {
    /// Integer case number
    Number(u64),
    /// Free-form case name
    Name(String),
}

impl Ord for CaseId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (CaseId::Number(a), CaseId::Number(b)) => a.cmp(b),
            (CaseId::Name(a), CaseId::Name(b)) => a.cmp(b),
            (CaseId::Number(_), CaseId::Name(_)) => Ordering::Less,
            (CaseId::Name(_), CaseId::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for CaseId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseId::Number(n) => write!(f, "{}", n),
            CaseId::Name(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for CaseId {
    fn from(s: &str) -> Self {
        CaseId::Name(s.to_string())
    }
}

impl From<u64> for CaseId {
    fn from(n: u64) -> Self {
        CaseId::Number(n)
    }
}

/// Outcome classification reported by the suite for one case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Behavior {
    Ok,
    NonStrict,
    Informational,
    Failed,
    WrongCode,
    Unimplemented,
    Unclean,
    Other(String),
}

impl Behavior {
    /// Behaviors the suite treats as acceptable.
    pub const DEFAULT_PASSING: [Behavior; 3] =
        [Behavior::Ok, Behavior::NonStrict, Behavior::Informational];

    /// Returns the label as the suite writes it.
    pub fn as_str(&self) -> &str {
        match self {
            Behavior::Ok => "OK",
            Behavior::NonStrict => "NON-STRICT",
            Behavior::Informational => "INFORMATIONAL",
            Behavior::Failed => "FAILED",
            Behavior::WrongCode => "WRONG CODE",
            Behavior::Unimplemented => "UNIMPLEMENTED",
            Behavior::Unclean => "UNCLEAN",
            Behavior::Other(s) => s,
        }
    }
}

impl From<&str> for Behavior {
    fn from(s: &str) -> Self {
        match s {
            "OK" => Behavior::Ok,
            "NON-STRICT" => Behavior::NonStrict,
            "INFORMATIONAL" => Behavior::Informational,
            "FAILED" => Behavior::Failed,
            "WRONG CODE" => Behavior::WrongCode,
            "UNIMPLEMENTED" => Behavior::Unimplemented,
            "UNCLEAN" => Behavior::Unclean,
            other => Behavior::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one conformance case, as read from its JSON file.
///
/// Fields other than `case` and `behavior` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// Case identifier.
    pub case: CaseId,
    /// Behavior string exactly as reported.
    pub behavior: String,
}

impl TestOutcome {
    #[cfg(test)]
    pub fn new(case: impl Into<CaseId>, behavior: impl Into<String>) -> Self {
        Self {
            case: case.into(),
            behavior: behavior.into(),
        }
    }

    /// Parsed behavior of this outcome.
    pub fn behavior(&self) -> Behavior {
        Behavior::from(self.behavior.as_str())
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {}: {}", self.case, self.behavior)
    }
}

/// Aggregate judgment over all outcomes of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
}

impl Verdict {
    pub fn is_passed(self) -> bool {
        self == Verdict::Passed
    }

    /// Process exit code for this verdict.
    ///
    /// A failed verdict only exits non-zero (2) when `fail_on_verdict` is set.
    pub fn exit_code(self, fail_on_verdict: bool) -> i32 {
        if fail_on_verdict && !self.is_passed() {
            2
        } else {
            0
        }
    }

    /// Marker line printed at the end of the summary.
    pub fn marker(self) -> &'static str {
        match self {
            Verdict::Passed => "Tests passed ✅",
            Verdict::Failed => "Tests failed ❌",
        }
    }
}

impl From<bool> for Verdict {
    fn from(all_pass: bool) -> Self {
        if all_pass {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }
}
