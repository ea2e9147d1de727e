//! Shared data models for lint results and printers.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A line missing its terminating semicolon.
pub struct Violation {
    pub file: String,
    pub line: usize,
    /// True when fix mode rewrote the file containing this line.
    pub fixed: bool,
}

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub violations: usize,
    /// Files scanned.
    pub files: usize,
    /// Files rewritten in fix mode.
    pub fixed: usize,
    /// Files skipped because they could not be read.
    pub skipped: usize,
}

#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq)]
/// Lint results container, violations in discovery then line order.
pub struct LintResult {
    pub violations: Vec<Violation>,
    pub summary: Summary,
}

impl LintResult {
    /// Violations fail the run unless fix mode was requested.
    pub fn is_failure(&self, fix: bool) -> bool {
        !fix && !self.violations.is_empty()
    }
}
