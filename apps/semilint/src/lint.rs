//! Lint runner over discovered files.
//!
//! Files are processed one at a time, in discovery order, each with a fresh
//! scan state. Produces a `LintResult` with violations and a summary plus
//! the per-file errors met along the way.

use crate::config::LintConfig;
use crate::discover::Candidate;
use crate::error::SemilintError;
use crate::fix::write_lines_atomically;
use crate::models::{LintResult, Summary, Violation};
use crate::scan::{scan_source, ScanReport};
use std::fs;
use std::path::Path;

/// Run lint across `files`.
///
/// In fix mode every file with violations is rewritten in place. A file
/// that cannot be rewritten keeps its violations (marked unfixed) and the
/// failure is returned in the error list.
pub fn run_lint(
    files: &[Candidate],
    cfg: LintConfig,
    fix: bool,
) -> (LintResult, Vec<SemilintError>) {
    let mut violations: Vec<Violation> = Vec::new();
    let mut errors: Vec<SemilintError> = Vec::new();
    let mut summary = Summary::default();

    for file in files {
        let text = match read_source(&file.path) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!(file = %file.display, error = %e, "skipping file");
                errors.push(e);
                summary.skipped += 1;
                continue;
            }
        };
        summary.files += 1;

        let report = scan_source(&text, cfg);
        tracing::debug!(file = %file.display, missing = report.missing.len(), "scanned");
        if report.is_clean() {
            continue;
        }

        let fixed = fix && apply_fix(&file.path, &report, &mut errors);
        if fixed {
            summary.fixed += 1;
        }
        violations.extend(report.missing.iter().map(|&line| Violation {
            file: file.display.clone(),
            line,
            fixed,
        }));
    }

    summary.violations = violations.len();
    (
        LintResult {
            violations,
            summary,
        },
        errors,
    )
}

fn apply_fix(path: &Path, report: &ScanReport, errors: &mut Vec<SemilintError>) -> bool {
    match write_lines_atomically(path, &report.fixed) {
        Ok(()) => {
            tracing::debug!(file = %path.display(), lines = report.missing.len(), "rewrote");
            true
        }
        Err(e) => {
            errors.push(e);
            false
        }
    }
}

/// Read a whole source file as UTF-8.
pub fn read_source(path: &Path) -> Result<String, SemilintError> {
    let bytes = fs::read(path).map_err(|source| SemilintError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| SemilintError::InvalidUtf8 {
        path: path.to_path_buf(),
    })
}
