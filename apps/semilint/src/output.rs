//! Output rendering for lint runs.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-violation fields, a top-level summary and the per-file errors.

use crate::error::SemilintError;
use crate::models::{LintResult, Violation};
use crate::utils::warn_prefix;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

pub const RULE_ID: &str = "missing-semicolon";

pub const MSG_HEADER: &str = "Missing semicolons detected:";
pub const MSG_CLEAN: &str = "No missing semicolons detected.";
pub const MSG_FIXED: &str = "Auto-fix applied where heuristic matched. Review changes.";
pub const MSG_HINT: &str = "Run `semilint fix` to attempt automatic insertion.";

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print lint results in the requested format.
///
/// Per-file errors go to stderr as warnings in human mode and into the
/// `errors` array in JSON mode.
pub fn print_lint(res: &LintResult, output: &str, fix: bool, errors: &[SemilintError]) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_lint_json(res, errors)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", warn_prefix(), e),
        },
        _ => {
            print_errors(errors);
            let color = use_colors(output);
            if !res.violations.is_empty() {
                println!("{}", MSG_HEADER);
            }
            for v in &res.violations {
                println!("{}", violation_line(v, color));
            }
            let summary = summary_line(res);
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
            println!("{}", closing_message(res, fix));
        }
    }
}

/// Print per-file errors as warnings on stderr.
pub fn print_errors(errors: &[SemilintError]) {
    for e in errors {
        eprintln!("{} {}", warn_prefix(), e);
    }
}

fn violation_line(v: &Violation, color: bool) -> String {
    let location = format!("{}:{}", v.file, v.line);
    let (icon, sev, message) = if v.fixed {
        ("✔", "⟦fixed⟧", "Inserted semicolon")
    } else {
        ("✖", "⟦error⟧", "Missing semicolon")
    };
    if !color {
        return format!("{} {} {} ❲{}❳ — {}", icon, sev, location, RULE_ID, message);
    }
    let (icon, sev) = if v.fixed {
        (icon.green().to_string(), sev.green().bold().to_string())
    } else {
        (icon.red().to_string(), sev.red().bold().to_string())
    };
    format!(
        "{} {} {} ❲{}❳ — {}",
        icon,
        sev,
        location.bold(),
        RULE_ID,
        message
    )
}

/// `— Summary — violations=N files=M fixed=K skipped=S`
pub fn summary_line(res: &LintResult) -> String {
    let s = &res.summary;
    format!(
        "— Summary — violations={} files={} fixed={} skipped={}",
        s.violations, s.files, s.fixed, s.skipped
    )
}

/// Closing advice printed after the summary.
pub fn closing_message(res: &LintResult, fix: bool) -> &'static str {
    if res.violations.is_empty() {
        MSG_CLEAN
    } else if fix {
        MSG_FIXED
    } else {
        MSG_HINT
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult, errors: &[SemilintError]) -> JsonVal {
    let errors: Vec<JsonVal> = errors
        .iter()
        .map(|e| {
            json!({
                "file": e.path().map(|p| p.to_string_lossy().into_owned()),
                "message": e.to_string(),
            })
        })
        .collect();
    json!({
        "violations": res.violations,
        "summary": res.summary,
        "errors": errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Summary;
    use std::path::PathBuf;

    fn sample(fixed: bool) -> LintResult {
        LintResult {
            violations: vec![
                Violation {
                    file: "scripts/a.js".into(),
                    line: 3,
                    fixed,
                },
                Violation {
                    file: "scripts/b.js".into(),
                    line: 1,
                    fixed,
                },
            ],
            summary: Summary {
                violations: 2,
                files: 2,
                fixed: if fixed { 2 } else { 0 },
                skipped: 1,
            },
        }
    }

    #[test]
    fn test_compose_lint_json_shape() {
        let errors = vec![SemilintError::MissingFile {
            path: PathBuf::from("gone.js"),
        }];
        let out = compose_lint_json(&sample(false), &errors);
        assert_eq!(out["summary"]["violations"], 2);
        assert_eq!(out["summary"]["skipped"], 1);
        assert_eq!(out["violations"][0]["file"], "scripts/a.js");
        assert_eq!(out["violations"][0]["line"], 3);
        assert_eq!(out["violations"][1]["fixed"], false);
        assert_eq!(out["errors"][0]["file"], "gone.js");
        assert_eq!(out["errors"][0]["message"], "Skipping missing file gone.js");
    }

    #[test]
    fn test_compose_lint_json_empty() {
        let out = compose_lint_json(&LintResult::default(), &[]);
        assert!(out["violations"].as_array().unwrap().is_empty());
        assert!(out["errors"].as_array().unwrap().is_empty());
        assert_eq!(out["summary"]["files"], 0);
    }

    #[test]
    fn test_plain_violation_lines() {
        let res = sample(false);
        assert_eq!(
            violation_line(&res.violations[0], false),
            "✖ ⟦error⟧ scripts/a.js:3 ❲missing-semicolon❳ — Missing semicolon"
        );
        let fixed = sample(true);
        assert_eq!(
            violation_line(&fixed.violations[1], false),
            "✔ ⟦fixed⟧ scripts/b.js:1 ❲missing-semicolon❳ — Inserted semicolon"
        );
    }

    #[test]
    fn test_summary_and_closing() {
        let res = sample(true);
        assert_eq!(
            summary_line(&res),
            "— Summary — violations=2 files=2 fixed=2 skipped=1"
        );
        assert_eq!(closing_message(&res, true), MSG_FIXED);
        assert_eq!(closing_message(&res, false), MSG_HINT);
        assert_eq!(closing_message(&LintResult::default(), false), MSG_CLEAN);
        assert_eq!(closing_message(&LintResult::default(), true), MSG_CLEAN);
    }
}
