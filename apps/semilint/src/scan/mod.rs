//! Line-classification engine for missing-semicolon detection.
//!
//! Every file is folded line by line through a fresh `FileScanState`:
//! 1. split the inline comment off the raw line;
//! 2. add the code's paren/bracket balance to the running depth;
//! 3. advance the declaration, conditional and return blocks;
//! 4. decide continuation, then ignorability, then terminator need.
//!
//! The engine scans characters, not tokens. String, regex and template
//! literal boundaries are invisible to it, so `a = "x//y"` is read as code
//! `a = "x` followed by a comment.

mod blocks;
mod comment;
mod continuation;
mod depth;
mod ignorable;
mod terminator;

pub use blocks::{BlockActivity, BlockStateMachine};
pub use comment::{split_inline_comment, SourceLine};
pub use continuation::is_continuation;
pub use depth::{DepthDelta, DepthTracker};
pub use ignorable::is_ignorable;
pub use terminator::needs_terminator;

use crate::config::LintConfig;

/// The statement terminator this linter enforces.
pub const TERMINATOR: char = ';';

/// Outcome of classifying one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineVerdict {
    /// Part of a statement spanning several lines.
    Continuation,
    /// Structurally exempt (blank, comment, block opener, keyword...).
    Ignorable,
    Terminated,
    Missing,
}

/// Per-file scanning state, created fresh for every file.
#[derive(Debug, Default, Clone)]
pub struct FileScanState {
    pub depth: DepthTracker,
    pub blocks: BlockStateMachine,
}

impl FileScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line and fold its effects into the state.
    ///
    /// `next` is the raw following line, or "" for the last line.
    pub fn classify(&mut self, line: &SourceLine<'_>, next: &str, cfg: LintConfig) -> LineVerdict {
        self.depth.advance(line.code);
        let blocks = self.blocks.advance(line.raw);

        if is_continuation(line, trim_start(next), &self.depth, blocks) {
            LineVerdict::Continuation
        } else if is_ignorable(line.raw, cfg) {
            LineVerdict::Ignorable
        } else if needs_terminator(line.code) {
            LineVerdict::Missing
        } else {
            LineVerdict::Terminated
        }
    }
}

/// Result of scanning one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// 1-based numbers of lines missing a terminator, ascending.
    pub missing: Vec<usize>,
    /// The file with terminators inserted; one entry per input line.
    pub fixed: Vec<String>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Scan a sequence of lines (line terminators already stripped).
pub fn scan_lines<S: AsRef<str>>(lines: &[S], cfg: LintConfig) -> ScanReport {
    let mut state = FileScanState::new();
    let mut report = ScanReport {
        missing: Vec::new(),
        fixed: Vec::with_capacity(lines.len()),
    };
    for (idx, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let next = lines.get(idx + 1).map_or("", |s| s.as_ref());
        let line = SourceLine::new(idx + 1, raw);
        match state.classify(&line, next, cfg) {
            LineVerdict::Missing => {
                report.missing.push(line.number);
                report.fixed.push(line.with_terminator());
            }
            _ => report.fixed.push(raw.to_string()),
        }
    }
    report
}

/// Scan a whole file's text.
pub fn scan_source(text: &str, cfg: LintConfig) -> ScanReport {
    scan_lines(&split_lines(text), cfg)
}

/// Split text into lines, dropping trailing `\n`/`\r` from each.
///
/// A final newline does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n')
        .map(|l| l.trim_end_matches(['\n', '\r']))
        .collect()
}

/// ASCII whitespace, vertical tab included.
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

pub(crate) fn trim_start(s: &str) -> &str {
    s.trim_start_matches(is_space)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(src: &str) -> Vec<usize> {
        scan_source(src, LintConfig::default()).missing
    }

    #[test]
    fn test_bare_let_without_continuation_is_flagged() {
        assert_eq!(missing("let x = 1\n"), vec![1]);
    }

    #[test]
    fn test_trailing_comma_suppresses() {
        assert!(missing("let x = 1,\n").is_empty());
    }

    #[test]
    fn test_return_paren_block() {
        let src = "function f(a, b) {\nreturn (\n  a &&\n  b\n)\n}\n";
        // the closing `)` line itself is suppressed by the return block
        assert!(missing(src).is_empty());

        let mut state = FileScanState::new();
        let lines = ["return (", "  a &&", "  b", ")"];
        for (i, raw) in lines.iter().enumerate() {
            let next = lines.get(i + 1).copied().unwrap_or("");
            let line = SourceLine::new(i + 1, raw);
            let verdict = state.classify(&line, next, LintConfig::default());
            assert_eq!(verdict, LineVerdict::Continuation, "line {}", i + 1);
            if i < 3 {
                assert!(state.blocks.return_pending());
            }
        }
        assert!(!state.blocks.return_pending());
    }

    #[test]
    fn test_return_trigger_line_is_judged_on_its_own() {
        // parens only unbalanced through the comment, so depth stays closed
        assert_eq!(missing("return (a) // (\n  b\n)\n"), vec![1]);
        // an earlier stray `)` leaves the depth negative
        assert_eq!(missing("s = \")\";\nreturn (x\n"), vec![2]);
        // the block still holds the lines after the trigger
        assert_eq!(missing("s = \")\";\nreturn (x\n  y\n)\n"), vec![2]);
    }

    #[test]
    fn test_declaration_block() {
        assert!(missing("const\n  {a, b} = obj;\n").is_empty());
        // block keeps suppressing until a `;` shows up
        assert_eq!(missing("let\n  a = 1\n  b = 2;\nc()\n"), vec![4]);
    }

    #[test]
    fn test_url_in_string_is_not_a_comment() {
        assert_eq!(missing("const url = \"http://example.com\"\n"), vec![1]);
    }

    #[test]
    fn test_slashes_in_string_are_a_comment() {
        // code becomes `s = "a` which still ends in a quote
        let report = scan_source("s = \"a//b\"\n", LintConfig::default());
        assert_eq!(report.missing, vec![1]);
        assert_eq!(report.fixed, vec!["s = \"a;//b\"".to_string()]);
    }

    #[test]
    fn test_fix_preserves_comment_and_line_count() {
        let src = "let a = 1 // first\nfoo()\n\n// done\n";
        let report = scan_source(src, LintConfig::default());
        assert_eq!(report.missing, vec![1, 2]);
        assert_eq!(
            report.fixed,
            vec!["let a = 1;// first", "foo();", "", "// done"]
        );
    }

    #[test]
    fn test_fix_is_idempotent() {
        let src = "import x from 'y'\nconst a = x(1,\n  2)\nlet b = a\nif (b) {\n  b++\n}\nexport default b\n";
        let first = scan_source(src, LintConfig::default());
        assert!(!first.is_clean());
        let again = scan_lines(&first.fixed, LintConfig::default());
        assert!(again.is_clean());
        assert_eq!(again.fixed, first.fixed);
    }

    #[test]
    fn test_multiline_call_and_array() {
        let src = "foo(\n  a,\n  b\n)\nconst xs = [\n  1,\n  2\n]\n";
        assert_eq!(missing(src), vec![4, 8]);
    }

    #[test]
    fn test_conditional_header_spanning_lines() {
        let src = "if (a &&\n    b) {\n  go()\n}\n";
        assert_eq!(missing(src), vec![3]);
    }

    #[test]
    fn test_ternary_chain() {
        // both branch lines start with `?`/`:` and count as continued
        let src = "const v = cond\n  ? a\n  : b\nnext()\n";
        assert_eq!(missing(src), vec![4]);
    }

    #[test]
    fn test_return_requirement_is_configurable() {
        let src = "return value\n";
        assert_eq!(missing(src), vec![1]);
        let relaxed = LintConfig {
            require_return_semicolon: false,
        };
        assert!(scan_source(src, relaxed).is_clean());
    }

    #[test]
    fn test_state_does_not_leak_between_files() {
        let open = scan_source("foo(\n", LintConfig::default());
        assert!(open.is_clean());
        assert_eq!(missing("bar()\n"), vec![1]);
    }

    #[test]
    fn test_split_lines_handles_crlf_and_final_newline() {
        assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_trim_start_is_ascii_only() {
        assert_eq!(trim_start(" \t\x0b x"), "x");
        assert_eq!(trim_start("\u{a0}x"), "\u{a0}x");
    }
}
