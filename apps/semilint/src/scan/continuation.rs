//! Continuation detection: is this line part of a longer statement?

use super::blocks::BlockActivity;
use super::comment::SourceLine;
use super::depth::DepthTracker;
use super::{is_space, trim_start};

/// Characters that leave an expression open when they end a line, or
/// continue one when they start the next.
const BINARY_OPERATORS: &[char] = &['+', '-', '*', '/', '%', '^', '|', '&'];

/// Decide whether `line` continues onto (or from) a neighbouring line.
///
/// `next_trimmed` is the left-trimmed following line, empty at end of file.
/// `depth` must already include this line's code and `blocks` must come
/// from advancing the block trackers over this line.
pub fn is_continuation(
    line: &SourceLine<'_>,
    next_trimmed: &str,
    depth: &DepthTracker,
    blocks: BlockActivity,
) -> bool {
    let trimmed = trim_start(line.raw);

    depth.is_open()
        || line.code.ends_with(',')
        || line.code.ends_with(BINARY_OPERATORS)
        || next_trimmed.starts_with([')', ']'])
        || next_trimmed.starts_with("&&")
        || next_trimmed.starts_with("||")
        || next_trimmed.starts_with(BINARY_OPERATORS)
        || closes_dangling_call(line.raw, next_trimmed)
        || blocks.any()
        || matches!(trimmed, "||" | "&&")
        || trimmed.ends_with("||")
        || trimmed.ends_with("&&")
        // ternary split across lines
        || next_trimmed.starts_with(['?', ':'])
        || trimmed.starts_with(['?', ':'])
}

/// Next line closes a call and this one is a non-blank argument line.
fn closes_dangling_call(raw: &str, next_trimmed: &str) -> bool {
    next_trimmed.starts_with(')')
        && raw.chars().any(|c| !is_space(c))
        && !raw.ends_with([',', ';'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(raw: &str, next: &str) -> bool {
        let line = SourceLine::new(1, raw);
        let mut depth = DepthTracker::default();
        depth.advance(line.code);
        is_continuation(&line, trim_start(next), &depth, BlockActivity::default())
    }

    #[test]
    fn test_open_paren_suppresses_same_line() {
        assert!(check("foo(a,", ""));
        assert!(check("const xs = [", ""));
        assert!(!check("foo()", ""));
    }

    #[test]
    fn test_trailing_comma_and_operator() {
        assert!(check("let x = 1,", ""));
        assert!(check("const s = 'a' +", ""));
        assert!(check("mask = a | // bits", ""));
        assert!(!check("let x = 1", ""));
    }

    #[test]
    fn test_next_line_lookahead() {
        assert!(check("  a", "  )"));
        assert!(check("  a", "]"));
        assert!(check("  ready", "  && go"));
        assert!(check("  ready", "|| go"));
        assert!(check("total", "  + more"));
        assert!(check("cond", "  ? a"));
        assert!(check("cond", "  : b"));
        assert!(!check("  a", "}"));
    }

    #[test]
    fn test_logical_operators_on_current_line() {
        assert!(check("&&", "x"));
        assert!(check("  a ||", "b"));
        assert!(check("? left", "x"));
        assert!(check(": right", "x"));
    }

    #[test]
    fn test_blocks_suppress() {
        let line = SourceLine::new(1, "  b");
        let depth = DepthTracker::default();
        let blocks = BlockActivity {
            return_paren: true,
            ..BlockActivity::default()
        };
        assert!(is_continuation(&line, "", &depth, blocks));
    }

    #[test]
    fn test_negative_depth_does_not_suppress() {
        let line = SourceLine::new(1, "x = 1");
        let mut depth = DepthTracker::default();
        depth.advance("))");
        depth.advance(line.code);
        assert!(!is_continuation(&line, "", &depth, BlockActivity::default()));
    }

    #[test]
    fn test_dangling_call_rule() {
        assert!(closes_dangling_call("  arg", ")"));
        assert!(!closes_dangling_call("  arg,", ")"));
        assert!(!closes_dangling_call("  arg;", ")"));
        assert!(!closes_dangling_call("   ", ")"));
        assert!(!closes_dangling_call("  arg", "x)"));
    }
}
