//! Lines that never need a terminator.

use super::blocks::is_bare_declaration;
use super::comment::split_inline_comment;
use super::{is_space, trim_start};
use crate::config::LintConfig;

/// Statement and block openers exempt from the check.
const KEYWORD_PREFIXES: &[&str] = &[
    "if ",
    "if(",
    "for ",
    "for(",
    "while ",
    "while(",
    "switch ",
    "switch(",
    "else ",
    "try",
    "catch",
    "finally",
    "class ",
    "export ",
    "export{",
    "import ",
    "import(",
    "function ",
    "async function ",
    "throw ",
    "break",
    "continue",
    "yield",
    "await ",
];

/// Decide whether a non-continuation line is structurally exempt.
///
/// Works on the left-trimmed raw line, so indentation never affects the
/// keyword checks.
pub fn is_ignorable(raw: &str, cfg: LintConfig) -> bool {
    let trimmed = trim_start(raw);
    let (code, _) = split_inline_comment(trimmed);

    // blank, or nothing but a comment
    if code.chars().all(is_space) {
        return true;
    }
    if trimmed.starts_with('*')
        || trimmed.starts_with("/**")
        || trimmed.starts_with("//")
        || trimmed.starts_with("/*")
    {
        return true;
    }
    if is_bare_declaration(trimmed) {
        return true;
    }
    starts_with_exempt_keyword(code, cfg) || has_structural_tail(code)
}

fn starts_with_exempt_keyword(code: &str, cfg: LintConfig) -> bool {
    if code == "else" || KEYWORD_PREFIXES.iter().any(|kw| code.starts_with(kw)) {
        return true;
    }
    !cfg.require_return_semicolon && (code.starts_with("return ") || code.starts_with("return("))
}

/// Code ending in a token after which no terminator is expected.
fn has_structural_tail(code: &str) -> bool {
    code.is_empty() || code.ends_with([';', '{', '}', ':', ',', '(']) || code.ends_with("=>")
}
