use super::TERMINATOR;

/// Final verdict for a code segment that is neither continued nor exempt.
pub fn needs_terminator(code: &str) -> bool {
    let Some(last) = code.chars().last() else {
        return true;
    };
    if last == TERMINATOR {
        return false;
    }
    if code.ends_with("++") || code.ends_with("--") {
        return true;
    }
    if last.is_ascii_alphanumeric() || matches!(last, '_' | ')' | ']' | '"' | '\'' | '`') {
        return true;
    }
    last != ','
}
