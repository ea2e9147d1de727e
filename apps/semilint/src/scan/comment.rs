//! Inline comment splitting.

use super::{is_space, TERMINATOR};

/// One input line with its code and trailing comment separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    pub raw: &'a str,
    pub code: &'a str,
    pub comment: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(number: usize, raw: &'a str) -> Self {
        let (code, comment) = split_inline_comment(raw);
        Self {
            number,
            raw,
            code,
            comment,
        }
    }

    /// Rewritten form of the line with the terminator appended to the code.
    pub fn with_terminator(&self) -> String {
        let mut out = String::with_capacity(self.code.len() + 1 + self.comment.len());
        out.push_str(self.code);
        out.push(TERMINATOR);
        out.push_str(self.comment);
        out
    }
}

/// Split a line at the first `//` not directly preceded by `:`.
///
/// The `:` exception keeps `http://` style tokens in code. There is no
/// string-literal awareness: a `//` inside quotes still starts a comment.
/// When a comment is found the code part is right-trimmed; otherwise the
/// line is returned untouched with an empty comment.
pub fn split_inline_comment(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    let at = bytes
        .windows(2)
        .enumerate()
        .position(|(i, pair)| pair == b"//" && (i == 0 || bytes[i - 1] != b':'));
    match at {
        Some(i) => (line[..i].trim_end_matches(is_space), &line[i..]),
        None => (line, ""),
    }
}
