//! Multi-line continuation blocks.
//!
//! Three independent trackers decide whether a line sits inside a
//! statement that started on an earlier line:
//! - declaration: a bare `const`/`let`/`var` line, closed by the first raw
//!   line containing `;`;
//! - conditional: an `if`/`while`/`for`/`else if` header whose parens do not
//!   balance on the first line;
//! - return: `return (` with unbalanced parens.
//!
//! A conditional header holds its own line; a `return (` line only opens
//! its block, so the lines after it are held but the trigger is judged on
//! its own.
//!
//! A tracker only looks for its trigger while idle, so a pending block is
//! never restarted. Paren counts here cover the whole line, comment
//! included.

use super::depth::paren_net;
use super::trim_start;
use regex::Regex;
use std::sync::LazyLock;

static CONDITIONAL_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:if|while|for)[ (]|else if)").expect("conditional pattern compiles")
});

static RETURN_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^return[ \t\n\x0B\x0C\r]*\(").expect("return pattern compiles")
});

/// Which blocks hold the current line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BlockActivity {
    pub declaration: bool,
    pub conditional: bool,
    pub return_paren: bool,
}

impl BlockActivity {
    pub fn any(self) -> bool {
        self.declaration || self.conditional || self.return_paren
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct ParenBlock {
    pending: bool,
    net: i32,
}

impl ParenBlock {
    /// Returns true when the line belongs to the block. Closing lines always
    /// do; the trigger line only when `holds_trigger` is set.
    fn advance(&mut self, trimmed: &str, starts: fn(&str) -> bool, holds_trigger: bool) -> bool {
        if self.pending {
            self.net += paren_net(trimmed);
            if self.net <= 0 {
                self.pending = false;
            }
            return true;
        }
        if starts(trimmed) {
            self.net = paren_net(trimmed);
            self.pending = self.net > 0;
        }
        holds_trigger && self.pending
    }
}

/// Per-file state for the three continuation blocks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockStateMachine {
    declaration: bool,
    conditional: ParenBlock,
    return_paren: ParenBlock,
}

impl BlockStateMachine {
    /// Advance every tracker over one raw line.
    pub fn advance(&mut self, raw: &str) -> BlockActivity {
        let trimmed = trim_start(raw);
        BlockActivity {
            declaration: self.advance_declaration(raw, trimmed),
            conditional: self.conditional.advance(trimmed, starts_conditional, true),
            return_paren: self.return_paren.advance(trimmed, starts_return_paren, false),
        }
    }

    fn advance_declaration(&mut self, raw: &str, trimmed: &str) -> bool {
        if !self.declaration && is_bare_declaration(trimmed) {
            self.declaration = true;
        }
        if !self.declaration {
            return false;
        }
        if raw.contains(';') {
            self.declaration = false;
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn declaration_pending(&self) -> bool {
        self.declaration
    }

    #[cfg(test)]
    pub(crate) fn conditional_pending(&self) -> bool {
        self.conditional.pending
    }

    #[cfg(test)]
    pub(crate) fn return_pending(&self) -> bool {
        self.return_paren.pending
    }
}

/// A line holding nothing but a declaration keyword.
pub(crate) fn is_bare_declaration(trimmed: &str) -> bool {
    matches!(trimmed, "const" | "let" | "var")
}

fn starts_conditional(trimmed: &str) -> bool {
    let header = trim_start(trim_start(trimmed).trim_start_matches('}'));
    CONDITIONAL_START.is_match(header)
}

fn starts_return_paren(trimmed: &str) -> bool {
    RETURN_START.is_match(trimmed)
}
