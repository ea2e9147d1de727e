//! Running paren/bracket balance for a file.

/// Net opens minus closes for one line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DepthDelta {
    pub paren: i32,
    pub bracket: i32,
    pub brace: i32,
}

impl DepthDelta {
    pub fn of(code: &str) -> Self {
        code.chars().fold(Self::default(), |mut d, ch| {
            match ch {
                '(' => d.paren += 1,
                ')' => d.paren -= 1,
                '[' => d.bracket += 1,
                ']' => d.bracket -= 1,
                '{' => d.brace += 1,
                '}' => d.brace -= 1,
                _ => {}
            }
            d
        })
    }
}

/// File-scoped paren and bracket depth.
///
/// Counters are signed and never clamped; unbalanced input simply drives
/// them negative. Braces are not tracked since `{}` blocks do not mark a
/// statement as continued.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DepthTracker {
    paren: i32,
    bracket: i32,
}

impl DepthTracker {
    /// Fold one line's code into the running totals.
    pub fn advance(&mut self, code: &str) -> DepthDelta {
        let delta = DepthDelta::of(code);
        self.paren += delta.paren;
        self.bracket += delta.bracket;
        delta
    }

    /// True while inside an unclosed `(` or `[`.
    pub fn is_open(&self) -> bool {
        self.paren > 0 || self.bracket > 0
    }

    #[cfg(test)]
    pub(crate) fn paren(&self) -> i32 {
        self.paren
    }

    #[cfg(test)]
    pub(crate) fn bracket(&self) -> i32 {
        self.bracket
    }
}

/// `(` minus `)` over the whole text.
pub(crate) fn paren_net(text: &str) -> i32 {
    DepthDelta::of(text).paren
}
