//! Source positions.

use serde::{Deserialize, Serialize};

/// A position in the source text.
///
/// `offset` is the character index into the source and advances monotonically;
/// `line` and `column` are zero-based and derived from it (a `\n` starts a new
/// line at column zero). `Display` renders the one-based `line:column` form
/// used in diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_one_based() {
        assert_eq!(Position::default().to_string(), "1:1");
        assert_eq!(Position::new(12, 2, 4).to_string(), "3:5");
    }

    #[test]
    fn ordering_follows_offset() {
        assert!(Position::new(1, 0, 1) < Position::new(5, 1, 0));
    }
}
