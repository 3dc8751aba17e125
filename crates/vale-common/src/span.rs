//! Source spans.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A pair of positions bracketing a region of source text.
///
/// Invariant: `begin.offset <= end.offset`. Zero-width spans occur only at
/// end-of-input and have no other use at this layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub begin: Position,
    pub end: Position,
}

impl Span {
    pub fn new(begin: Position, end: Position) -> Self {
        debug_assert!(begin.offset <= end.offset);
        Self { begin, end }
    }

    /// A zero-width span collapsed onto a single position.
    pub fn empty(pos: Position) -> Self {
        Self {
            begin: pos,
            end: pos,
        }
    }

    /// Width of the span in source characters.
    pub fn len(&self) -> usize {
        self.end.offset - self.begin.offset
    }

    pub fn is_empty(&self) -> bool {
        self.begin.offset == self.end.offset
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_counts_characters() {
        let span = Span::new(Position::new(3, 0, 3), Position::new(7, 0, 7));
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn empty_span_is_zero_width() {
        let span = Span::empty(Position::new(5, 1, 2));
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
        assert_eq!(span.to_string(), "2:3..2:3");
    }
}
