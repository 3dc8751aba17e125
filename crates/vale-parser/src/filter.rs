//! Automatic statement-terminator insertion.

use tracing::trace;
use vale_scanner::{ScanError, Scanner, SyntaxKind, Token};

/// Whether a statement can legally end after a token of this kind.
///
/// A newline after one of these kinds is reinterpreted as an explicit
/// statement terminator: a bare identifier, the closing delimiter of a
/// block/index/call, the control-flow keywords that stand alone, and postfix
/// increment/decrement. After any other kind the statement is still
/// syntactically open (a trailing operator, an opening delimiter, a comma, a
/// keyword expecting a continuation), so the newline must not force a break.
pub fn token_completes_statement(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::CloseBraceToken
            | SyntaxKind::CloseBracketToken
            | SyntaxKind::CloseParenToken
            | SyntaxKind::BreakKeyword
            | SyntaxKind::ContinueKeyword
            | SyntaxKind::ReturnKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
    )
}

/// Turns the raw token stream into a grammar-ready one.
///
/// Each [`TokenFilter::next_token`] call pulls raw tokens until one is
/// grammar-significant: non-newline tokens pass through unchanged, a newline
/// either becomes a synthesized `SemicolonToken` (when the previously
/// returned kind completes a statement) or is discarded. The decision looks
/// back exactly one returned token; a synthesized terminator itself becomes
/// the lookback, so a run of newlines collapses to at most one terminator.
pub struct TokenFilter {
    scanner: Scanner,
    last_kind: SyntaxKind,
    delimiter_stack: Vec<u32>,
}

impl TokenFilter {
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner,
            // Not statement-completing, so leading newlines are discarded.
            last_kind: SyntaxKind::Unknown,
            delimiter_stack: Vec::new(),
        }
    }

    pub fn from_source(source: &str) -> Self {
        Self::new(Scanner::new(source))
    }

    /// Produce the next grammar-ready token.
    ///
    /// Propagates a [`ScanError`] from the wrapped scanner unchanged; no
    /// token is emitted for a failing call. The newline-skipping retry is a
    /// loop, so pathological runs of blank lines cost no stack.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        loop {
            let raw = self.scanner.scan()?;

            if raw.kind != SyntaxKind::NewLineTrivia {
                self.last_kind = raw.kind;
                return Ok(raw);
            }

            if token_completes_statement(self.last_kind) {
                trace!(after = ?self.last_kind, span = %raw.span, "inserted statement terminator");
                self.last_kind = SyntaxKind::SemicolonToken;
                // The terminator spans exactly the consumed newline.
                return Ok(Token::new(SyntaxKind::SemicolonToken, ";", raw.span));
            }

            // Insignificant newline; the lookback kind is left untouched.
        }
    }

    /// Push a nesting marker on entering a bracketed construct.
    ///
    /// The stack is an extension point owned by the consuming parser; the
    /// terminator-insertion rule above does not consult it. Push and pop must
    /// balance; an unbalanced stack at end of input is a caller bug.
    pub fn push_delimiter(&mut self, marker: u32) {
        self.delimiter_stack.push(marker);
    }

    /// Pop the innermost nesting marker on leaving a bracketed construct.
    pub fn pop_delimiter(&mut self) -> Option<u32> {
        self.delimiter_stack.pop()
    }

    /// Current bracketed-construct nesting depth.
    pub fn delimiter_depth(&self) -> usize {
        self.delimiter_stack.len()
    }
}
