//! Scan failures.

use thiserror::Error;
use vale_common::{Position, Span};

/// A failure produced by the character-level scanner.
///
/// This is the only error taxonomy of the lexical layer; the token filter and
/// cursor above it propagate these unchanged. End-of-input is not an error,
/// it is an `EndOfFileToken`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("{pos}: unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char, pos: Position },

    #[error("{span}: malformed numeric literal")]
    MalformedNumber { span: Span },

    #[error("{span}: unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("{span}: unterminated character literal")]
    UnterminatedCharacter { span: Span },

    #[error("{span}: empty character literal")]
    EmptyCharacter { span: Span },

    #[error("{span}: invalid escape sequence")]
    InvalidEscape { span: Span },

    #[error("{span}: unterminated block comment")]
    UnterminatedComment { span: Span },
}
