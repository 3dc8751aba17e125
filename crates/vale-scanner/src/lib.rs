//! Lexical analysis for the vale front-end.
//!
//! This crate provides the raw tokenization phase:
//! - `SyntaxKind` - token kinds, with keyword and classification helpers
//! - `Token` - a kind/literal/span triple
//! - `Scanner` - the character-level tokenizer, one raw token per `scan()`
//! - `ScanError` - the single failure taxonomy of the lexical layer
//!
//! The scanner emits newlines as real tokens (`NewLineTrivia`); deciding
//! whether a newline terminates a statement is the job of the token filter in
//! `vale-parser`, not of this crate.

pub mod syntax_kind;
pub use syntax_kind::{
    SyntaxKind, keyword_to_text, text_to_keyword, token_is_identifier_or_keyword, token_is_keyword,
    token_is_punctuation,
};

pub mod token;
pub use token::Token;

pub mod error;
pub use error::ScanError;

pub mod scanner;
pub use scanner::Scanner;
