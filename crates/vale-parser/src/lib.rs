//! Grammar-ready tokens for the vale front-end.
//!
//! This crate sits between the raw scanner and the grammar proper:
//! - `TokenFilter` - wraps a `Scanner` and applies automatic
//!   statement-terminator insertion: a newline after a token that can legally
//!   end a statement becomes an explicit `SemicolonToken`, every other
//!   newline disappears from the stream
//! - `TokenCursor` - the pull-style cursor a parser drives, holding the
//!   current token and one token of cached lookahead
//!
//! The output stream has no newline ambiguity left; a parser can consume it
//! token by token without ever seeing `NewLineTrivia`.

pub mod filter;
pub use filter::{TokenFilter, token_completes_statement};

pub mod cursor;
pub use cursor::TokenCursor;
