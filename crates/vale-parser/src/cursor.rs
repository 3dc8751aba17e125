//! The token cursor a parser drives.

use vale_scanner::{ScanError, SyntaxKind, Token};

use crate::filter::TokenFilter;

/// Pull-style cursor over a [`TokenFilter`].
///
/// Owns the "current token" explicitly instead of exposing a shared mutable
/// field, and keeps at most one token of cached lookahead. Every operation
/// that can hit a scan failure returns it to the caller; nothing here aborts.
pub struct TokenCursor {
    filter: TokenFilter,
    current: Token,
    lookahead: Option<Token>,
}

impl TokenCursor {
    /// Build a cursor and prime the first current token.
    pub fn new(mut filter: TokenFilter) -> Result<Self, ScanError> {
        let current = filter.next_token()?;
        Ok(Self {
            filter,
            current,
            lookahead: None,
        })
    }

    pub fn from_source(source: &str) -> Result<Self, ScanError> {
        Self::new(TokenFilter::from_source(source))
    }

    /// The token the parser is currently looking at.
    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn is_kind(&self, kind: SyntaxKind) -> bool {
        self.current.kind == kind
    }

    pub fn at_end(&self) -> bool {
        self.current.kind == SyntaxKind::EndOfFileToken
    }

    /// Replace the current token with the next grammar-ready one.
    ///
    /// A pending lookahead token is consumed first. On a scan failure the
    /// current token is left in place and the error is returned.
    pub fn advance(&mut self) -> Result<&Token, ScanError> {
        self.current = match self.lookahead.take() {
            Some(token) => token,
            None => self.filter.next_token()?,
        };
        Ok(&self.current)
    }

    /// Look one token past the current one without consuming it.
    pub fn peek(&mut self) -> Result<&Token, ScanError> {
        match self.lookahead {
            Some(ref token) => Ok(token),
            None => {
                let token = self.filter.next_token()?;
                Ok(self.lookahead.insert(token))
            }
        }
    }

    /// See [`TokenFilter::push_delimiter`].
    pub fn push_delimiter(&mut self, marker: u32) {
        self.filter.push_delimiter(marker);
    }

    /// See [`TokenFilter::pop_delimiter`].
    pub fn pop_delimiter(&mut self) -> Option<u32> {
        self.filter.pop_delimiter()
    }

    /// See [`TokenFilter::delimiter_depth`].
    pub fn delimiter_depth(&self) -> usize {
        self.filter.delimiter_depth()
    }
}
