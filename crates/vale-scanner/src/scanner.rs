//! The character-level scanner.

use tracing::trace;
use vale_common::{Position, Span};

use crate::error::ScanError;
use crate::syntax_kind::{SyntaxKind, text_to_keyword};
use crate::token::Token;

/// Character-level tokenizer. One raw token per [`Scanner::scan`] call.
///
/// Whitespace (space, tab, carriage return) and comments are skipped inside
/// `scan()`; a line feed is a real token (`NewLineTrivia`) because the layer
/// above decides whether it terminates a statement. At end of input `scan()`
/// returns an `EndOfFileToken` with a zero-width span, repeatedly if called
/// again.
pub struct Scanner {
    chars: Vec<char>,
    pos: Position,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: Position::default(),
        }
    }

    /// The current scan position (start of the next unconsumed character).
    pub fn pos(&self) -> Position {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos.offset).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos.offset + 1).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos.offset += 1;
        if ch == '\n' {
            self.pos.line += 1;
            self.pos.column = 0;
        } else {
            self.pos.column += 1;
        }
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn text_from(&self, begin: Position) -> String {
        self.chars[begin.offset..self.pos.offset].iter().collect()
    }

    /// Scan one raw token.
    pub fn scan(&mut self) -> Result<Token, ScanError> {
        loop {
            self.skip_whitespace();

            let begin = self.pos;
            let Some(ch) = self.peek() else {
                return Ok(Token::new(SyntaxKind::EndOfFileToken, "", Span::empty(begin)));
            };

            match ch {
                '\n' => {
                    self.bump();
                    return Ok(Token::new(
                        SyntaxKind::NewLineTrivia,
                        "\n",
                        Span::new(begin, self.pos),
                    ));
                }
                '/' if self.peek_next() == Some('/') => self.skip_line_comment(),
                '/' if self.peek_next() == Some('*') => self.skip_block_comment()?,
                c if c.is_ascii_alphabetic() || c == '_' => return Ok(self.scan_identifier(begin)),
                c if c.is_ascii_digit() => return self.scan_number(begin),
                '"' => return self.scan_string(begin),
                '\'' => return self.scan_character(begin),
                c if c.is_ascii_punctuation() => return self.scan_operator(begin, c),
                _ => {
                    self.bump();
                    return Err(ScanError::UnexpectedCharacter { ch, pos: begin });
                }
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r')) {
            self.bump();
        }
    }

    fn skip_line_comment(&mut self) {
        let begin = self.pos;
        self.bump();
        self.bump();
        // Stop before the line feed: the newline itself stays visible to the
        // statement-terminator rule above this layer.
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.bump();
        }
        trace!(begin = %begin, "skipped line comment");
    }

    fn skip_block_comment(&mut self) -> Result<(), ScanError> {
        let begin = self.pos;
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                None => {
                    return Err(ScanError::UnterminatedComment {
                        span: Span::new(begin, self.pos),
                    });
                }
                Some('*') if self.peek() == Some('/') => {
                    self.bump();
                    trace!(begin = %begin, "skipped block comment");
                    return Ok(());
                }
                Some(_) => {}
            }
        }
    }

    fn scan_identifier(&mut self, begin: Position) -> Token {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                self.bump();
            } else {
                break;
            }
        }
        let text = self.text_from(begin);
        let kind = text_to_keyword(&text).unwrap_or(SyntaxKind::Identifier);
        Token::new(kind, text, Span::new(begin, self.pos))
    }

    fn scan_number(&mut self, begin: Position) -> Result<Token, ScanError> {
        if self.peek() == Some('0') && matches!(self.peek_next(), Some('x' | 'o' | 'b')) {
            self.bump();
            let radix = match self.bump() {
                Some('x') => 16,
                Some('o') => 8,
                _ => 2,
            };
            let mut digits = 0usize;
            while let Some(ch) = self.peek() {
                if ch.is_digit(radix) {
                    self.bump();
                    digits += 1;
                } else {
                    break;
                }
            }
            if digits == 0 {
                return Err(ScanError::MalformedNumber {
                    span: Span::new(begin, self.pos),
                });
            }
            return Ok(Token::new(
                SyntaxKind::NumericLiteral,
                self.text_from(begin),
                Span::new(begin, self.pos),
            ));
        }

        while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.bump();
        }
        if self.peek() == Some('.') && matches!(self.peek_next(), Some(ch) if ch.is_ascii_digit()) {
            self.bump();
            while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
                self.bump();
            }
        }
        Ok(Token::new(
            SyntaxKind::NumericLiteral,
            self.text_from(begin),
            Span::new(begin, self.pos),
        ))
    }

    fn scan_string(&mut self, begin: Position) -> Result<Token, ScanError> {
        self.bump();
        let mut decoded = String::new();
        loop {
            match self.bump() {
                None => {
                    return Err(ScanError::UnterminatedString {
                        span: Span::new(begin, self.pos),
                    });
                }
                Some('"') => break,
                Some('\\') => decoded.push(self.scan_escape()?),
                Some(ch) => decoded.push(ch),
            }
        }
        Ok(Token::new(
            SyntaxKind::StringLiteral,
            decoded,
            Span::new(begin, self.pos),
        ))
    }

    fn scan_character(&mut self, begin: Position) -> Result<Token, ScanError> {
        self.bump();
        let decoded = match self.peek() {
            None => {
                return Err(ScanError::UnterminatedCharacter {
                    span: Span::new(begin, self.pos),
                });
            }
            Some('\'') => {
                self.bump();
                return Err(ScanError::EmptyCharacter {
                    span: Span::new(begin, self.pos),
                });
            }
            Some('\\') => {
                self.bump();
                self.scan_escape()?
            }
            Some(ch) => {
                self.bump();
                ch
            }
        };
        if self.bump() != Some('\'') {
            return Err(ScanError::UnterminatedCharacter {
                span: Span::new(begin, self.pos),
            });
        }
        Ok(Token::new(
            SyntaxKind::CharacterLiteral,
            decoded.to_string(),
            Span::new(begin, self.pos),
        ))
    }

    // Called with the backslash already consumed.
    fn scan_escape(&mut self) -> Result<char, ScanError> {
        let begin = self.pos;
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('0') => Ok('\0'),
            Some('\\') => Ok('\\'),
            Some('"') => Ok('"'),
            Some('\'') => Ok('\''),
            Some('x') => self.scan_unicode_escape(begin, 2),
            Some('u') => self.scan_unicode_escape(begin, 4),
            Some('U') => self.scan_unicode_escape(begin, 8),
            _ => Err(ScanError::InvalidEscape {
                span: Span::new(begin, self.pos),
            }),
        }
    }

    fn scan_unicode_escape(&mut self, begin: Position, len: usize) -> Result<char, ScanError> {
        let mut value = 0u32;
        for _ in 0..len {
            let digit = self
                .bump()
                .and_then(|ch| ch.to_digit(16))
                .ok_or_else(|| ScanError::InvalidEscape {
                    span: Span::new(begin, self.pos),
                })?;
            value = value * 16 + digit;
        }
        char::from_u32(value).ok_or_else(|| ScanError::InvalidEscape {
            span: Span::new(begin, self.pos),
        })
    }

    fn scan_operator(&mut self, begin: Position, first: char) -> Result<Token, ScanError> {
        self.bump();
        let kind = match first {
            '{' => SyntaxKind::OpenBraceToken,
            '}' => SyntaxKind::CloseBraceToken,
            '(' => SyntaxKind::OpenParenToken,
            ')' => SyntaxKind::CloseParenToken,
            '[' => SyntaxKind::OpenBracketToken,
            ']' => SyntaxKind::CloseBracketToken,
            ';' => SyntaxKind::SemicolonToken,
            ',' => SyntaxKind::CommaToken,
            ':' => SyntaxKind::ColonToken,
            '.' => SyntaxKind::DotToken,
            '+' => {
                if self.eat('+') {
                    SyntaxKind::PlusPlusToken
                } else if self.eat('=') {
                    SyntaxKind::PlusEqualsToken
                } else {
                    SyntaxKind::PlusToken
                }
            }
            '-' => {
                if self.eat('-') {
                    SyntaxKind::MinusMinusToken
                } else if self.eat('=') {
                    SyntaxKind::MinusEqualsToken
                } else if self.eat('>') {
                    SyntaxKind::MinusGreaterThanToken
                } else {
                    SyntaxKind::MinusToken
                }
            }
            '*' => {
                if self.eat('=') {
                    SyntaxKind::AsteriskEqualsToken
                } else {
                    SyntaxKind::AsteriskToken
                }
            }
            '/' => {
                if self.eat('=') {
                    SyntaxKind::SlashEqualsToken
                } else {
                    SyntaxKind::SlashToken
                }
            }
            '%' => {
                if self.eat('=') {
                    SyntaxKind::PercentEqualsToken
                } else {
                    SyntaxKind::PercentToken
                }
            }
            '=' => {
                if self.eat('=') {
                    SyntaxKind::EqualsEqualsToken
                } else if self.eat('>') {
                    SyntaxKind::EqualsGreaterThanToken
                } else {
                    SyntaxKind::EqualsToken
                }
            }
            '!' => {
                if self.eat('=') {
                    SyntaxKind::ExclamationEqualsToken
                } else {
                    SyntaxKind::ExclamationToken
                }
            }
            '<' => {
                if self.eat('=') {
                    SyntaxKind::LessThanEqualsToken
                } else if self.eat('<') {
                    SyntaxKind::LessThanLessThanToken
                } else {
                    SyntaxKind::LessThanToken
                }
            }
            '>' => {
                if self.eat('=') {
                    SyntaxKind::GreaterThanEqualsToken
                } else if self.eat('>') {
                    SyntaxKind::GreaterThanGreaterThanToken
                } else {
                    SyntaxKind::GreaterThanToken
                }
            }
            '&' => {
                if self.eat('&') {
                    SyntaxKind::AmpersandAmpersandToken
                } else if self.eat('=') {
                    SyntaxKind::AmpersandEqualsToken
                } else {
                    SyntaxKind::AmpersandToken
                }
            }
            '|' => {
                if self.eat('|') {
                    SyntaxKind::BarBarToken
                } else if self.eat('=') {
                    SyntaxKind::BarEqualsToken
                } else {
                    SyntaxKind::BarToken
                }
            }
            '^' => {
                if self.eat('=') {
                    SyntaxKind::CaretEqualsToken
                } else {
                    SyntaxKind::CaretToken
                }
            }
            '~' => SyntaxKind::TildeToken,
            _ => {
                return Err(ScanError::UnexpectedCharacter {
                    ch: first,
                    pos: begin,
                });
            }
        };
        Ok(Token::new(
            kind,
            self.text_from(begin),
            Span::new(begin, self.pos),
        ))
    }
}
