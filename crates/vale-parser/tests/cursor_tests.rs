//! Tests for the token cursor.

use vale_parser::TokenCursor;
use vale_scanner::{ScanError, SyntaxKind};

#[test]
fn new_primes_the_first_token() {
    let cursor = TokenCursor::from_source("x y").unwrap();
    assert_eq!(cursor.current().kind, SyntaxKind::Identifier);
    assert_eq!(cursor.current().literal, "x");
    assert!(!cursor.at_end());
}

#[test]
fn new_on_empty_input_is_at_end() {
    let cursor = TokenCursor::from_source("").unwrap();
    assert!(cursor.at_end());
    assert!(cursor.is_kind(SyntaxKind::EndOfFileToken));
}

#[test]
fn advance_walks_the_stream() {
    let mut cursor = TokenCursor::from_source("a b").unwrap();
    assert_eq!(cursor.current().literal, "a");
    assert_eq!(cursor.advance().unwrap().literal, "b");
    assert_eq!(cursor.advance().unwrap().kind, SyntaxKind::EndOfFileToken);
    assert!(cursor.at_end());
}

#[test]
fn peek_does_not_move_the_cursor() {
    let mut cursor = TokenCursor::from_source("a b c").unwrap();
    assert_eq!(cursor.peek().unwrap().literal, "b");
    assert_eq!(cursor.current().literal, "a");
    // The cached lookahead is what advance consumes next.
    assert_eq!(cursor.advance().unwrap().literal, "b");
    assert_eq!(cursor.advance().unwrap().literal, "c");
}

#[test]
fn terminator_insertion_is_visible_through_the_cursor() {
    let mut cursor = TokenCursor::from_source("a\nb").unwrap();
    assert_eq!(cursor.current().kind, SyntaxKind::Identifier);
    assert_eq!(cursor.advance().unwrap().kind, SyntaxKind::SemicolonToken);
    assert_eq!(cursor.advance().unwrap().kind, SyntaxKind::Identifier);
}

#[test]
fn scan_failure_during_priming() {
    assert!(matches!(
        TokenCursor::from_source("\"oops"),
        Err(ScanError::UnterminatedString { .. })
    ));
}

#[test]
fn scan_failure_during_advance_keeps_current() {
    let mut cursor = TokenCursor::from_source("x \"oops").unwrap();
    assert!(matches!(
        cursor.advance(),
        Err(ScanError::UnterminatedString { .. })
    ));
    // The caller decides what to do; the cursor state is intact.
    assert_eq!(cursor.current().literal, "x");
}

#[test]
fn scan_failure_during_peek() {
    let mut cursor = TokenCursor::from_source("x @").unwrap();
    assert!(matches!(
        cursor.peek(),
        Err(ScanError::UnexpectedCharacter { ch: '@', .. })
    ));
    assert_eq!(cursor.current().literal, "x");
}

#[test]
fn delimiter_stack_is_delegated() {
    let mut cursor = TokenCursor::from_source("( )").unwrap();
    cursor.push_delimiter(7);
    assert_eq!(cursor.delimiter_depth(), 1);
    assert_eq!(cursor.pop_delimiter(), Some(7));
    assert_eq!(cursor.pop_delimiter(), None);
}
