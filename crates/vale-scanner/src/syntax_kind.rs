//! Token kinds and classification helpers.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// The lexical category of a token.
///
/// Discriminant ranges are meaningful: punctuation spans
/// `OpenBraceToken..=TildeToken` and keywords span
/// `BreakKeyword..=VarKeyword`; the `token_is_*` helpers rely on this
/// ordering.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,
    EndOfFileToken,

    // Trivia surfaced as a raw token; everything else insignificant
    // (whitespace, comments) is skipped inside the scanner.
    NewLineTrivia,

    Identifier,
    NumericLiteral,
    StringLiteral,
    CharacterLiteral,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    SemicolonToken,
    CommaToken,
    ColonToken,
    DotToken,
    PlusToken,
    PlusPlusToken,
    PlusEqualsToken,
    MinusToken,
    MinusMinusToken,
    MinusEqualsToken,
    MinusGreaterThanToken,
    AsteriskToken,
    AsteriskEqualsToken,
    SlashToken,
    SlashEqualsToken,
    PercentToken,
    PercentEqualsToken,
    EqualsToken,
    EqualsEqualsToken,
    EqualsGreaterThanToken,
    ExclamationToken,
    ExclamationEqualsToken,
    LessThanToken,
    LessThanEqualsToken,
    LessThanLessThanToken,
    GreaterThanToken,
    GreaterThanEqualsToken,
    GreaterThanGreaterThanToken,
    AmpersandToken,
    AmpersandAmpersandToken,
    AmpersandEqualsToken,
    BarToken,
    BarBarToken,
    BarEqualsToken,
    CaretToken,
    CaretEqualsToken,
    TildeToken,

    // Keywords
    BreakKeyword,
    CaseKeyword,
    ConstKeyword,
    ContinueKeyword,
    DefaultKeyword,
    ElseKeyword,
    ForKeyword,
    FuncKeyword,
    IfKeyword,
    ImportKeyword,
    InterfaceKeyword,
    MapKeyword,
    ReturnKeyword,
    StructKeyword,
    SwitchKeyword,
    TypeKeyword,
    VarKeyword,
}

static KEYWORDS: Lazy<FxHashMap<&'static str, SyntaxKind>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    map.insert("break", SyntaxKind::BreakKeyword);
    map.insert("case", SyntaxKind::CaseKeyword);
    map.insert("const", SyntaxKind::ConstKeyword);
    map.insert("continue", SyntaxKind::ContinueKeyword);
    map.insert("default", SyntaxKind::DefaultKeyword);
    map.insert("else", SyntaxKind::ElseKeyword);
    map.insert("for", SyntaxKind::ForKeyword);
    map.insert("func", SyntaxKind::FuncKeyword);
    map.insert("if", SyntaxKind::IfKeyword);
    map.insert("import", SyntaxKind::ImportKeyword);
    map.insert("interface", SyntaxKind::InterfaceKeyword);
    map.insert("map", SyntaxKind::MapKeyword);
    map.insert("return", SyntaxKind::ReturnKeyword);
    map.insert("struct", SyntaxKind::StructKeyword);
    map.insert("switch", SyntaxKind::SwitchKeyword);
    map.insert("type", SyntaxKind::TypeKeyword);
    map.insert("var", SyntaxKind::VarKeyword);
    map
});

/// Look up the keyword kind for an identifier-shaped text, if any.
pub fn text_to_keyword(text: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(text).copied()
}

/// The source text of a keyword kind.
pub fn keyword_to_text(kind: SyntaxKind) -> Option<&'static str> {
    match kind {
        SyntaxKind::BreakKeyword => Some("break"),
        SyntaxKind::CaseKeyword => Some("case"),
        SyntaxKind::ConstKeyword => Some("const"),
        SyntaxKind::ContinueKeyword => Some("continue"),
        SyntaxKind::DefaultKeyword => Some("default"),
        SyntaxKind::ElseKeyword => Some("else"),
        SyntaxKind::ForKeyword => Some("for"),
        SyntaxKind::FuncKeyword => Some("func"),
        SyntaxKind::IfKeyword => Some("if"),
        SyntaxKind::ImportKeyword => Some("import"),
        SyntaxKind::InterfaceKeyword => Some("interface"),
        SyntaxKind::MapKeyword => Some("map"),
        SyntaxKind::ReturnKeyword => Some("return"),
        SyntaxKind::StructKeyword => Some("struct"),
        SyntaxKind::SwitchKeyword => Some("switch"),
        SyntaxKind::TypeKeyword => Some("type"),
        SyntaxKind::VarKeyword => Some("var"),
        _ => None,
    }
}

pub fn token_is_keyword(kind: SyntaxKind) -> bool {
    (kind as u16) >= (SyntaxKind::BreakKeyword as u16)
        && (kind as u16) <= (SyntaxKind::VarKeyword as u16)
}

pub fn token_is_identifier_or_keyword(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Identifier || token_is_keyword(kind)
}

pub fn token_is_punctuation(kind: SyntaxKind) -> bool {
    (kind as u16) >= (SyntaxKind::OpenBraceToken as u16)
        && (kind as u16) <= (SyntaxKind::TildeToken as u16)
}
