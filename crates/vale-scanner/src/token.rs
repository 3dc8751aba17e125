//! The token value produced by the lexical layer.

use serde::{Deserialize, Serialize};
use vale_common::Span;

use crate::syntax_kind::SyntaxKind;

/// An immutable token: kind, exact source text, and source span.
///
/// For string and character literals `literal` holds the decoded text, not
/// the quoted form. A synthesized statement terminator carries `";"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: SyntaxKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: SyntaxKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    pub fn is(&self, kind: SyntaxKind) -> bool {
        self.kind == kind
    }
}
