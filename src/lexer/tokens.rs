use std::fmt::Display;

use crate::Span;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenType {
    Plus,
    Minus,
    Star,
    Slash,

    GE,
    GT,
    EQ, // not produced by the scanner
    LE, // not produced by the scanner
    LT, // not produced by the scanner

    SemiColon,
    LeftParen,
    RightParen,

    Assignment, // =

    // Reserved, no scanning rules yet
    If,
    Else,

    Identifier,

    IntLiteral,
    StringLiteral, // not produced by the scanner

    // Keywords
    Int,
}

impl Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme. `text` is exactly the matched slice of the source
/// and `span` its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenType,
    pub text: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t\t{}", self.text, self.kind)
    }
}

impl Token {
    pub fn is_one_of(&self, kinds: &[TokenType]) -> bool {
        kinds.contains(&self.kind)
    }
}
