//! Token types produced by the lexer.

mod kind;
mod literal;

pub use kind::TokenKind;
pub use literal::LiteralValue;

use std::fmt;

use super::Span;

/// A classified lexeme.
///
/// `lexeme` is the exact source text, except for the synthetic `Eof` token
/// whose lexeme is empty. `literal` is only set for `Number` and `String`.
#[derive(Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Option<LiteralValue>,
    /// 1-based source line.
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
            span,
        }
    }

    #[must_use]
    pub fn with_literal(mut self, literal: LiteralValue) -> Self {
        self.literal = Some(literal);
        self
    }

    /// The synthetic end-of-input token at byte `offset`.
    pub fn eof(line: u32, offset: u32) -> Self {
        Token::new(TokenKind::Eof, "", line, Span::point(offset))
    }

    /// Token with no source location, for building trees by hand.
    pub fn synthetic(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token::new(kind, lexeme, 0, Span::DUMMY)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.lexeme, self.span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.kind, self.lexeme)?;
        match &self.literal {
            Some(value) => write!(f, " {value}"),
            None => f.write_str(" null"),
        }
    }
}

#[cfg(test)]
mod tests;
