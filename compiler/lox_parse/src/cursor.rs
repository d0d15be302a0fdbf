//! Token cursor for navigating the token stream.
//!
//! Provides token access, one-token lookahead and consumption. Returned
//! tokens borrow from the token slice, not from the cursor, so the parser
//! can hold on to an operator while it keeps advancing.

use lox_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::recovery::TokenSet;
use crate::ParseError;

/// Stands in for the end token when a hand-built stream lacks one.
static MISSING_EOF: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    literal: None,
    line: 0,
    span: Span::DUMMY,
};

/// Cursor over a token slice.
///
/// Never moves past the first `Eof` token; a stream without one behaves as
/// if it ended with one.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Index of the current token. Used for progress checks.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&MISSING_EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token, or the current one at the start.
    pub fn previous(&self) -> &'a Token {
        match self.pos.checked_sub(1) {
            Some(prev) => self.tokens.get(prev).unwrap_or(&MISSING_EOF),
            None => self.current(),
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current().is_eof()
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Consume the current token and return it. At the end, returns the
    /// `Eof` token without moving.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !token.is_eof() {
            trace!(kind = ?token.kind, lexeme = %token.lexeme, "advance");
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<&'a Token> {
        self.check(kind).then(|| self.advance())
    }

    /// Consume the current token if its kind is in `set`.
    pub fn eat_any(&mut self, set: TokenSet) -> Option<&'a Token> {
        set.contains(self.current_kind()).then(|| self.advance())
    }

    /// Consume a token of `kind`, or fail with `message` at the current token.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected_token(self.current(), message))
        }
    }
}
