//! Error recovery for the parser.
//!
//! Provides token sets and panic-mode synchronization so one malformed
//! statement does not hide the errors in the statements after it.

use lox_ir::TokenKind;
use tracing::debug;

use crate::cursor::Cursor;

// TokenSet is a u64 bitset; every discriminant must fit.
const _: () = assert!(
    (TokenKind::Eof as u32) < 64,
    "TokenSet uses a u64 bitset; all discriminants must be < 64"
);

/// A set of token kinds with O(1) membership testing.
///
/// Bit `n` is set when the kind with discriminant `n` is a member.
///
/// ```ignore
/// const SIGNS: TokenSet = TokenSet::new()
///     .with(TokenKind::Plus)
///     .with(TokenKind::Minus);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind as u32))
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind as u32)) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Keywords that can only begin a statement. Recovery stops in front of them.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Skip to the start of the next statement.
///
/// Always consumes the offending token, then stops right after a `;` or in
/// front of a [`STMT_START`] keyword, or at the end of input. Returns the
/// number of tokens skipped.
pub fn synchronize(cursor: &mut Cursor<'_>) -> usize {
    let start = cursor.position();
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon
            || STMT_START.contains(cursor.current_kind())
        {
            break;
        }
        cursor.advance();
    }

    let skipped = cursor.position() - start;
    debug!(skipped, "synchronized");
    skipped
}
