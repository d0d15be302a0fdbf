//! Lexer error types.

use std::fmt;

use lox_ir::Span;

/// The first malformed region of a scanned source.
///
/// Scanning stops here; no token before it is returned. `line` and `column`
/// are 1-based, with the column counted in characters.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("[line {line}:{column}] Error: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LexErrorKind {
    /// No pattern matches this character.
    UnexpectedCharacter(char),
    /// A `"` with no closing quote on its line.
    UnterminatedString,
    /// The source does not fit 32-bit byte offsets.
    SourceTooLarge { len: usize },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnexpectedCharacter(c) => write!(f, "Unexpected character {c:?}."),
            LexErrorKind::UnterminatedString => f.write_str("Unterminated string."),
            LexErrorKind::SourceTooLarge { len } => {
                write!(f, "Source of {len} bytes exceeds the 4 GiB limit.")
            }
        }
    }
}

impl LexError {
    /// The source is past the 32-bit offset limit; reported before any token.
    pub(crate) fn too_large(len: usize) -> Self {
        LexError {
            kind: LexErrorKind::SourceTooLarge { len },
            span: Span::DUMMY,
            line: 1,
            column: 1,
        }
    }

    /// Locate an error at `span` of `source`.
    pub(crate) fn at(kind: LexErrorKind, source: &str, span: Span) -> Self {
        let (line, column) = line_column(source, span.start as usize);
        LexError {
            kind,
            span,
            line,
            column,
        }
    }
}

/// 1-based line and character column of byte `offset`.
fn line_column(source: &str, offset: usize) -> (u32, u32) {
    let before = &source[..offset];
    let line_start = before.rfind('\n').map_or(0, |nl| nl + 1);
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let column = before[line_start..].chars().count() + 1;
    (
        u32::try_from(line).unwrap_or(u32::MAX),
        u32::try_from(column).unwrap_or(u32::MAX),
    )
}
