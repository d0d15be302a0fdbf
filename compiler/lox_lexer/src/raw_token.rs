//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived pattern set. Fixed spellings win
//! over the identifier regex when both match the same text, so `and` is a
//! keyword while `android` is still an identifier.

use logos::{Lexer, Logos};
use lox_ir::TokenKind;

/// Why logos could not produce a token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RawError {
    /// No pattern matches the next character.
    #[default]
    Unrecognized,
    /// A `"` with no closing quote on the same line.
    UnterminatedString,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = RawError)]
pub(crate) enum RawToken {
    #[token("and")]
    And,
    #[token("class")]
    Class,
    #[token("else")]
    Else,
    #[token("false")]
    False,
    #[token("for")]
    For,
    #[token("fun")]
    Fun,
    #[token("if")]
    If,
    #[token("nil")]
    Nil,
    #[token("or")]
    Or,
    #[token("print")]
    Print,
    #[token("return")]
    Return,
    #[token("super")]
    Super,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("var")]
    Var,
    #[token("while")]
    While,

    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,

    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[token(";")]
    Semicolon,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,
    #[token("=")]
    Equal,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,

    /// `//` up to, not including, the newline.
    #[regex(r"//[^\n]*")]
    LineComment,

    /// Any run of Unicode whitespace, e.g. a no-break space.
    #[regex(r"\s+")]
    Whitespace,

    /// From the opening quote to the last quote on the same line.
    #[token("\"", string_literal)]
    String,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+")]
    Float,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
}

/// Extend a string token to the last `"` before the end of the line.
///
/// On failure the token still covers the rest of the line, so the error
/// span points at the whole unterminated literal.
fn string_literal(lex: &mut Lexer<'_, RawToken>) -> Result<(), RawError> {
    let rest = lex.remainder();
    let line_end = rest.find('\n').unwrap_or(rest.len());
    match rest[..line_end].rfind('"') {
        Some(close) => {
            lex.bump(close + 1);
            Ok(())
        }
        None => {
            lex.bump(line_end);
            Err(RawError::UnterminatedString)
        }
    }
}

impl RawToken {
    /// The token kind of a lexeme, or `None` for comments and whitespace.
    pub(crate) fn kind(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::And => TokenKind::And,
            RawToken::Class => TokenKind::Class,
            RawToken::Else => TokenKind::Else,
            RawToken::False => TokenKind::False,
            RawToken::For => TokenKind::For,
            RawToken::Fun => TokenKind::Fun,
            RawToken::If => TokenKind::If,
            RawToken::Nil => TokenKind::Nil,
            RawToken::Or => TokenKind::Or,
            RawToken::Print => TokenKind::Print,
            RawToken::Return => TokenKind::Return,
            RawToken::Super => TokenKind::Super,
            RawToken::This => TokenKind::This,
            RawToken::True => TokenKind::True,
            RawToken::Var => TokenKind::Var,
            RawToken::While => TokenKind::While,

            RawToken::EqualEqual => TokenKind::EqualEqual,
            RawToken::BangEqual => TokenKind::BangEqual,
            RawToken::LessEqual => TokenKind::LessEqual,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,

            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::LeftBrace => TokenKind::LeftBrace,
            RawToken::RightBrace => TokenKind::RightBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Equal => TokenKind::Equal,
            RawToken::Less => TokenKind::Less,
            RawToken::Greater => TokenKind::Greater,

            RawToken::String => TokenKind::String,
            RawToken::Integer | RawToken::Float => TokenKind::Number,
            RawToken::Identifier => TokenKind::Identifier,

            RawToken::LineComment | RawToken::Whitespace => return None,
        };
        Some(kind)
    }
}
