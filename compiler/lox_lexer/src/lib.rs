//! Scanner for Lox using logos.
//!
//! Source text is split into maximal lexemes by a fixed, prioritized pattern
//! set (keywords, two- and one-character operators, comments, whitespace,
//! strings, numbers, identifiers). Comments and whitespace are matched like
//! any other lexeme and then dropped, so the matched spans always partition
//! the input. The first character that no pattern accepts ends the scan with
//! a [`LexError`] naming its line and column.
//!
//! - [`scan`] and [`scan_line`] return the kept lexemes as slices of the input.
//! - [`tokenize`] classifies them into [`Token`]s and appends `Eof`.

mod lex_error;
mod raw_token;

use logos::Logos;
use lox_ir::{LiteralValue, Span, Token, TokenKind};
use tracing::{debug, trace};

pub use lex_error::{LexError, LexErrorKind};

use raw_token::{RawError, RawToken};

/// Split `source` into lexemes, dropping comments and whitespace.
///
/// Fails on the first unmatched character or unterminated string; no prefix
/// of the result is returned in that case.
pub fn scan(source: &str) -> Result<Vec<&str>, LexError> {
    let lexemes = Lexemes::new(source)?
        .map(|lexeme| lexeme.map(|l| l.text))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(bytes = source.len(), lexemes = lexemes.len(), "scanned source");
    Ok(lexemes)
}

/// [`scan`] for a single line, e.g. one REPL entry.
///
/// A trailing `\n` or `\r\n` is not part of the line.
pub fn scan_line(line: &str) -> Result<Vec<&str>, LexError> {
    let line = match line.strip_suffix('\n') {
        Some(rest) => rest.strip_suffix('\r').unwrap_or(rest),
        None => line,
    };
    scan(line)
}

/// Scan `source` into classified tokens, ending with `Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexemes = Lexemes::new(source)?;
    let mut tokens = Vec::new();
    for lexeme in lexemes.by_ref() {
        tokens.push(lexeme?.into_token());
    }
    tokens.push(Token::eof(lexemes.line, lexemes.end));
    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        lines = lexemes.line,
        "tokenized source"
    );
    Ok(tokens)
}

/// A kept lexeme and where it starts.
struct Lexeme<'src> {
    kind: TokenKind,
    raw: RawToken,
    text: &'src str,
    span: Span,
    line: u32,
}

impl Lexeme<'_> {
    fn into_token(self) -> Token {
        let literal = match self.raw {
            RawToken::Integer | RawToken::Float => {
                self.text.parse::<f64>().ok().map(LiteralValue::Number)
            }
            RawToken::String => self
                .text
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .map(LiteralValue::from),
            _ => None,
        };
        let token = Token::new(self.kind, self.text, self.line, self.span);
        match literal {
            Some(value) => token.with_literal(value),
            None => token,
        }
    }
}

/// Non-trivia lexemes of a source, in order. Ends after the first error.
struct Lexemes<'src> {
    source: &'src str,
    logos: logos::Lexer<'src, RawToken>,
    /// Line of the next lexeme.
    line: u32,
    /// End of the last matched span.
    end: u32,
    failed: bool,
}

impl<'src> Lexemes<'src> {
    fn new(source: &'src str) -> Result<Self, LexError> {
        if u32::try_from(source.len()).is_err() {
            return Err(LexError::too_large(source.len()));
        }
        Ok(Lexemes {
            source,
            logos: RawToken::lexer(source),
            line: 1,
            end: 0,
            failed: false,
        })
    }
}

impl<'src> Iterator for Lexemes<'src> {
    type Item = Result<Lexeme<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let result = self.logos.next()?;
            let Ok(span) = Span::try_from_range(self.logos.span()) else {
                self.failed = true;
                return Some(Err(LexError::too_large(self.source.len())));
            };
            let text = self.logos.slice();
            debug_assert_eq!(span.start, self.end, "lexemes must partition the source");
            self.end = span.end;

            let raw = match result {
                Ok(raw) => raw,
                Err(err) => {
                    self.failed = true;
                    let kind = match err {
                        RawError::Unrecognized => {
                            LexErrorKind::UnexpectedCharacter(text.chars().next().unwrap_or('\0'))
                        }
                        RawError::UnterminatedString => LexErrorKind::UnterminatedString,
                    };
                    let error = LexError::at(kind, self.source, span);
                    debug!(%error, "scan failed");
                    return Some(Err(error));
                }
            };

            let line = self.line;
            if raw == RawToken::Whitespace {
                let newlines = text.bytes().filter(|&b| b == b'\n').count();
                self.line = self
                    .line
                    .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));
            }

            let Some(kind) = raw.kind() else {
                continue;
            };
            debug_assert!(
                kind != TokenKind::Identifier || TokenKind::keyword(text).is_none(),
                "keyword {text:?} scanned as an identifier"
            );
            trace!(?kind, lexeme = text, line, "lexeme");
            return Some(Ok(Lexeme {
                kind,
                raw,
                text,
                span,
                line,
            }));
        }
    }
}

#[cfg(test)]
mod tests;
