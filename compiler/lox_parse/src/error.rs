//! Parse error types.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, Token};

/// A syntax error at one token.
///
/// Renders in the classic one-line form, `[line 3] Error at ')': Expect
/// expression.`, or `at end` when the input ran out.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("[line {line}] Error {}: {message}", location(.found))]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// Span of the offending token.
    pub span: Span,
    pub line: u32,
    /// Lexeme of the offending token; `None` at end of input.
    pub found: Option<String>,
}

impl ParseError {
    #[cold]
    pub fn new(code: ErrorCode, token: &Token, message: impl Into<String>) -> Self {
        ParseError {
            code,
            message: message.into(),
            span: token.span,
            line: token.line,
            found: (!token.is_eof()).then(|| token.lexeme.clone()),
        }
    }

    /// No expression can start with `token`.
    #[cold]
    pub fn expected_expression(token: &Token) -> Self {
        ParseError::new(ErrorCode::E1001, token, "Expect expression.")
    }

    /// A required token is missing in front of `token`.
    #[cold]
    pub fn expected_token(token: &Token, message: &str) -> Self {
        ParseError::new(ErrorCode::E1002, token, message)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.found {
            Some(lexeme) => format!("found `{lexeme}`"),
            None => "found end of input".to_string(),
        };
        Diagnostic::new(self.code, self.message.clone()).with_label(self.span, label)
    }
}

fn location(found: &Option<String>) -> String {
    match found {
        Some(lexeme) => format!("at '{lexeme}'"),
        None => "at end".to_string(),
    }
}
