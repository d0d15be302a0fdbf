//! Rendering of front-end errors as diagnostics.

use std::io::Write;

use lox_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_lexer::{LexError, LexErrorKind};
use lox_parse::ParseError;

/// Diagnostic for the error that stopped the scanner.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    match &err.kind {
        LexErrorKind::UnexpectedCharacter(c) => {
            Diagnostic::new(ErrorCode::E0001, format!("Unexpected character {c:?}."))
                .with_label(err.span, "no token starts with this character")
        }
        LexErrorKind::UnterminatedString => Diagnostic::new(ErrorCode::E0002, "Unterminated string.")
            .with_label(err.span, "string not closed on this line")
            .with_note("strings cannot span lines"),
        LexErrorKind::SourceTooLarge { len } => Diagnostic::new(
            ErrorCode::E0003,
            format!("Source of {len} bytes is too large to scan."),
        ),
    }
}

/// Diagnostic for one syntax error.
#[cold]
pub fn render_parse_error(err: &ParseError) -> Diagnostic {
    let diag = err.to_diagnostic();
    match err.code {
        ErrorCode::E1001 if err.found.as_deref() == Some(";") => {
            diag.with_suggestion("an operator must be followed by an operand")
        }
        _ => diag,
    }
}

/// Emitter that shows source snippets from `source`, attributed to `path`.
pub fn emitter_for<W: Write>(
    writer: W,
    color: ColorMode,
    is_tty: bool,
    path: &str,
    source: &str,
) -> TerminalEmitter<W> {
    TerminalEmitter::with_color_mode(writer, color, is_tty)
        .with_source(source)
        .with_file_path(path)
}

/// Emit every diagnostic followed by the summary line.
pub fn emit_with_summary(emitter: &mut impl DiagnosticEmitter, diagnostics: &[Diagnostic]) {
    emitter.emit_all(diagnostics);
    emitter.emit_summary(diagnostics.len());
    emitter.flush();
}
