//! Inspection commands: `scan`, `lex` and `parse`.

use lox_diagnostic::Diagnostic;
use lox_ir::AstPrinter;
use tracing::{debug, info_span};

use super::{CommandError, Io};
use crate::reporting::{emit_with_summary, render_lex_error, render_parse_error};

/// Print the raw lexemes of `source`, one per line.
pub fn scan_source(path: &str, source: &str, io: &mut Io<'_>) -> Result<(), CommandError> {
    let _span = info_span!("scan", path).entered();

    match lox_lexer::scan(source) {
        Ok(lexemes) => {
            for lexeme in lexemes {
                writeln!(io.out, "{lexeme}")?;
            }
            Ok(())
        }
        Err(err) => Err(report(io, path, source, &[render_lex_error(&err)])),
    }
}

/// Print each token as `line kind lexeme literal`.
pub fn lex_source(path: &str, source: &str, io: &mut Io<'_>) -> Result<(), CommandError> {
    let _span = info_span!("lex", path).entered();

    let tokens = lox_lexer::tokenize(source)
        .map_err(|err| report(io, path, source, &[render_lex_error(&err)]))?;

    for token in &tokens {
        writeln!(io.out, "{:>4} {token}", token.line)?;
    }
    Ok(())
}

/// Print the tree of every statement that parsed, then report syntax errors.
pub fn parse_source(path: &str, source: &str, io: &mut Io<'_>) -> Result<(), CommandError> {
    let _span = info_span!("parse", path).entered();

    let tokens = lox_lexer::tokenize(source)
        .map_err(|err| report(io, path, source, &[render_lex_error(&err)]))?;
    let output = lox_parse::parse(&tokens);

    let mut printer = AstPrinter::new();
    for stmt in &output.statements {
        writeln!(io.out, "{}", printer.print_stmt(stmt))?;
    }

    if output.has_errors() {
        let diagnostics: Vec<_> = output.errors.iter().map(render_parse_error).collect();
        return Err(report(io, path, source, &diagnostics));
    }
    Ok(())
}

/// Emit `diagnostics` against `source` and return [`CommandError::Reported`].
fn report(
    io: &mut Io<'_>,
    path: &str,
    source: &str,
    diagnostics: &[Diagnostic],
) -> CommandError {
    debug!(count = diagnostics.len(), "reporting diagnostics");
    let mut emitter = io.emitter(path, source);
    emit_with_summary(&mut emitter, diagnostics);
    CommandError::Reported
}
