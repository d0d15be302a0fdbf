//! The interactive prompt.

use std::io::{self, BufRead};

use lox_diagnostic::emitter::DiagnosticEmitter;
use lox_diagnostic::Diagnostic;
use lox_ir::AstPrinter;
use tracing::debug;

use super::{CommandError, Io};
use crate::reporting::{render_lex_error, render_parse_error};

const PROMPT: &str = "> ";
const REPL_PATH: &str = "<repl>";

/// Read lines from `input` until it ends, printing the tree of each.
///
/// A line may hold statements or a bare expression. Errors are reported and
/// the session carries on with the next line.
pub fn run_prompt(mut input: impl BufRead, io: &mut Io<'_>) -> Result<(), CommandError> {
    let mut printer = AstPrinter::new();
    let mut line = String::new();

    loop {
        write!(io.out, "{PROMPT}")?;
        io.out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(io.out)?;
            return Ok(());
        }
        run_line(line.trim_end_matches(['\n', '\r']), io, &mut printer)?;
    }
}

fn run_line(line: &str, io: &mut Io<'_>, printer: &mut AstPrinter) -> io::Result<()> {
    let tokens = match lox_lexer::tokenize(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            emit(io, line, &[render_lex_error(&err)]);
            return Ok(());
        }
    };

    let output = lox_parse::parse(&tokens);
    if !output.has_errors() {
        for stmt in &output.statements {
            writeln!(io.out, "{}", printer.print_stmt(stmt))?;
        }
        return Ok(());
    }

    // `1 + 2` without the `;` is a fine thing to type at a prompt.
    if let Ok(expr) = lox_parse::parse_expression(&tokens) {
        debug!("line parsed as a bare expression");
        return writeln!(io.out, "{}", printer.print_expr(&expr));
    }

    let diagnostics: Vec<_> = output.errors.iter().map(render_parse_error).collect();
    emit(io, line, &diagnostics);
    Ok(())
}

fn emit(io: &mut Io<'_>, line: &str, diagnostics: &[Diagnostic]) {
    let mut emitter = io.emitter(REPL_PATH, line);
    emitter.emit_all(diagnostics);
    emitter.flush();
}
