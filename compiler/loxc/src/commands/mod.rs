//! Command handlers for the `lox` CLI.
//!
//! Each submodule implements one command. Shared plumbing lives here: the
//! [`Io`] bundle every command writes through, [`CommandError`] with its
//! exit codes, and [`read_source`].

use std::io::{self, Write};

use lox_diagnostic::emitter::{ColorMode, TerminalEmitter};

use crate::reporting::emitter_for;

mod debug;
mod explain;
mod repl;

pub use debug::{lex_source, parse_source, scan_source};
pub use explain::explain_error;
pub use repl::run_prompt;

/// Exit code for a malformed command line (`EX_USAGE`).
pub const EXIT_USAGE: u8 = 64;
/// Exit code when the input has lex or parse errors (`EX_DATAERR`).
pub const EXIT_DATA_ERROR: u8 = 65;
/// Exit code when the input file cannot be read (`EX_NOINPUT`).
pub const EXIT_NO_INPUT: u8 = 66;
/// Exit code when output cannot be written (`EX_IOERR`).
pub const EXIT_IO_ERROR: u8 = 74;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error("{message}")]
    Read { path: String, message: String },
    /// Errors were found and already reported as diagnostics.
    #[error("aborting due to previous errors")]
    Reported,
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CommandError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Usage(_) => EXIT_USAGE,
            CommandError::Read { .. } => EXIT_NO_INPUT,
            CommandError::Reported => EXIT_DATA_ERROR,
            CommandError::Output(_) => EXIT_IO_ERROR,
        }
    }
}

/// Output streams and rendering options for one command.
pub struct Io<'w> {
    /// Command results.
    pub out: &'w mut dyn Write,
    /// Diagnostics.
    pub err: &'w mut dyn Write,
    pub color: ColorMode,
    /// Whether `err` is a terminal, for [`ColorMode::Auto`].
    pub is_tty: bool,
}

impl<'w> Io<'w> {
    pub fn new(out: &'w mut dyn Write, err: &'w mut dyn Write) -> Self {
        Io {
            out,
            err,
            color: ColorMode::Never,
            is_tty: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ColorMode, is_tty: bool) -> Self {
        self.color = color;
        self.is_tty = is_tty;
        self
    }

    /// Diagnostic emitter over `err` that quotes `source`.
    fn emitter<'s>(
        &'s mut self,
        path: &str,
        source: &str,
    ) -> TerminalEmitter<&'s mut (dyn Write + 'w)> {
        emitter_for(&mut *self.err, self.color, self.is_tty, path, source)
    }
}

/// Read a source file, mapping failures to a user-facing message.
pub fn read_source(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| {
        let message = match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        };
        CommandError::Read {
            path: path.to_string(),
            message,
        }
    })
}
