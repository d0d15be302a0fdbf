//! Diagnostic Emitters
//!
//! An emitter turns [`Diagnostic`]s into output. The terminal emitter is the
//! only format the front end needs; the trait keeps drivers independent of it.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Close a batch with an `aborting due to N previous errors` line.
    /// Nothing is written for zero errors.
    fn emit_summary(&mut self, error_count: usize);
}
