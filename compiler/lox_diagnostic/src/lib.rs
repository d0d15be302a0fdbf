//! Diagnostic system for error reporting.
//!
//! Every front-end error is converted into a [`Diagnostic`] before it is
//! shown to a user:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - labeled spans saying where
//! - notes and suggestions
//!
//! [`emitter::TerminalEmitter`] renders diagnostics for humans, with the
//! offending source line and a caret underline when the source is known.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, LabelStyle};
pub use error_code::{ErrorCode, Phase};
