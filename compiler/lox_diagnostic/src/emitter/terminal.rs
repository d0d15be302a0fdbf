//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support. With
//! the source attached, each label is shown under its source line:
//!
//! ```text
//! error[E0001]: Unexpected character '@'.
//!  --> demo.lox:1:11
//!   |
//! 1 | 1 and 2.7 @ // comment
//!   |           ^ not a Lox token
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, LabelStyle};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse a `--color` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The source a diagnostic's spans point into.
struct SourceContext {
    text: String,
    lines: LineOffsetTable,
}

/// A label resolved to its line and character columns.
struct Placed<'d> {
    label: &'d Label,
    line: u32,
    /// 1-based column of the first marked character.
    col: u32,
    /// Number of marked characters, at least one.
    width: u32,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
    file_path: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter.
    ///
    /// `is_tty` says whether `writer` is a terminal; it decides
    /// `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Render labels under their source lines instead of as byte ranges.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let text = source.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(SourceContext { text, lines });
        self
    }

    /// Name shown in the `-->` locator.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    /// `error[CODE]: message`
    fn write_header(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        self.write_colored(&format!("[{}]", diagnostic.code), colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn write_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }

    /// Labels as byte ranges, for when no source is attached.
    fn emit_plain_labels(&mut self, diagnostic: &Diagnostic) {
        for label in &diagnostic.labels {
            let (marker, color) = match label.style {
                LabelStyle::Primary => ("-->", colors::ERROR),
                LabelStyle::Secondary => ("   ", colors::SECONDARY),
            };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
        }
    }

    fn emit_snippet(&mut self, diagnostic: &Diagnostic, source: &SourceContext) {
        let mut placed: Vec<Placed<'_>> = diagnostic
            .labels
            .iter()
            .map(|label| place(source, label))
            .collect();

        let locator = placed
            .iter()
            .find(|p| p.label.is_primary())
            .or_else(|| placed.first())
            .map(|p| (p.line, p.col));
        placed.sort_by_key(|p| (p.line, p.col));

        let max_line = placed.iter().map(|p| p.line).max().unwrap_or(1);
        let gutter = max_line.to_string().len();
        let blank = " ".repeat(gutter);

        if let Some((line, col)) = locator {
            let _ = write!(self.writer, "{blank}");
            self.write_colored("-->", colors::SECONDARY);
            match &self.file_path {
                Some(path) => {
                    let _ = writeln!(self.writer, " {path}:{line}:{col}");
                }
                None => {
                    let _ = writeln!(self.writer, " {line}:{col}");
                }
            }
        }
        self.write_gutter(&blank);
        let _ = writeln!(self.writer);

        let mut current_line = None;
        for p in &placed {
            if current_line != Some(p.line) {
                current_line = Some(p.line);
                let text = source.lines.line_text(&source.text, p.line).unwrap_or("");
                self.write_gutter(&format!("{:>gutter$}", p.line));
                let _ = writeln!(self.writer, " {text}");
            }

            self.write_gutter(&blank);
            let pad = " ".repeat(p.col as usize - 1);
            let (mark, color) = match p.label.style {
                LabelStyle::Primary => ('^', colors::ERROR),
                LabelStyle::Secondary => ('-', colors::SECONDARY),
            };
            let marks = String::from(mark).repeat(p.width as usize);
            let _ = write!(self.writer, " {pad}");
            if p.label.message.is_empty() {
                self.write_colored(&marks, color);
            } else {
                self.write_colored(&format!("{marks} {}", p.label.message), color);
            }
            let _ = writeln!(self.writer);
        }
    }

    fn write_gutter(&mut self, prefix: &str) {
        self.write_colored(&format!("{prefix} |"), colors::SECONDARY);
    }
}

/// Resolve a label's span to a line and character columns.
fn place<'d>(source: &SourceContext, label: &'d Label) -> Placed<'d> {
    let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
    let line_chars = source
        .lines
        .line_text(&source.text, line)
        .map_or(0, |text| text.chars().count());
    let line_chars = u32::try_from(line_chars).unwrap_or(u32::MAX);

    let (end_line, end_col) = source.lines.offset_to_line_col(&source.text, label.span.end);
    let end_col = if end_line == line {
        end_col
    } else {
        line_chars + 1
    };
    Placed {
        label,
        line,
        col,
        width: end_col.saturating_sub(col).max(1),
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);

        match self.source.take() {
            Some(source) => {
                self.emit_snippet(diagnostic, &source);
                self.source = Some(source);
            }
            None => self.emit_plain_labels(diagnostic),
        }

        for note in &diagnostic.notes {
            self.write_trailer("note", colors::BOLD, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.write_trailer("help", colors::HELP, suggestion);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count == 0 {
            return;
        }
        self.write_colored("error", colors::ERROR);
        if error_count == 1 {
            let _ = writeln!(self.writer, ": aborting due to previous error");
        } else {
            let _ = writeln!(self.writer, ": aborting due to {error_count} previous errors");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
