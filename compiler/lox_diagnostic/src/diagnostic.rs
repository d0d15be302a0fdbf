use std::fmt;

use lox_ir::Span;

use crate::ErrorCode;

/// How a label is drawn under the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelStyle {
    /// Where the error is, underlined with `^`.
    Primary,
    /// Related context, underlined with `-`.
    Secondary,
}

/// A message attached to a span of the source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub style: LabelStyle,
}

impl Label {
    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}

/// A scanner or parser error, ready to be shown to a user.
///
/// The front end only reports errors, so there is no severity: every
/// diagnostic renders as `error[CODE]: message` and aborts the run.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Rendered as `= help:` lines.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Point at the offending source.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), LabelStyle::Primary)
    }

    /// Point at related source, e.g. the `(` an expected `)` would close.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), LabelStyle::Secondary)
    }

    fn push_label(mut self, span: Span, message: String, style: LabelStyle) -> Self {
        self.labels.push(Label {
            span,
            message,
            style,
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Span of the first primary label.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(|label| label.span)
    }
}

/// Source-free rendering, with spans shown as byte ranges.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        for label in &self.labels {
            let marker = match label.style {
                LabelStyle::Primary => "-->",
                LabelStyle::Secondary => "   ",
            };
            write!(f, "\n  {marker} {:?}: {}", label.span, label.message)?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
