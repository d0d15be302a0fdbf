use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::new(ErrorCode::E1001, "Expect expression.")
        .with_label(Span::new(0, 1), "here")
        .with_note("some context")
        .with_suggestion("try this");

    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "Expect expression.");
    assert_eq!(diag.labels.len(), 1);
    assert_eq!(diag.labels[0].style, LabelStyle::Primary);
    assert_eq!(diag.notes, vec!["some context".to_string()]);
    assert_eq!(diag.suggestions, vec!["try this".to_string()]);
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    let diag = Diagnostic::new(ErrorCode::E1002, "Expect ')' after expression")
        .with_secondary_label(Span::new(0, 1), "opened here")
        .with_label(Span::new(5, 6), "expected `)`");

    assert!(!diag.labels[0].is_primary());
    assert_eq!(diag.primary_span(), Some(Span::new(5, 6)));
}

#[test]
fn test_primary_span_none_without_labels() {
    let diag = Diagnostic::new(ErrorCode::E0003, "Source too large.");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::new(ErrorCode::E0002, "Unterminated string.")
        .with_label(Span::new(3, 9), "no closing quote")
        .with_secondary_label(Span::new(0, 2), "in this statement")
        .with_note("strings cannot span lines");

    assert_eq!(
        diag.to_string(),
        concat!(
            "error[E0002]: Unterminated string.\n",
            "  --> 3..9: no closing quote\n",
            "      0..2: in this statement\n",
            "  = note: strings cannot span lines",
        )
    );
}
