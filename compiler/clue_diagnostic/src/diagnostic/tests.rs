use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E2004)
        .with_message("undefined callable `greet`")
        .with_label(3, Span::new(4, 9), "not defined")
        .with_secondary_label(1, Span::new(0, 4), "did you mean this?")
        .with_note("callables must be defined before they are called")
        .with_suggestion("define it with `exec greet() { ... }`");

    assert_eq!(diag.code, ErrorCode::E2004);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
    assert_eq!(diag.primary_label().map(|l| l.line), Some(3));
    assert_eq!(diag.exit_status(), 6);
}

#[test]
fn test_default_message_is_title() {
    let diag = Diagnostic::error(ErrorCode::E2002);
    assert_eq!(diag.message, "invalid loop count");
    assert_eq!(diag.primary_label(), None);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E2001).with_message("division by zero");
    assert_eq!(diag.to_string(), "error[E2001]: division by zero");
}

#[test]
fn test_label_constructors() {
    let primary = Label::primary(2, Span::new(0, 1), "here");
    let secondary = Label::secondary(2, Span::new(0, 1), "there");
    assert!(primary.is_primary);
    assert!(!secondary.is_primary);
}
