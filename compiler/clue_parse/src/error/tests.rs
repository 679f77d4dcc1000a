use super::*;
use clue_ir::{BlockKind, Span};
use pretty_assertions::assert_eq;

#[test]
fn test_codes_follow_error_class() {
    let cases = [
        (
            SyntaxErrorKind::MissingOpenBrace {
                block: BlockKind::Loop,
            },
            ErrorCode::E1001,
        ),
        (
            SyntaxErrorKind::UnclosedBlock {
                block: BlockKind::Exec,
            },
            ErrorCode::E1001,
        ),
        (SyntaxErrorKind::MissingInputBinding, ErrorCode::E1002),
    ];
    for (kind, code) in cases {
        assert_eq!(error_code(&SyntaxError::new(kind, 1, Span::DUMMY)), code);
    }
    let bad = SyntaxError::bad_expression("1 +", "oops", 1, Span::DUMMY);
    assert_eq!(error_code(&bad), ErrorCode::E2001);
}

#[test]
fn test_diagnostic_carries_location_and_notes() {
    let err = SyntaxError::new(
        SyntaxErrorKind::UnclosedBlock {
            block: BlockKind::Loop,
        },
        3,
        Span::new(0, 9),
    )
    .with_note("the block's body was not executed");
    let diag = to_diagnostic(&err);
    assert_eq!(diag.code, ErrorCode::E1001);
    assert_eq!(diag.message, "`loop` block is never closed");
    assert_eq!(diag.exit_status(), 7);
    let label = diag.primary_label().map(|l| (l.line, l.span));
    assert_eq!(label, Some((3, Span::new(0, 9))));
    assert_eq!(diag.notes, vec!["the block's body was not executed".to_string()]);
}

#[test]
fn test_missing_brace_has_suggestion() {
    let err = SyntaxError::new(
        SyntaxErrorKind::MissingOpenBrace {
            block: BlockKind::Exec,
        },
        1,
        Span::new(0, 8),
    );
    let diag = to_diagnostic(&err);
    assert_eq!(diag.suggestions.len(), 1);
}
