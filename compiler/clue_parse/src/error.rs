//! Conversion of syntax errors into diagnostics.

use clue_diagnostic::{Diagnostic, ErrorCode};
use clue_ir::{SyntaxError, SyntaxErrorKind};

/// Error code (and therefore exit status) of a syntax error.
pub fn error_code(err: &SyntaxError) -> ErrorCode {
    kind_error_code(&err.kind)
}

pub fn kind_error_code(kind: &SyntaxErrorKind) -> ErrorCode {
    match kind {
        SyntaxErrorKind::MissingOpenBrace { .. } | SyntaxErrorKind::UnclosedBlock { .. } => {
            ErrorCode::E1001
        }
        SyntaxErrorKind::MissingInputBinding => ErrorCode::E1002,
        SyntaxErrorKind::BadExpression { .. } => ErrorCode::E2001,
    }
}

/// Render a syntax error as a diagnostic labelled at its line and span.
#[cold]
pub fn to_diagnostic(err: &SyntaxError) -> Diagnostic {
    let label = match &err.kind {
        SyntaxErrorKind::MissingOpenBrace { .. } => "expected `{` after this header",
        SyntaxErrorKind::UnclosedBlock { .. } => "block opened here",
        SyntaxErrorKind::MissingInputBinding => "expected `-> name` here",
        SyntaxErrorKind::BadExpression { .. } => "here",
    };
    let mut diag = Diagnostic::error(error_code(err))
        .with_message(err.kind.to_string())
        .with_label(err.line, err.span, label);
    for note in &err.notes {
        diag = diag.with_note(note);
    }
    if matches!(err.kind, SyntaxErrorKind::MissingOpenBrace { .. }) {
        diag = diag.with_suggestion("put `{` at the end of the header line");
    }
    diag
}

#[cfg(test)]
mod tests;
