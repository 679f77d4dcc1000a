//! Syntax errors.
//!
//! The parser never aborts: a line that fails to parse becomes a
//! `StmtKind::Invalid` carrying one of these, and the error is raised only if
//! execution reaches it. Everything before the bad line still runs.

use std::fmt;

use crate::Span;

/// Which block construct an error refers to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BlockKind {
    Loop,
    Exec,
}

impl BlockKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            BlockKind::Loop => "loop",
            BlockKind::Exec => "exec",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxErrorKind {
    /// A block header is not followed by `{`.
    MissingOpenBrace { block: BlockKind },
    /// A block opened but the source ended before its closing `}`.
    UnclosedBlock { block: BlockKind },
    /// `input(...)` without `-> name`.
    MissingInputBinding,
    /// Anything else that does not parse.
    BadExpression { text: String, reason: String },
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::MissingOpenBrace { block } => {
                write!(f, "expected `{{` to open `{}` block", block.keyword())
            }
            SyntaxErrorKind::UnclosedBlock { block } => {
                write!(f, "`{}` block is never closed", block.keyword())
            }
            SyntaxErrorKind::MissingInputBinding => {
                write!(f, "`input` is missing its `-> name` binding")
            }
            SyntaxErrorKind::BadExpression { text, reason } => {
                write!(f, "bad expression `{text}`: {reason}")
            }
        }
    }
}

/// A syntax error at a source location.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// 1-based source line.
    pub line: u32,
    /// Span within the source line.
    pub span: Span,
    pub notes: Vec<String>,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, line: u32, span: Span) -> Self {
        SyntaxError {
            kind,
            line,
            span,
            notes: Vec::new(),
        }
    }

    pub fn bad_expression(
        text: impl Into<String>,
        reason: impl Into<String>,
        line: u32,
        span: Span,
    ) -> Self {
        Self::new(
            SyntaxErrorKind::BadExpression {
                text: text.into(),
                reason: reason.into(),
            },
            line,
            span,
        )
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Move the span right by `offset` bytes.
    #[must_use]
    pub fn shifted(mut self, offset: u32) -> Self {
        self.span = self.span.shift(offset);
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for SyntaxError {}
