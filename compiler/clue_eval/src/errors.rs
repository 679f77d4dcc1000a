//! Runtime errors.
//!
//! Every failure is fatal to the run. An [`EvalError`] carries the line and
//! line-relative span of the statement that failed, so the driver can render
//! it against the source, plus the call backtrace when it escaped a callable.
//!
//! Constructors for each condition live here so messages stay in one place.

use std::fmt;

use clue_diagnostic::{Diagnostic, ErrorCode};
use clue_ir::{Span, SyntaxError, SyntaxErrorKind};

use crate::diagnostics::EvalBacktrace;

/// Backtrace frames rendered before the rest are summarized.
const MAX_BACKTRACE_NOTES: usize = 8;

pub type EvalResult<T = crate::Value> = Result<T, EvalError>;

/// Failure classes of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A statement that failed to parse was reached.
    Syntax(SyntaxErrorKind),
    /// An expression could not be evaluated.
    BadExpression { text: String, reason: String },
    /// A loop count that is not a non-negative integer.
    InvalidLoopCount { text: String, reason: String },
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    UndefinedCallable { name: String },
    CallDepthExceeded { limit: usize },
    /// Reading from or writing to the console failed.
    Io { message: String },
}

impl EvalErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::Syntax(kind) => clue_parse::error::kind_error_code(kind),
            EvalErrorKind::BadExpression { .. } => ErrorCode::E2001,
            EvalErrorKind::InvalidLoopCount { .. } => ErrorCode::E2002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E2003,
            EvalErrorKind::UndefinedCallable { .. } => ErrorCode::E2004,
            EvalErrorKind::CallDepthExceeded { .. } => ErrorCode::E2005,
            EvalErrorKind::Io { .. } => ErrorCode::E2006,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::Syntax(kind) => write!(f, "{kind}"),
            EvalErrorKind::BadExpression { text, reason } => {
                write!(f, "bad expression `{text}`: {reason}")
            }
            EvalErrorKind::InvalidLoopCount { text, reason } => {
                write!(f, "invalid loop count `{text}`: {reason}")
            }
            EvalErrorKind::ArityMismatch {
                name,
                expected,
                found,
            } => {
                let plural = if *expected == 1 { "" } else { "s" };
                write!(
                    f,
                    "`{name}` takes {expected} argument{plural} but {found} were given"
                )
            }
            EvalErrorKind::UndefinedCallable { name } => write!(f, "`{name}` is not defined"),
            EvalErrorKind::CallDepthExceeded { limit } => {
                write!(f, "maximum call depth of {limit} exceeded")
            }
            EvalErrorKind::Io { message } => write!(f, "console I/O failed: {message}"),
        }
    }
}

/// A fatal runtime error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// 1-based line of the failing statement.
    pub line: u32,
    /// Span within that line.
    pub span: Span,
    pub notes: Vec<String>,
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, line: u32, span: Span) -> Self {
        EvalError {
            kind,
            line,
            span,
            notes: Vec::new(),
            backtrace: None,
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    /// Fill in the location if the error was raised without one.
    #[must_use]
    pub fn at(mut self, line: u32, span: Span) -> Self {
        if self.line == 0 {
            self.line = line;
            self.span = span;
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn exit_status(&self) -> i32 {
        self.code().exit_status()
    }

    /// Convert to a diagnostic for the terminal emitter.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.line, self.span, "here");
        for note in &self.notes {
            diag = diag.with_note(note);
        }
        if let Some(backtrace) = &self.backtrace {
            for line in backtrace.lines().take(MAX_BACKTRACE_NOTES) {
                diag = diag.with_note(line);
            }
            if backtrace.len() > MAX_BACKTRACE_NOTES {
                diag = diag.with_note(format!(
                    "... and {} more calls",
                    backtrace.len() - MAX_BACKTRACE_NOTES
                ));
            }
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for EvalError {}

impl From<&SyntaxError> for EvalError {
    fn from(err: &SyntaxError) -> Self {
        EvalError {
            kind: EvalErrorKind::Syntax(err.kind.clone()),
            line: err.line,
            span: err.span,
            notes: err.notes.clone(),
            backtrace: None,
        }
    }
}

// Constructors. Errors raised below the statement level carry line 0 and
// are located by the statement dispatcher through `EvalError::at`.

#[cold]
pub fn bad_expression(text: impl Into<String>, reason: impl Into<String>) -> EvalError {
    EvalError::new(
        EvalErrorKind::BadExpression {
            text: text.into(),
            reason: reason.into(),
        },
        0,
        Span::DUMMY,
    )
}

#[cold]
pub fn invalid_loop_count(text: impl Into<String>, reason: impl Into<String>) -> EvalError {
    EvalError::new(
        EvalErrorKind::InvalidLoopCount {
            text: text.into(),
            reason: reason.into(),
        },
        0,
        Span::DUMMY,
    )
}

#[cold]
pub fn arity_mismatch(name: impl Into<String>, expected: usize, found: usize) -> EvalError {
    EvalError::new(
        EvalErrorKind::ArityMismatch {
            name: name.into(),
            expected,
            found,
        },
        0,
        Span::DUMMY,
    )
}

#[cold]
pub fn undefined_callable(name: impl Into<String>) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedCallable { name: name.into() },
        0,
        Span::DUMMY,
    )
}

#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::new(EvalErrorKind::CallDepthExceeded { limit }, 0, Span::DUMMY)
        .with_note("a callable is probably calling itself without end")
}

#[cold]
pub fn io_error(err: &std::io::Error) -> EvalError {
    EvalError::new(
        EvalErrorKind::Io {
            message: err.to_string(),
        },
        0,
        Span::DUMMY,
    )
}
