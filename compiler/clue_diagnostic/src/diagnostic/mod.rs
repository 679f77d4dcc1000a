//! Core diagnostic types for structured error reporting.
//!
//! Defines [`Diagnostic`], [`Label`] and [`Severity`], the shape every phase
//! (parser, evaluator, driver) reports its failures in.

use clue_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A labeled location in the script.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    /// 1-based source line.
    pub line: u32,
    /// Byte range within that line.
    pub span: Span,
    pub message: String,
    /// Primary labels mark where the error is; secondary labels add context.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(line: u32, span: Span, message: impl Into<String>) -> Self {
        Label {
            line,
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(line: u32, span: Span, message: impl Into<String>) -> Self {
        Label {
            line,
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A diagnostic: code, message, locations, notes and suggestions.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic. The message defaults to the code's title.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: code.title().to_string(),
            labels: Vec::new(),
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    /// Add a primary label.
    #[must_use]
    pub fn with_label(mut self, line: u32, span: Span, msg: impl Into<String>) -> Self {
        self.labels.push(Label::primary(line, span, msg));
        self
    }

    #[must_use]
    pub fn with_secondary_label(mut self, line: u32, span: Span, msg: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(line, span, msg));
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// The first primary label, if any.
    pub fn primary_label(&self) -> Option<&Label> {
        self.labels.iter().find(|l| l.is_primary)
    }

    /// Exit status a run failing with this diagnostic ends with.
    pub fn exit_status(&self) -> i32 {
        self.code.exit_status()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests;
