//! Error codes for all Clue diagnostics.
//!
//! Each code is a stable identifier (e.g. `E2001`) with the first digit
//! naming the phase, and a stable process exit status. Used for `--explain`
//! lookups and for the status the `clue` binary exits with.

use std::fmt;

/// Error codes for all Clue diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: invocation / driver errors
/// - E1xxx: syntax errors
/// - E2xxx: runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Driver Errors (E0xxx)
    /// Bad command-line invocation
    E0001,
    /// Script not found or unreadable
    E0002,

    // Syntax Errors (E1xxx)
    /// Block header without an opening brace, or a block that is never closed
    E1001,
    /// `input` without a `-> name` binding
    E1002,

    // Runtime Errors (E2xxx)
    /// Bad expression
    E2001,
    /// Invalid loop count
    E2002,
    /// Argument count mismatch
    E2003,
    /// Undefined callable
    E2004,
    /// Call depth exceeded
    E2005,
    /// Console I/O failure
    E2006,
}

impl ErrorCode {
    /// All defined error codes.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
        }
    }

    /// Process exit status for a run that fails with this code.
    ///
    /// Statuses 4 through 9 are part of the language's compatibility
    /// surface and must not change.
    pub fn exit_status(&self) -> i32 {
        match self {
            ErrorCode::E0001 => 2,
            ErrorCode::E0002 => 3,
            ErrorCode::E1002 => 4,
            ErrorCode::E2003 => 5,
            ErrorCode::E2004 => 6,
            ErrorCode::E1001 => 7,
            ErrorCode::E2002 => 8,
            ErrorCode::E2001 => 9,
            ErrorCode::E2005 => 10,
            ErrorCode::E2006 => 11,
        }
    }

    /// One-line summary of the error class.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "bad invocation",
            ErrorCode::E0002 => "script not found",
            ErrorCode::E1001 => "missing open brace",
            ErrorCode::E1002 => "missing input binding",
            ErrorCode::E2001 => "bad expression",
            ErrorCode::E2002 => "invalid loop count",
            ErrorCode::E2003 => "arity mismatch",
            ErrorCode::E2004 => "undefined callable",
            ErrorCode::E2005 => "call depth exceeded",
            ErrorCode::E2006 => "console I/O failure",
        }
    }

    pub fn is_driver_error(&self) -> bool {
        self.as_str().starts_with("E0")
    }

    pub fn is_syntax_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_runtime_error(&self) -> bool {
        self.as_str().starts_with("E2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
