//! Diagnostic system for rich error reporting.
//!
//! - Error codes for searchability and stable exit statuses
//! - Clear messages (what went wrong)
//! - Primary label (where it went wrong)
//! - Notes and suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
