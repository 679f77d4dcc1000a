//! Command handlers for the `clue` CLI.
//!
//! Shared helpers (reading scripts, building the stderr emitter, usage
//! errors) live in the module root.

mod check;
mod explain;
mod lex;
mod run;

pub use check::check_file;
pub use explain::explain_error;
pub use lex::lex_file;
pub use run::{parse_run_args, run_file, RunOptions};

use std::io::IsTerminal;

use clue_diagnostic::{ColorMode, Diagnostic, DiagnosticEmitter, ErrorCode, TerminalEmitter};

/// Exit status for a successful command.
pub const SUCCESS: i32 = 0;

/// Read a script, or report why it cannot be read (`E0002`).
pub(crate) fn read_file(path: &str) -> Result<String, Diagnostic> {
    std::fs::read_to_string(path).map_err(|e| {
        let msg = match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find script '{path}'"),
            std::io::ErrorKind::PermissionDenied => {
                format!("permission denied reading '{path}'")
            }
            std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        };
        Diagnostic::error(ErrorCode::E0002).with_message(msg)
    })
}

/// Emitter on stderr, rendering snippets from `source` when given.
pub(crate) fn stderr_emitter(
    color: ColorMode,
    source: Option<(&str, &str)>,
) -> TerminalEmitter<std::io::Stderr> {
    let is_tty = std::io::stderr().is_terminal();
    let emitter = TerminalEmitter::with_color_mode(std::io::stderr(), color, is_tty);
    match source {
        Some((path, text)) => emitter.with_source(path, text),
        None => emitter,
    }
}

/// Report a diagnostic that has no source location and return its status.
pub(crate) fn report(diag: &Diagnostic, color: ColorMode) -> i32 {
    let mut emitter = stderr_emitter(color, None);
    emitter.emit(diag);
    emitter.flush();
    diag.exit_status()
}

/// Report a command-line usage error (`E0001`).
pub fn usage_error(message: impl Into<String>) -> i32 {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message(message)
        .with_note("run `clue help` for usage");
    report(&diag, ColorMode::Auto)
}
