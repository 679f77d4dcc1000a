//! The `check` command: parse a script without running it.

use clue_diagnostic::{ColorMode, DiagnosticEmitter};
use clue_ir::StringInterner;

use super::{read_file, report, stderr_emitter, SUCCESS};

/// Parse every line, block and body of the script at `path` and report all
/// syntax errors. Returns the status of the first error, or success.
pub fn check_file(path: &str, color: ColorMode) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(diag) => return report(&diag, color),
    };

    let interner = StringInterner::new();
    let program = clue_parse::parse_program(&source, &interner);
    let errors = program.syntax_errors();

    let Some(first) = errors.first() else {
        println!("{path}: no syntax errors");
        return SUCCESS;
    };

    let mut emitter = stderr_emitter(color, Some((path, &source)));
    for err in &errors {
        emitter.emit(&clue_parse::error::to_diagnostic(err));
    }
    emitter.emit_summary(errors.len(), 0);
    emitter.flush();
    clue_parse::error::error_code(first).exit_status()
}
