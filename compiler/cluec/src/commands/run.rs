//! The `run` command: execute a script.

use std::io::Write;

use tracing::debug;

use clue_diagnostic::{ColorMode, DiagnosticEmitter};
use clue_eval::{EvalConfig, InterpreterBuilder};
use clue_ir::StringInterner;

use super::{read_file, report, stderr_emitter, SUCCESS};

/// Options accepted by `clue run`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config: EvalConfig,
    pub color: ColorMode,
}

/// Split `clue run` arguments into the script path and options.
///
/// Flags may appear before or after the path.
pub fn parse_run_args(args: &[String]) -> Result<(String, RunOptions), String> {
    let mut options = RunOptions::default();
    let mut path: Option<String> = None;

    for arg in args {
        if arg == "--no-index" {
            options.config.expose_index = false;
        } else if let Some(name) = arg.strip_prefix("--index-name=") {
            if !is_identifier(name) {
                return Err(format!("invalid index name `{name}`"));
            }
            options.config.index_name = name.to_string();
        } else if let Some(mode) = arg.strip_prefix("--output=") {
            options.config.output_mode = mode.parse()?;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            options.config.max_call_depth = depth
                .parse()
                .ok()
                .filter(|&d: &usize| d > 0)
                .ok_or_else(|| format!("invalid maximum call depth `{depth}`"))?;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = mode.parse()?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument `{arg}`"));
        }
    }

    let path = path.ok_or_else(|| "missing script path".to_string())?;
    Ok((path, options))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Run the script at `path`, returning the exit status.
///
/// Statements run in order until the first failure; its diagnostic is
/// printed to stderr and its class decides the status.
pub fn run_file(path: &str, options: &RunOptions) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(diag) => return report(&diag, options.color),
    };
    debug!(path, bytes = source.len(), "running script");

    let interner = StringInterner::new();
    let program = clue_parse::parse_program(&source, &interner);
    let mut interpreter = InterpreterBuilder::new(&interner)
        .config(options.config.clone())
        .build();
    let result = interpreter.run(&program);
    let _ = std::io::stdout().flush();

    match result {
        Ok(()) => SUCCESS,
        Err(err) => {
            debug!(code = %err.code(), line = err.line, "script failed");
            let mut emitter = stderr_emitter(options.color, Some((path, &source)));
            emitter.emit(&err.to_diagnostic());
            emitter.flush();
            err.exit_status()
        }
    }
}

#[cfg(test)]
mod tests;
