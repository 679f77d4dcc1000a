//! Interpreter configuration.

use std::fmt;
use std::str::FromStr;

/// How `output(...)` renders its argument.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// A lone string literal prints its content verbatim; anything else
    /// prints the argument text after variable substitution.
    #[default]
    Raw,
    /// The argument is evaluated and its value printed.
    Evaluate,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(OutputMode::Raw),
            "eval" | "evaluate" => Ok(OutputMode::Evaluate),
            other => Err(format!(
                "invalid output mode `{other}` (expected `raw` or `eval`)"
            )),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputMode::Raw => "raw",
            OutputMode::Evaluate => "eval",
        })
    }
}

/// Evaluation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Bind the zero-based iteration number inside loop bodies.
    pub expose_index: bool,
    /// Name the iteration number is bound under.
    pub index_name: String,
    pub output_mode: OutputMode,
    /// Deepest allowed nesting of callable calls.
    pub max_call_depth: usize,
}

impl EvalConfig {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            expose_index: true,
            index_name: "index".to_string(),
            output_mode: OutputMode::Raw,
            max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_parsing() {
        assert_eq!("raw".parse(), Ok(OutputMode::Raw));
        assert_eq!("eval".parse(), Ok(OutputMode::Evaluate));
        assert_eq!("evaluate".parse(), Ok(OutputMode::Evaluate));
        assert!("loud".parse::<OutputMode>().is_err());
    }

    #[test]
    fn defaults() {
        let config = EvalConfig::default();
        assert!(config.expose_index);
        assert_eq!(config.index_name, "index");
        assert_eq!(config.output_mode, OutputMode::Raw);
        assert_eq!(config.max_call_depth, 256);
    }
}
