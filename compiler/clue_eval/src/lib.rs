//! Evaluator for the Clue scripting language.
//!
//! Runs a parsed [`clue_ir::Program`] statement by statement:
//!
//! - [`Value`]: runtime values and their display form
//! - [`Environment`]: the global variable store with read-only call and loop
//!   frames on top
//! - [`substitute`]: token-based variable substitution for raw output
//! - [`operators`]: unary and binary operators
//! - [`CallableRegistry`] and [`CallStack`]: user-defined callables and the
//!   bounded call stack
//! - [`Interpreter`]: the statement dispatcher, loop executor and call
//!   dispatcher, built through [`InterpreterBuilder`]

mod config;
pub mod diagnostics;
mod environment;
pub mod errors;
pub mod input_handler;
mod interpreter;
pub mod operators;
pub mod print_handler;
mod registry;
mod substitute;
mod value;

pub use config::{EvalConfig, OutputMode};
pub use diagnostics::{BacktraceFrame, CallFrame, CallStack, EvalBacktrace};
pub use environment::{Environment, FrameKind};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use input_handler::{scripted_handler, stdin_handler, InputHandlerImpl, SharedInputHandler};
pub use interpreter::{Completion, Interpreter, InterpreterBuilder};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use registry::CallableRegistry;
pub use substitute::substitute;
pub use value::Value;
