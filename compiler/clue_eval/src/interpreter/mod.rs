//! Tree-walking interpreter for Clue.
//!
//! All interpreter state lives in [`Interpreter`]: the variable store, the
//! callable registry, the call stack, the configuration and the I/O
//! handlers. Statements are dispatched one at a time; loop and callable
//! bodies were parsed once and are replayed on every iteration or call.
//!
//! - `dispatch`: statement dispatch, `output` and `input`
//! - `expr`: expression evaluation
//! - `call`: built-ins and user-defined callables
//! - `loops`: the loop executor

mod builder;
mod call;
mod dispatch;
mod expr;
mod loops;

pub use builder::InterpreterBuilder;

use clue_ir::{Name, Program, Stmt, StringInterner};

use crate::diagnostics::CallStack;
use crate::errors::EvalResult;
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;
use crate::{CallableRegistry, Environment, EvalConfig, Value};

/// How a statement list finished.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Ran to the end.
    Normal,
    /// Stopped at `return`, with the returned value.
    Return(Value),
}

/// Names the interpreter compares against on hot paths, interned once.
#[derive(Copy, Clone)]
pub(crate) struct BuiltinNames {
    pub(crate) string: Name,
    pub(crate) number: Name,
    pub(crate) index: Name,
}

impl BuiltinNames {
    fn new(interner: &StringInterner, config: &EvalConfig) -> Self {
        BuiltinNames {
            string: interner.intern("string"),
            number: interner.intern("number"),
            index: interner.intern(&config.index_name),
        }
    }
}

/// The interpreter.
pub struct Interpreter<'a> {
    pub(crate) interner: &'a StringInterner,
    pub(crate) env: Environment,
    pub(crate) registry: CallableRegistry,
    pub(crate) call_stack: CallStack,
    pub(crate) config: EvalConfig,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) input_handler: SharedInputHandler,
    pub(crate) names: BuiltinNames,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with default configuration on stdin/stdout.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    /// Run a parsed program to completion or to its first error.
    ///
    /// Everything executed before a failing statement has taken effect.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.stmts.len()))]
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        // `return` at the top level is rejected by the dispatcher, so a
        // top-level run always completes normally.
        self.exec_block(&program.stmts).map(|_| ())
    }

    /// Parse and run `source`.
    pub fn run_source(&mut self, source: &str) -> EvalResult<()> {
        let program = clue_parse::parse_program(source, self.interner);
        self.run(&program)
    }

    /// Execute statements in order until one returns.
    pub fn exec_block(&mut self, stmts: &[Stmt]) -> EvalResult<Completion> {
        for stmt in stmts {
            if let Completion::Return(value) = self.exec_stmt(stmt)? {
                return Ok(Completion::Return(value));
            }
        }
        Ok(Completion::Normal)
    }

    /// Global value of the variable `name`.
    pub fn lookup_global(&self, name: &str) -> Option<&Value> {
        self.interner.get(name).and_then(|n| self.env.global(n))
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn registry(&self) -> &CallableRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }
}

#[cfg(test)]
mod tests;
