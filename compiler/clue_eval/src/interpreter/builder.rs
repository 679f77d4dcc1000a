//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use clue_ir::StringInterner;

use super::{BuiltinNames, Interpreter};
use crate::diagnostics::CallStack;
use crate::input_handler::{stdin_handler, SharedInputHandler};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{CallableRegistry, Environment, EvalConfig};

/// Builder for [`Interpreter`].
///
/// Defaults: [`EvalConfig::default`], output to stdout, input from stdin.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    config: EvalConfig,
    env: Option<Environment>,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder {
            interner,
            config: EvalConfig::default(),
            env: None,
            print_handler: None,
            input_handler: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from an existing variable store instead of an empty one.
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let names = BuiltinNames::new(self.interner, &self.config);
        Interpreter {
            interner: self.interner,
            env: self.env.unwrap_or_default(),
            registry: CallableRegistry::new(),
            call_stack: CallStack::new(self.config.max_call_depth),
            config: self.config,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            input_handler: self.input_handler.unwrap_or_else(stdin_handler),
            names,
        }
    }
}
