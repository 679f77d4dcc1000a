//! Statement dispatch.

use tracing::{debug, trace};

use clue_ir::{Name, OutputArg, Stmt, StmtKind};

use super::{Completion, Interpreter};
use crate::errors::{bad_expression, io_error, EvalError, EvalResult};
use crate::substitute::substitute;
use crate::{OutputMode, Value};

impl Interpreter<'_> {
    /// Execute one statement.
    ///
    /// Errors leave here located at the statement, unless they were raised
    /// with a more precise location.
    pub fn exec_stmt(&mut self, stmt: &Stmt) -> EvalResult<Completion> {
        trace!(line = stmt.line, text = stmt.text.as_str(), "dispatch");
        let full = stmt.full_span();
        let result = match &stmt.kind {
            StmtKind::Assign { target, value } => {
                let value = self.eval_expr(value, stmt)?;
                self.env.assign(*target, value);
                Ok(Completion::Normal)
            }
            StmtKind::Call(expr) => self.eval_expr(expr, stmt).map(|_| Completion::Normal),
            StmtKind::Output(arg) => self.exec_output(arg, stmt).map(|()| Completion::Normal),
            StmtKind::Input { prompt, target } => {
                self.exec_input(prompt, *target).map(|()| Completion::Normal)
            }
            StmtKind::Loop(lp) => self.run_loop(lp, stmt),
            StmtKind::Define(def) => {
                debug!(
                    name = self.interner.lookup(def.name),
                    params = def.params.len(),
                    "define callable"
                );
                self.registry.define(def.clone());
                Ok(Completion::Normal)
            }
            StmtKind::Return(value) => {
                if self.call_stack.is_empty() {
                    return Err(bad_expression(
                        stmt.text.as_str(),
                        "`return` outside of a callable",
                    )
                    .at(stmt.line, full));
                }
                let value = match value {
                    Some(expr) => self.eval_expr(expr, stmt)?,
                    None => Value::None,
                };
                Ok(Completion::Return(value))
            }
            StmtKind::Invalid(err) => Err(EvalError::from(err)),
        };
        result.map_err(|err| err.at(stmt.line, full))
    }

    /// `output(...)`
    fn exec_output(&mut self, arg: &OutputArg, stmt: &Stmt) -> EvalResult<()> {
        let text = match self.config.output_mode {
            OutputMode::Raw => match &arg.literal {
                Some(literal) => literal.clone(),
                None => {
                    let substituted = substitute(&stmt.text, &arg.tokens, &self.env);
                    dequote(&substituted).to_string()
                }
            },
            OutputMode::Evaluate if arg.tokens.is_empty() => String::new(),
            OutputMode::Evaluate => match &arg.expr {
                Ok(expr) => self.eval_expr(expr, stmt)?.to_string(),
                Err(err) => return Err(EvalError::from(err)),
            },
        };
        self.print_handler.println(&text).map_err(|e| io_error(&e))
    }

    /// `input("prompt") -> target`
    fn exec_input(&mut self, prompt: &str, target: Name) -> EvalResult<()> {
        if !prompt.is_empty() {
            self.print_handler.print(prompt).map_err(|e| io_error(&e))?;
        }
        self.print_handler.flush().map_err(|e| io_error(&e))?;
        let line = self
            .input_handler
            .read_line()
            .map_err(|e| io_error(&e))?
            .unwrap_or_default();
        trace!(variable = self.interner.lookup(target), "input read");
        self.env.assign(target, Value::Str(line));
        Ok(())
    }
}

/// Content of `text` if the whole of it is wrapped in double quotes.
fn dequote(text: &str) -> &str {
    if text.starts_with('"') && text.ends_with('"') {
        text.get(1..text.len() - 1).unwrap_or_default()
    } else {
        text
    }
}
