//! Loop executor.

use tracing::debug;

use clue_ir::{LoopStmt, Stmt, SyntaxErrorKind};

use super::{Completion, Interpreter};
use crate::environment::FrameKind;
use crate::errors::{invalid_loop_count, EvalErrorKind, EvalResult};
use crate::Value;

impl Interpreter<'_> {
    /// Run `lp.body` as many times as its count says.
    ///
    /// A `return` inside the body stops the loop and propagates.
    pub(crate) fn run_loop(&mut self, lp: &LoopStmt, stmt: &Stmt) -> EvalResult<Completion> {
        let count = self.loop_count(lp, stmt)?;
        debug!(line = stmt.line, count, "loop");

        for iteration in 0..count {
            let bindings = self
                .config
                .expose_index
                .then(|| (self.names.index, Value::Int(iteration)));
            self.env.push_frame(FrameKind::Loop, bindings);
            let completion = self.exec_block(&lp.body);
            self.env.pop_frame();
            if let Completion::Return(value) = completion? {
                return Ok(Completion::Return(value));
            }
        }
        Ok(Completion::Normal)
    }

    /// Evaluate the count. Anything that does not produce a non-negative
    /// integer, including a count that fails to parse or to evaluate, is an
    /// invalid loop count. Errors from calls made by the count expression
    /// (arity, undefined callable, depth, I/O) keep their own class.
    fn loop_count(&mut self, lp: &LoopStmt, stmt: &Stmt) -> EvalResult<i64> {
        let text = stmt.slice(lp.count_span).trim();
        let count_span = stmt.line_span(lp.count_span);
        let invalid = |reason: String| invalid_loop_count(text, reason).at(stmt.line, count_span);

        let expr = match &lp.count {
            Ok(expr) => expr,
            Err(err) => {
                let reason = match &err.kind {
                    SyntaxErrorKind::BadExpression { reason, .. } => reason.clone(),
                    other => other.to_string(),
                };
                return Err(invalid(reason));
            }
        };

        let value = match self.eval_expr(expr, stmt) {
            Ok(value) => value,
            Err(err) => {
                return match err.kind {
                    EvalErrorKind::BadExpression { reason, .. } => Err(invalid(reason)),
                    _ => Err(err),
                };
            }
        };

        match value {
            Value::Int(n) if n >= 0 => Ok(n),
            Value::Int(n) => Err(invalid(format!("expected a non-negative integer, found {n}"))),
            Value::Str(s) => match s.trim().parse::<i64>() {
                Ok(n) if n >= 0 => Ok(n),
                _ => Err(invalid(format!(
                    "expected a non-negative integer, found {s:?}"
                ))),
            },
            other => Err(invalid(format!(
                "expected a non-negative integer, found `{}`",
                other.type_name()
            ))),
        }
    }
}
