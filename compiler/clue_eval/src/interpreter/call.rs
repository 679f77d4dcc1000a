//! Callable dispatch.
//!
//! Built-ins (`string`, `number`) are resolved before the registry, so they
//! cannot be shadowed. User-defined callables run in a call frame that binds
//! their parameters; the frame hides the caller's bindings, while assignments
//! in the body still go to the global store.

use std::sync::Arc;

use tracing::debug;

use clue_ir::{CallableDef, Name, Span, Stmt};
use clue_stack::ensure_sufficient_stack;

use super::{Completion, Interpreter};
use crate::diagnostics::CallFrame;
use crate::environment::FrameKind;
use crate::errors::{arity_mismatch, bad_expression, undefined_callable, EvalResult};
use crate::Value;

impl Interpreter<'_> {
    /// Call `callee` with already-evaluated arguments.
    ///
    /// `span` is the call expression within `stmt`.
    pub(crate) fn call(
        &mut self,
        callee: Name,
        args: Vec<Value>,
        stmt: &Stmt,
        span: Span,
    ) -> EvalResult {
        let line_span = stmt.line_span(span);
        let name = self.interner.lookup(callee);

        if callee == self.names.string || callee == self.names.number {
            let [arg] = <[Value; 1]>::try_from(args)
                .map_err(|args| arity_mismatch(name, 1, args.len()).at(stmt.line, line_span))?;
            if callee == self.names.string {
                return Ok(Value::Str(arg.to_string()));
            }
            return to_number(arg)
                .map_err(|reason| bad_expression(stmt.slice(span), reason).at(stmt.line, line_span));
        }

        let Some(def) = self.registry.get(callee).map(Arc::clone) else {
            return Err(undefined_callable(name).at(stmt.line, line_span));
        };
        if def.params.len() != args.len() {
            return Err(arity_mismatch(name, def.params.len(), args.len())
                .with_note(format!("`{name}` is defined on line {}", def.line))
                .at(stmt.line, line_span));
        }

        self.call_stack
            .push(CallFrame {
                name: callee,
                call_line: stmt.line,
            })
            .map_err(|err| {
                self.call_stack
                    .attach_backtrace(err, self.interner)
                    .at(stmt.line, line_span)
            })?;
        debug!(name, depth = self.call_stack.depth(), "call");

        let result = ensure_sufficient_stack(|| self.call_body(&def, args));

        let result = result.map_err(|err| self.call_stack.attach_backtrace(err, self.interner));
        self.call_stack.pop();
        result
    }

    fn call_body(&mut self, def: &CallableDef, args: Vec<Value>) -> EvalResult {
        self.env
            .push_frame(FrameKind::Call, def.params.iter().copied().zip(args));
        let completion = self.exec_block(&def.body);
        self.env.pop_frame();
        match completion? {
            Completion::Return(value) => Ok(value),
            Completion::Normal => Ok(Value::None),
        }
    }
}

/// `number(x)`: numbers pass through, strings are parsed.
fn to_number(value: Value) -> Result<Value, String> {
    match value {
        Value::Int(_) | Value::Float(_) => Ok(value),
        Value::Str(text) => Value::parse_number(&text)
            .ok_or_else(|| format!("cannot convert {text:?} to a number")),
        other => Err(format!(
            "`number` expects a string or a number, found `{}`",
            other.type_name()
        )),
    }
}
