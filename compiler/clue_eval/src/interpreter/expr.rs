//! Expression evaluation.

use clue_ir::{BinaryOp, Expr, ExprKind, Stmt};
use clue_stack::ensure_sufficient_stack;

use super::Interpreter;
use crate::errors::{bad_expression, EvalResult};
use crate::operators::{evaluate_binary, evaluate_unary, OpError};
use crate::Value;

impl Interpreter<'_> {
    /// Evaluate an expression of `stmt`.
    ///
    /// Errors are located at the sub-expression that failed.
    pub fn eval_expr(&mut self, expr: &Expr, stmt: &Stmt) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr, stmt))
    }

    fn eval_expr_inner(&mut self, expr: &Expr, stmt: &Stmt) -> EvalResult {
        let locate = |reason: String| {
            bad_expression(stmt.slice(expr.span), reason).at(stmt.line, stmt.line_span(expr.span))
        };

        match &expr.kind {
            ExprKind::Int(n) => Ok(Value::Int(*n)),
            ExprKind::Float(x) => Ok(Value::Float(*x)),
            ExprKind::Str(s) => Ok(Value::Str(s.clone())),
            ExprKind::Bool(b) => Ok(Value::Bool(*b)),
            ExprKind::Ident(name) => self.env.lookup(*name).cloned().ok_or_else(|| {
                locate(format!("`{}` is not defined", self.interner.lookup(*name)))
            }),
            ExprKind::Sigil(name) => self.env.lookup(*name).cloned().ok_or_else(|| {
                locate(format!("`${}` is not defined", self.interner.lookup(*name)))
            }),
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand, stmt)?;
                evaluate_unary(*op, &value).map_err(|e: OpError| locate(e.to_string()))
            }
            ExprKind::Binary {
                op: op @ (BinaryOp::And | BinaryOp::Or),
                left,
                right,
            } => {
                let left = self.eval_expr(left, stmt)?;
                // Short-circuit: the right operand decides only when the
                // left one does not.
                let decided = match op {
                    BinaryOp::And => !left.is_truthy(),
                    _ => left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.eval_expr(right, stmt)
                }
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left, stmt)?;
                let right = self.eval_expr(right, stmt)?;
                evaluate_binary(&left, &right, *op).map_err(|e| locate(e.to_string()))
            }
            ExprKind::Call { callee, args } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval_expr(arg, stmt)?);
                }
                self.call(*callee, values, stmt, expr.span)
            }
        }
    }
}
