//! Unary and binary operators.
//!
//! Integer arithmetic is checked; overflow is an error rather than a wrap.
//! `/` always produces a float, and `%` takes the sign of the divisor.
//! Mixed integer/float arithmetic promotes to float. Equality across kinds
//! is `false` (numbers compare by value), while ordering across kinds is an
//! error.

use std::cmp::Ordering;
use std::fmt;

use clue_ir::{BinaryOp, UnaryOp};

use crate::Value;

/// Why an operator could not be applied. The evaluator attaches the
/// offending source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpError {
    BinaryTypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    UnaryTypeMismatch {
        op: &'static str,
        operand: &'static str,
    },
    DivisionByZero,
    ModuloByZero,
    IntegerOverflow(&'static str),
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::BinaryTypeMismatch { op, left, right } => write!(
                f,
                "unsupported operand types for {op}: `{left}` and `{right}`"
            ),
            OpError::UnaryTypeMismatch { op, operand } => {
                write!(f, "bad operand type for unary {op}: `{operand}`")
            }
            OpError::DivisionByZero => f.write_str("division by zero"),
            OpError::ModuloByZero => f.write_str("modulo by zero"),
            OpError::IntegerOverflow(op) => write!(f, "integer overflow in {op}"),
        }
    }
}

impl std::error::Error for OpError {}

pub type OpResult = Result<Value, OpError>;

fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> OpError {
    OpError::BinaryTypeMismatch {
        op: op.as_symbol(),
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> OpResult {
    result
        .map(Value::Int)
        .ok_or(OpError::IntegerOverflow(op_name))
}

/// Apply a unary operator.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> OpResult {
    match (op, operand) {
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (UnaryOp::Neg, Value::Int(n)) => checked_arith(n.checked_neg(), "negation"),
        (UnaryOp::Neg, Value::Float(x)) => Ok(Value::Float(-x)),
        (UnaryOp::Plus, Value::Int(_) | Value::Float(_)) => Ok(operand.clone()),
        (UnaryOp::Neg | UnaryOp::Plus, other) => Err(OpError::UnaryTypeMismatch {
            op: op.as_symbol(),
            operand: other.type_name(),
        }),
    }
}

/// Apply a binary operator to two evaluated operands.
///
/// `and`/`or` are handled here without short-circuiting; the evaluator
/// short-circuits before both operands are evaluated.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> OpResult {
    match op {
        BinaryOp::And => {
            return Ok(if left.is_truthy() { right } else { left }.clone());
        }
        BinaryOp::Or => {
            return Ok(if left.is_truthy() { left } else { right }.clone());
        }
        BinaryOp::Eq => return Ok(Value::Bool(values_equal(left, right))),
        BinaryOp::NotEq => return Ok(Value::Bool(!values_equal(left, right))),
        _ => {}
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            match (left.as_f64(), right.as_f64()) {
                (Some(a), Some(b)) => eval_float_binary(a, b, op),
                _ => Err(mismatch(op, left, right)),
            }
        }
        (Value::Str(a), Value::Str(b)) => eval_str_binary(a, b, op, left, right),
        (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s))
            if op == BinaryOp::Mul =>
        {
            Ok(Value::Str(repeat(s, *n)))
        }
        (Value::Bool(a), Value::Bool(b)) if op.is_comparison() => Ok(compare(a.cmp(b), op)),
        _ => Err(mismatch(op, left, right)),
    }
}

/// Equality as `==` sees it.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            left.as_f64() == right.as_f64()
        }
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::None, Value::None) => true,
        _ => false,
    }
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> OpResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => {
            if b == 0 {
                return Err(OpError::DivisionByZero);
            }
            #[expect(
                clippy::cast_precision_loss,
                reason = "true division of integers produces a float"
            )]
            let quotient = a as f64 / b as f64;
            Ok(Value::Float(quotient))
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(OpError::ModuloByZero);
            }
            let rem = a.checked_rem(b).ok_or(OpError::IntegerOverflow("remainder"))?;
            if rem != 0 && (rem < 0) != (b < 0) {
                checked_arith(rem.checked_add(b), "remainder")
            } else {
                Ok(Value::Int(rem))
            }
        }
        _ => Ok(compare(a.cmp(&b), op)),
    }
}

fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> OpResult {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(OpError::DivisionByZero);
            }
            Ok(Value::Float(a / b))
        }
        BinaryOp::Mod => {
            if b == 0.0 {
                return Err(OpError::ModuloByZero);
            }
            let rem = a % b;
            if rem != 0.0 && (rem < 0.0) != (b < 0.0) {
                Ok(Value::Float(rem + b))
            } else {
                Ok(Value::Float(rem))
            }
        }
        // NaN compares false under every ordering operator.
        _ => Ok(a
            .partial_cmp(&b)
            .map_or(Value::Bool(false), |ord| compare(ord, op))),
    }
}

fn eval_str_binary(a: &str, b: &str, op: BinaryOp, left: &Value, right: &Value) -> OpResult {
    match op {
        BinaryOp::Add => Ok(Value::Str(format!("{a}{b}"))),
        _ if op.is_comparison() => Ok(compare(a.cmp(b), op)),
        _ => Err(mismatch(op, left, right)),
    }
}

fn compare(ord: Ordering, op: BinaryOp) -> Value {
    Value::Bool(match op {
        BinaryOp::Lt => ord.is_lt(),
        BinaryOp::LtEq => ord.is_le(),
        BinaryOp::Gt => ord.is_gt(),
        BinaryOp::GtEq => ord.is_ge(),
        BinaryOp::NotEq => ord.is_ne(),
        _ => ord.is_eq(),
    })
}

fn repeat(s: &str, times: i64) -> String {
    usize::try_from(times).map_or_else(|_| String::new(), |n| s.repeat(n))
}
