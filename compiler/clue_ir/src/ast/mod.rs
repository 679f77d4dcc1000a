//! Syntax trees for Clue scripts.
//!
//! A script parses into a flat list of [`Stmt`]s. Block constructs (`loop:`
//! and `exec`) own their parsed bodies, so a body is parsed once and replayed
//! on every iteration or call.
//!
//! Statements keep the text they were parsed from. Expression spans are
//! relative to that text; `Stmt::column` locates the text inside its source
//! line.

mod operators;

use std::sync::Arc;

pub use operators::{BinaryOp, UnaryOp};

use crate::{Name, Span, SyntaxError, Token};

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Int(i64),
    Float(f64),
    /// String literal, escapes already processed.
    Str(String),
    Bool(bool),
    /// Bare-word variable reference: `count`
    Ident(Name),
    /// Sigil variable reference: `$count`, `${count}`
    Sigil(Name),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        callee: Name,
        args: Vec<Expr>,
    },
}

/// Statement with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    /// 1-based source line.
    pub line: u32,
    /// Byte offset of `text` within its source line.
    pub column: u32,
    /// Comment-stripped, trimmed statement text.
    pub text: String,
}

impl Stmt {
    /// Span of a node of this statement, relative to the source line.
    #[inline]
    pub fn line_span(&self, span: Span) -> Span {
        span.shift(self.column)
    }

    /// Span covering the whole statement within its source line.
    pub fn full_span(&self) -> Span {
        Span::from_range(0..self.text.len()).shift(self.column)
    }

    /// The statement text covered by `span`.
    pub fn slice(&self, span: Span) -> &str {
        span.slice(&self.text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `name = expr`
    Assign { target: Name, value: Expr },
    /// A call expression whose result is discarded.
    Call(Expr),
    /// `output(arg)`
    Output(OutputArg),
    /// `input("prompt") -> name`
    Input { prompt: String, target: Name },
    /// `loop: count { body }`
    Loop(LoopStmt),
    /// `exec name(params) { body }`
    Define(Arc<CallableDef>),
    /// `return [expr]`
    Return(Option<Expr>),
    /// A line that failed to parse. Raises its error when executed.
    Invalid(SyntaxError),
}

/// Argument of an `output(...)` statement.
///
/// Raw output mode prints `literal` or the substituted argument text, so the
/// argument keeps its tokens. Evaluate output mode uses `expr`.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputArg {
    /// Argument span within the statement text.
    pub span: Span,
    /// Argument tokens, spans relative to the statement text.
    pub tokens: Vec<Token>,
    /// Raw content when the argument is a single string literal.
    pub literal: Option<String>,
    pub expr: Result<Expr, SyntaxError>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoopStmt {
    /// A count expression that fails to parse is reported when the loop runs.
    pub count: Result<Expr, SyntaxError>,
    pub count_span: Span,
    pub body: Vec<Stmt>,
}

/// A user-defined callable.
#[derive(Clone, Debug, PartialEq)]
pub struct CallableDef {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: Vec<Stmt>,
    /// Line of the `exec` header.
    pub line: u32,
}

/// A parsed script.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Program { stmts }
    }

    /// Every syntax error in the program, including those nested in block
    /// bodies and unparseable loop counts, in source order.
    pub fn syntax_errors(&self) -> Vec<&SyntaxError> {
        let mut errors = Vec::new();
        collect_errors(&self.stmts, &mut errors);
        errors.sort_by_key(|e| (e.line, e.span.start));
        errors
    }
}

fn collect_errors<'a>(stmts: &'a [Stmt], out: &mut Vec<&'a SyntaxError>) {
    for stmt in stmts {
        match &stmt.kind {
            StmtKind::Invalid(err) => out.push(err),
            StmtKind::Loop(lp) => {
                if let Err(err) = &lp.count {
                    out.push(err);
                }
                collect_errors(&lp.body, out);
            }
            StmtKind::Define(def) => collect_errors(&def.body, out),
            // An output argument that fails to parse is only an error in
            // evaluate mode, so it is not listed here.
            StmtKind::Output(_)
            | StmtKind::Assign { .. }
            | StmtKind::Call(_)
            | StmtKind::Input { .. }
            | StmtKind::Return(_) => {}
        }
    }
}
