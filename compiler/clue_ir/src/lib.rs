//! Clue IR - shared data structures for the Clue interpreter.
//!
//! - Spans for locations within a source line
//! - Names for interned identifiers and string literals
//! - Tokens and `TokenList` for lexer output
//! - Expression and statement trees
//! - Syntax errors, which the parser stores inline instead of aborting

pub mod ast;
mod interner;
mod name;
mod span;
mod syntax_error;
mod token;

pub use ast::{
    BinaryOp, CallableDef, Expr, ExprKind, LoopStmt, OutputArg, Program, Stmt, StmtKind,
    UnaryOp,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use syntax_error::{BlockKind, SyntaxError, SyntaxErrorKind};
pub use token::{Token, TokenKind, TokenList};
