//! Parser for the Clue scripting language.
//!
//! The script is read as a [`SourceBuffer`] of comment-stripped lines. The
//! [`Parser`] classifies each line into a statement; block headers hand the
//! buffer to [`extract_block`], which consumes the body lines, and the body
//! is parsed recursively into its own statement list.
//!
//! Parsing never stops at the first error: a line that cannot be parsed
//! becomes an invalid statement that carries its [`SyntaxError`]. The
//! evaluator raises it only when execution reaches that statement.

mod block;
pub mod error;
mod grammar;
mod source;

pub use block::{extract_block, Block};
pub use grammar::Parser;
pub use source::{SourceBuffer, SourceLine};

use clue_ir::{Program, StringInterner};

/// Parse a complete script.
pub fn parse_program(source: &str, interner: &StringInterner) -> Program {
    Parser::new(interner).parse_program(source)
}

#[cfg(test)]
mod tests;
