//! Statement and expression grammar.
//!
//! - `stmt`: line classification and block statements
//! - `expr`: precedence-climbing expression parser

mod expr;
mod stmt;

pub(crate) use expr::parse_expression;
pub use stmt::Parser;

use clue_ir::{Span, StringInterner, SyntaxError, Token, TokenKind};

/// The statement currently being parsed.
///
/// Token spans are relative to `text`; errors are reported relative to the
/// source line, so they are shifted by `column`.
pub(crate) struct LineContext<'a> {
    pub text: &'a str,
    pub line: u32,
    pub column: u32,
    pub interner: &'a StringInterner,
}

impl LineContext<'_> {
    /// A `BadExpression` for the text covered by `region`, pointing at `at`.
    pub fn bad(&self, region: Span, at: Span, reason: impl Into<String>) -> SyntaxError {
        SyntaxError::bad_expression(
            region.slice(self.text).trim(),
            reason,
            self.line,
            at.shift(self.column),
        )
    }

    /// Source text of a token, for messages.
    pub fn token_text(&self, token: &Token) -> &str {
        match token.kind {
            TokenKind::Eof => "end of line",
            _ => token.span.slice(self.text),
        }
    }

    /// Span of the statement text after `token`, to the end.
    pub fn rest_after(&self, token: &Token) -> Span {
        Span::new(token.span.end, span_end(self.text))
    }
}

/// Span covering a run of tokens, or a point at `fallback` when empty.
pub(crate) fn span_of(tokens: &[Token], fallback: u32) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.merge(last.span),
        _ => Span::point(fallback),
    }
}

pub(crate) fn span_end(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}
