//! Substitution engine.
//!
//! Rewrites a run of tokens back into text with variable references replaced
//! by the display form of their values:
//!
//! - `$name` / `${name}` always resolve; an unbound name becomes empty text;
//! - a bare `name` is replaced only when it is bound, and never when it names
//!   a callable in call position (`name(`);
//! - everything else, string literals included, is copied from the source.
//!
//! The text between tokens is kept as written, so spacing survives.

use std::fmt::Write;

use clue_ir::{Token, TokenKind};

use crate::Environment;

/// Substitute the references in `tokens`, whose spans index into `text`.
pub fn substitute(text: &str, tokens: &[Token], env: &Environment) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_end: Option<usize> = None;

    for (idx, token) in tokens.iter().enumerate() {
        let range = token.span.to_range();
        if let Some(end) = prev_end {
            out.push_str(text.get(end..range.start).unwrap_or_default());
        }
        prev_end = Some(range.end);

        let source = token.span.slice(text);
        match token.kind {
            TokenKind::Sigil(name) => {
                if let Some(value) = env.lookup(name) {
                    let _ = write!(out, "{value}");
                }
            }
            TokenKind::Ident(name) => {
                let in_call_position =
                    tokens.get(idx + 1).is_some_and(|next| next.kind == TokenKind::LParen);
                match env.lookup(name) {
                    Some(value) if !in_call_position => {
                        let _ = write!(out, "{value}");
                    }
                    _ => out.push_str(source),
                }
            }
            TokenKind::Eof => {}
            _ => out.push_str(source),
        }
    }
    out
}
