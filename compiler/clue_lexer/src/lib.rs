//! Lexer for Clue using logos with string interning.
//!
//! Clue is line oriented: the lexer runs on one comment-stripped line (or a
//! fragment of one) at a time and never sees a newline. Spans in the
//! resulting [`TokenList`] are byte offsets into the text that was lexed.

mod comments;
mod escape;
pub mod scan;

use clue_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;

pub use comments::strip_comments;
pub use escape::unescape_string;

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")]
enum RawToken {
    // Keywords
    #[token("exec")]
    Exec,
    #[token("loop")]
    Loop,
    #[token("return")]
    Return,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("not")]
    Not,
    #[token("true")]
    #[token("True")]
    True,
    #[token("false")]
    #[token("False")]
    False,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("->")]
    Arrow,
    #[token("==")]
    EqEq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,

    // Literals
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    Sigil,

    #[regex(r"\$\{[a-zA-Z_][a-zA-Z0-9_]*\}")]
    BracedSigil,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex a line of Clue source into tokens.
///
/// Unrecognized input becomes `TokenKind::Error` tokens rather than failing;
/// the parser decides what an error token means in context. The list always
/// ends with an `Eof` token.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let mut result = TokenList::with_capacity(source.len() / 2 + 1);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let kind = match token_result {
            Ok(raw) => convert_token(raw, logos.slice(), interner),
            Err(()) => TokenKind::Error,
        };
        result.push(Token::new(kind, span));
    }

    result.push(Token::new(
        TokenKind::Eof,
        Span::from_range(source.len()..source.len()),
    ));
    result
}

/// Convert a raw token to a `TokenKind`, interning names and string content.
fn convert_token(raw: RawToken, slice: &str, interner: &StringInterner) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::float(f),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(interner.intern(&unescape_string(content)))
        }
        RawToken::Sigil => TokenKind::Sigil(interner.intern(&slice[1..])),
        RawToken::BracedSigil => TokenKind::Sigil(interner.intern(&slice[2..slice.len() - 1])),
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        RawToken::Exec => TokenKind::Exec,
        RawToken::Loop => TokenKind::Loop,
        RawToken::Return => TokenKind::Return,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Not => TokenKind::Not,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Bang => TokenKind::Bang,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
    }
}

/// Render a token list one token per line, as `clue lex` prints it.
pub fn render_tokens(source: &str, tokens: &TokenList, interner: &StringInterner) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for token in tokens.significant() {
        let _ = write!(out, "{:?} {}", token.span, token.kind.display_name());
        match token.kind {
            TokenKind::Ident(name) | TokenKind::Sigil(name) => {
                let _ = write!(out, " `{}`", interner.lookup(name));
            }
            TokenKind::Str(name) => {
                let _ = write!(out, " {:?}", interner.lookup(name));
            }
            TokenKind::Int(n) => {
                let _ = write!(out, " {n}");
            }
            TokenKind::Float(bits) => {
                let _ = write!(out, " {:?}", f64::from_bits(bits));
            }
            TokenKind::Error => {
                let _ = write!(out, " `{}`", token.span.slice(source));
            }
            _ => {}
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests;
