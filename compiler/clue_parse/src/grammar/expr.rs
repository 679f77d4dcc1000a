//! Expression parsing.
//!
//! Precedence climbing over a token slice, loosest to tightest:
//! `or`, `and`, prefix `not`, comparisons, `+ -`, `* / %`, prefix `- +`,
//! then primaries (literals, variables, calls, parentheses).
//!
//! Recursion goes through `ensure_sufficient_stack` so deeply parenthesized
//! input cannot overflow the native stack.

use clue_ir::{BinaryOp, Expr, ExprKind, Span, SyntaxError, Token, TokenKind, UnaryOp};
use clue_stack::ensure_sufficient_stack;

use super::LineContext;

/// Parse `tokens` as one complete expression.
///
/// `region` is the statement-relative span the tokens came from; it names
/// the offending text in errors (and locates an empty expression).
pub(crate) fn parse_expression(
    tokens: &[Token],
    region: Span,
    ctx: &LineContext<'_>,
) -> Result<Expr, SyntaxError> {
    let mut parser = ExprParser {
        tokens,
        pos: 0,
        region,
        ctx,
    };
    let expr = parser.parse_binary(0)?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) if token.kind == TokenKind::RParen => {
            Err(parser.error(token.span, "unmatched `)`"))
        }
        Some(token) => {
            let found = parser.ctx.token_text(token).to_string();
            Err(parser.error(token.span, format!("unexpected `{found}`")))
        }
    }
}

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::And | TokenKind::AmpAmp => BinaryOp::And,
        TokenKind::Or | TokenKind::PipePipe => BinaryOp::Or,
        _ => return None,
    };
    Some(op)
}

struct ExprParser<'t, 'c> {
    tokens: &'t [Token],
    pos: usize,
    region: Span,
    ctx: &'c LineContext<'c>,
}

impl ExprParser<'_, '_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).copied();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn end_span(&self) -> Span {
        Span::point(self.tokens.last().map_or(self.region.end, |t| t.span.end))
    }

    fn error(&self, at: Span, reason: impl Into<String>) -> SyntaxError {
        self.ctx.bad(self.region, at, reason)
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, SyntaxError> {
        ensure_sufficient_stack(|| self.parse_binary_inner(min_prec))
    }

    fn parse_binary_inner(&mut self, min_prec: u8) -> Result<Expr, SyntaxError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.peek_kind().and_then(binary_op) {
            if op.precedence() < min_prec {
                break;
            }
            self.pos += 1;
            let right = self.parse_binary(op.precedence() + 1)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, SyntaxError> {
        let op = match self.peek_kind() {
            Some(TokenKind::Minus) => UnaryOp::Neg,
            Some(TokenKind::Plus) => UnaryOp::Plus,
            Some(TokenKind::Not | TokenKind::Bang) => UnaryOp::Not,
            _ => return self.parse_primary(),
        };
        let start = self.advance().map_or(self.region, |t| t.span);
        let operand = self.parse_binary(op.precedence())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn parse_primary(&mut self) -> Result<Expr, SyntaxError> {
        let Some(token) = self.advance() else {
            return Err(self.error(self.end_span(), "expected an operand at end of expression"));
        };
        let span = token.span;

        let kind = match token.kind {
            TokenKind::Int(n) => ExprKind::Int(n),
            TokenKind::Float(bits) => ExprKind::Float(f64::from_bits(bits)),
            TokenKind::Str(content) => ExprKind::Str(self.ctx.interner.lookup(content).to_string()),
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Sigil(name) => ExprKind::Sigil(name),
            TokenKind::Ident(name) => {
                if self.check(TokenKind::LParen) {
                    return self.parse_call(name, span);
                }
                ExprKind::Ident(name)
            }
            TokenKind::LParen => {
                let inner = self.parse_binary(0)?;
                let Some(close) = self.advance().filter(|t| t.kind == TokenKind::RParen) else {
                    return Err(self.error(span, "unclosed `(`"));
                };
                return Ok(Expr::new(inner.kind, span.merge(close.span)));
            }
            TokenKind::Error => {
                let found = self.ctx.token_text(&token).to_string();
                return Err(self.error(span, format!("unrecognized `{found}`")));
            }
            _ => {
                let found = self.ctx.token_text(&token).to_string();
                return Err(self.error(span, format!("expected an operand, found `{found}`")));
            }
        };

        Ok(Expr::new(kind, span))
    }

    /// `name(arg, ...)`, with the cursor on the `(`.
    fn parse_call(&mut self, callee: clue_ir::Name, start: Span) -> Result<Expr, SyntaxError> {
        let open = self.advance().map_or(start, |t| t.span);
        let mut args = Vec::new();

        if let Some(close) = self.peek().filter(|t| t.kind == TokenKind::RParen).copied() {
            self.pos += 1;
            return Ok(Expr::new(
                ExprKind::Call { callee, args },
                start.merge(close.span),
            ));
        }

        loop {
            args.push(self.parse_binary(0)?);
            match self.advance() {
                Some(Token {
                    kind: TokenKind::Comma,
                    ..
                }) => {}
                Some(Token {
                    kind: TokenKind::RParen,
                    span,
                }) => {
                    return Ok(Expr::new(
                        ExprKind::Call { callee, args },
                        start.merge(span),
                    ));
                }
                Some(other) => {
                    let found = self.ctx.token_text(&other).to_string();
                    return Err(self.error(
                        other.span,
                        format!("expected `,` or `)` in call arguments, found `{found}`"),
                    ));
                }
                None => return Err(self.error(open, "unclosed `(` in call")),
            }
        }
    }
}
