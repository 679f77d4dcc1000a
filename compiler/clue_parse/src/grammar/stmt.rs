//! Statement parsing.
//!
//! Each non-blank line is classified by its leading tokens:
//!
//! | Leading tokens      | Statement              |
//! |---------------------|------------------------|
//! | `exec`              | callable definition    |
//! | `loop`              | counted loop           |
//! | `return`            | return                 |
//! | `output (`          | output                 |
//! | `input (`           | input                  |
//! | identifier `=`      | assignment             |
//! | anything else       | call expression        |
//!
//! A line that fails to parse becomes `StmtKind::Invalid`; parsing always
//! continues with the next line.

use std::sync::Arc;

use clue_ir::{
    BlockKind, CallableDef, ExprKind, LoopStmt, Name, OutputArg, Program, Span, Stmt, StmtKind,
    StringInterner, SyntaxError, SyntaxErrorKind, Token, TokenKind,
};
use clue_lexer::lex;
use tracing::{debug, trace};

use super::{parse_expression, span_end, span_of, LineContext};
use crate::block::extract_block;
use crate::source::{offset_u32, SourceBuffer, SourceLine};

/// Names the statement classifier or the evaluator claim for themselves;
/// they cannot name a callable or a parameter.
const RESERVED_CALLABLES: &[&str] = &["output", "input", "string", "number"];

/// Statement parser. Holds the interner shared with the evaluator.
pub struct Parser<'a> {
    interner: &'a StringInterner,
}

impl<'a> Parser<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Parser { interner }
    }

    /// Parse a whole script.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&self, source: &str) -> Program {
        let mut buffer = SourceBuffer::new(source);
        let stmts = self.parse_buffer(&mut buffer);
        debug!(statements = stmts.len(), "parsed program");
        Program::new(stmts)
    }

    /// Parse every remaining line of `buffer`.
    pub fn parse_buffer(&self, buffer: &mut SourceBuffer) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        while let Some(line) = buffer.next_line() {
            if let Some(stmt) = self.parse_line(&line, buffer) {
                stmts.push(stmt);
            }
        }
        stmts
    }

    /// Parse one line; block statements also consume their body lines.
    ///
    /// Returns `None` for blank lines.
    fn parse_line(&self, line: &SourceLine, buffer: &mut SourceBuffer) -> Option<Stmt> {
        let indent = line.text.len() - line.text.trim_start().len();
        let text = line.text.trim();
        if text.is_empty() {
            return None;
        }
        let column = line.column + offset_u32(indent);
        trace!(line = line.number, text, "parse line");

        let ctx = LineContext {
            text,
            line: line.number,
            column,
            interner: self.interner,
        };
        let tokens = lex(text, self.interner);
        let tokens = tokens.significant();

        let kind = match tokens.first().map(|t| t.kind) {
            Some(TokenKind::Exec) => {
                let header = SourceLine::new(line.number, column, text);
                self.parse_define(&header, buffer, &ctx)
            }
            Some(TokenKind::Loop) => {
                let header = SourceLine::new(line.number, column, text);
                self.parse_loop(&header, buffer, &ctx)
            }
            Some(TokenKind::Return) => parse_return(tokens, &ctx),
            Some(TokenKind::Ident(name))
                if tokens.get(1).map(|t| t.kind) == Some(TokenKind::LParen)
                    && self.interner.lookup(name) == "output" =>
            {
                parse_output(tokens, &ctx)
            }
            Some(TokenKind::Ident(name))
                if tokens.get(1).map(|t| t.kind) == Some(TokenKind::LParen)
                    && self.interner.lookup(name) == "input" =>
            {
                parse_input(tokens, &ctx)
            }
            Some(TokenKind::Ident(target))
                if tokens.get(1).map(|t| t.kind) == Some(TokenKind::Assign) =>
            {
                let region = ctx.rest_after(&tokens[1]);
                match parse_expression(&tokens[2..], region, &ctx) {
                    Ok(value) => StmtKind::Assign { target, value },
                    Err(err) => StmtKind::Invalid(err),
                }
            }
            Some(TokenKind::RBrace) => StmtKind::Invalid(ctx.bad(
                tokens[0].span,
                tokens[0].span,
                "unmatched `}`",
            )),
            _ => parse_call_stmt(tokens, &ctx),
        };

        Some(Stmt {
            kind,
            line: line.number,
            column,
            text: text.to_string(),
        })
    }

    /// `exec name(params) { body }`
    fn parse_define(
        &self,
        header: &SourceLine,
        buffer: &mut SourceBuffer,
        ctx: &LineContext<'_>,
    ) -> StmtKind {
        let block = match extract_block(buffer, header, BlockKind::Exec) {
            Ok(block) => block,
            Err(err) => return StmtKind::Invalid(err),
        };
        let header_tokens = lex(&block.header, self.interner);
        let (name, params) = match self.parse_signature(header_tokens.significant(), ctx) {
            Ok(sig) => sig,
            Err(err) => return StmtKind::Invalid(err),
        };

        let body = self.parse_buffer(&mut SourceBuffer::from_lines(block.body));
        debug!(
            name = self.interner.lookup(name),
            params = params.len(),
            line = block.line,
            "parsed callable definition"
        );
        StmtKind::Define(Arc::new(CallableDef {
            name,
            params,
            body,
            line: block.line,
        }))
    }

    /// `exec name(a, b, ...)`, without the brace.
    fn parse_signature(
        &self,
        tokens: &[Token],
        ctx: &LineContext<'_>,
    ) -> Result<(Name, Vec<Name>), SyntaxError> {
        let header = span_of(tokens, 0);
        let expected = "expected `exec name(param, ...)`";

        let Some(&Token {
            kind: TokenKind::Ident(name),
            span: name_span,
        }) = tokens.get(1)
        else {
            let at = tokens.get(1).map_or(header, |t| t.span);
            return Err(ctx.bad(header, at, expected));
        };
        if RESERVED_CALLABLES.contains(&self.interner.lookup(name)) {
            return Err(ctx
                .bad(header, name_span, format!("`{}` is a reserved name", self.interner.lookup(name)))
                .with_note("`output`, `input`, `string` and `number` cannot be redefined"));
        }
        if tokens.get(2).map(|t| t.kind) != Some(TokenKind::LParen) {
            let at = tokens.get(2).map_or(name_span, |t| t.span);
            return Err(ctx.bad(header, at, expected));
        }

        let mut params: Vec<Name> = Vec::new();
        let mut pos = 3;
        let mut expect_param = true;
        loop {
            let Some(token) = tokens.get(pos) else {
                return Err(ctx.bad(header, Span::point(header.end), "unclosed parameter list"));
            };
            pos += 1;
            match token.kind {
                TokenKind::RParen if !expect_param || params.is_empty() => break,
                TokenKind::Ident(param) if expect_param => {
                    let param_name = self.interner.lookup(param);
                    if RESERVED_CALLABLES.contains(&param_name) {
                        let reason = format!("`{param_name}` is a reserved name");
                        return Err(ctx.bad(header, token.span, reason).with_note(
                            "`output`, `input`, `string` and `number` cannot be parameters",
                        ));
                    }
                    if params.contains(&param) {
                        return Err(ctx.bad(
                            header,
                            token.span,
                            format!("duplicate parameter `{param_name}`"),
                        ));
                    }
                    params.push(param);
                    expect_param = false;
                }
                TokenKind::Comma if !expect_param => expect_param = true,
                _ => {
                    let found = ctx.token_text(token).to_string();
                    return Err(ctx.bad(
                        header,
                        token.span,
                        format!("unexpected `{found}` in parameter list"),
                    ));
                }
            }
        }

        if let Some(extra) = tokens.get(pos) {
            let found = ctx.token_text(extra).to_string();
            return Err(ctx.bad(header, extra.span, format!("unexpected `{found}` before `{{`")));
        }
        Ok((name, params))
    }

    /// `loop: count { body }`
    fn parse_loop(
        &self,
        header: &SourceLine,
        buffer: &mut SourceBuffer,
        ctx: &LineContext<'_>,
    ) -> StmtKind {
        let block = match extract_block(buffer, header, BlockKind::Loop) {
            Ok(block) => block,
            Err(err) => return StmtKind::Invalid(err),
        };
        let header_tokens = lex(&block.header, self.interner);
        let tokens = header_tokens.significant();

        let Some(colon) = tokens.get(1).filter(|t| t.kind == TokenKind::Colon) else {
            let whole = span_of(tokens, 0);
            let at = tokens.get(1).map_or(whole, |t| t.span);
            return StmtKind::Invalid(ctx.bad(whole, at, "expected `:` after `loop`"));
        };
        let count_span = Span::new(colon.span.end, span_end(&block.header));
        let count = if tokens.len() > 2 {
            parse_expression(&tokens[2..], count_span, ctx)
        } else {
            Err(ctx.bad(count_span, Span::point(colon.span.end), "missing loop count"))
        };

        let body = self.parse_buffer(&mut SourceBuffer::from_lines(block.body));
        debug!(line = block.line, statements = body.len(), "parsed loop");
        StmtKind::Loop(LoopStmt {
            count,
            count_span: span_of(&tokens[2..], colon.span.end),
            body,
        })
    }
}

/// `return` or `return expr`
fn parse_return(tokens: &[Token], ctx: &LineContext<'_>) -> StmtKind {
    if tokens.len() == 1 {
        return StmtKind::Return(None);
    }
    match parse_expression(&tokens[1..], ctx.rest_after(&tokens[0]), ctx) {
        Ok(value) => StmtKind::Return(Some(value)),
        Err(err) => StmtKind::Invalid(err),
    }
}

/// Index of the `)` matching the `(` at `open`.
fn matching_paren(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, token) in tokens.iter().enumerate().skip(open) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// `output(arg)`
fn parse_output(tokens: &[Token], ctx: &LineContext<'_>) -> StmtKind {
    let whole = span_of(tokens, 0);
    let Some(close) = matching_paren(tokens, 1) else {
        return StmtKind::Invalid(ctx.bad(whole, tokens[1].span, "unclosed `(` in `output`"));
    };
    if let Some(extra) = tokens.get(close + 1) {
        let found = ctx.token_text(extra).to_string();
        return StmtKind::Invalid(ctx.bad(
            whole,
            extra.span,
            format!("unexpected `{found}` after `output(...)`"),
        ));
    }

    let args = &tokens[2..close];
    let span = span_of(args, tokens[1].span.end);
    let literal = match args {
        [Token {
            kind: TokenKind::Str(_),
            span,
        }] => {
            let raw = span.slice(ctx.text);
            Some(raw[1..raw.len() - 1].to_string())
        }
        _ => None,
    };
    let region = Span::new(tokens[1].span.end, tokens[close].span.start);
    let expr = parse_expression(args, region, ctx);

    StmtKind::Output(OutputArg {
        span,
        tokens: args.to_vec(),
        literal,
        expr,
    })
}

/// `input("prompt") -> name`
fn parse_input(tokens: &[Token], ctx: &LineContext<'_>) -> StmtKind {
    let whole = span_of(tokens, 0);
    let Some(close) = matching_paren(tokens, 1) else {
        return StmtKind::Invalid(ctx.bad(whole, tokens[1].span, "unclosed `(` in `input`"));
    };

    let rest = &tokens[close + 1..];
    let Some(arrow) = rest.first().filter(|t| t.kind == TokenKind::Arrow) else {
        let at = rest.first().map_or(Span::point(whole.end), |t| t.span);
        return StmtKind::Invalid(
            SyntaxError::new(
                SyntaxErrorKind::MissingInputBinding,
                ctx.line,
                at.shift(ctx.column),
            )
            .with_note("write `input(\"prompt\") -> name` to store the line that was read"),
        );
    };
    let target = match rest.get(1..) {
        Some(
            [Token {
                kind: TokenKind::Ident(target),
                ..
            }],
        ) => *target,
        _ => {
            let at = span_of(&rest[1..], arrow.span.end);
            return StmtKind::Invalid(ctx.bad(whole, at, "expected a variable name after `->`"));
        }
    };

    let prompt = match &tokens[2..close] {
        [] => String::new(),
        [Token {
            kind: TokenKind::Str(_),
            span,
        }] => {
            let raw = span.slice(ctx.text);
            raw[1..raw.len() - 1].to_string()
        }
        args => {
            let at = span_of(args, tokens[1].span.end);
            return StmtKind::Invalid(ctx.bad(
                whole,
                at,
                "the `input` prompt must be a string literal",
            ));
        }
    };

    StmtKind::Input { prompt, target }
}

/// A line that must be a call expression.
fn parse_call_stmt(tokens: &[Token], ctx: &LineContext<'_>) -> StmtKind {
    let whole = span_of(tokens, 0);
    match parse_expression(tokens, whole, ctx) {
        Ok(expr) if matches!(expr.kind, ExprKind::Call { .. }) => StmtKind::Call(expr),
        Ok(expr) => StmtKind::Invalid(ctx.bad(
            whole,
            expr.span,
            "expected a statement: assignment, call, block, `output`, `input` or `return`",
        )),
        Err(err) => StmtKind::Invalid(err),
    }
}
