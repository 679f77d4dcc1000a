use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner)
        .significant()
        .iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_assignment() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    assert_eq!(
        kinds("x = 3 + 4.5", &interner),
        vec![
            TokenKind::Ident(x),
            TokenKind::Assign,
            TokenKind::Int(3),
            TokenKind::Plus,
            TokenKind::float(4.5),
        ]
    );
}

#[test]
fn test_block_headers() {
    let interner = StringInterner::new();
    let add = interner.intern("add");
    let a = interner.intern("a");
    let b = interner.intern("b");
    assert_eq!(
        kinds("exec add(a, b) {", &interner),
        vec![
            TokenKind::Exec,
            TokenKind::Ident(add),
            TokenKind::LParen,
            TokenKind::Ident(a),
            TokenKind::Comma,
            TokenKind::Ident(b),
            TokenKind::RParen,
            TokenKind::LBrace,
        ]
    );
    assert_eq!(
        kinds("loop: 3 {", &interner),
        vec![
            TokenKind::Loop,
            TokenKind::Colon,
            TokenKind::Int(3),
            TokenKind::LBrace,
        ]
    );
}

#[test]
fn test_keywords_are_whole_words() {
    let interner = StringInterner::new();
    let looping = interner.intern("looping");
    let order = interner.intern("order");
    assert_eq!(
        kinds("looping order", &interner),
        vec![TokenKind::Ident(looping), TokenKind::Ident(order)]
    );
}

#[test]
fn test_boolean_spellings() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("true True false False", &interner),
        vec![
            TokenKind::True,
            TokenKind::True,
            TokenKind::False,
            TokenKind::False
        ]
    );
}

#[test]
fn test_sigils() {
    let interner = StringInterner::new();
    let name = interner.intern("name");
    assert_eq!(
        kinds("$name ${name}", &interner),
        vec![TokenKind::Sigil(name), TokenKind::Sigil(name)]
    );
}

#[test]
fn test_string_literal_is_unescaped_and_spanned() {
    let interner = StringInterner::new();
    let tokens = lex(r#"output("a\tb")"#, &interner);
    let TokenKind::Str(content) = tokens[2].kind else {
        panic!("expected string token, got {:?}", tokens[2]);
    };
    assert_eq!(interner.lookup(content), "a\tb");
    assert_eq!(tokens[2].span, Span::new(7, 13));
}

#[test]
fn test_operators() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("== != <= >= < > && || ! -> %", &interner),
        vec![
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::AmpAmp,
            TokenKind::PipePipe,
            TokenKind::Bang,
            TokenKind::Arrow,
            TokenKind::Percent,
        ]
    );
}

#[test]
fn test_float_forms() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("3. .5 1e3", &interner),
        vec![
            TokenKind::float(3.0),
            TokenKind::float(0.5),
            TokenKind::float(1000.0)
        ]
    );
}

#[test]
fn test_unrecognized_input_is_error_token() {
    let interner = StringInterner::new();
    let tokens = lex("x = 1 @ 2", &interner);
    assert!(tokens.has_errors());
    assert_eq!(tokens[3].kind, TokenKind::Error);
    assert_eq!(tokens[3].span.slice("x = 1 @ 2"), "@");
}

#[test]
fn test_integer_overflow_is_error_token() {
    let interner = StringInterner::new();
    assert_eq!(
        kinds("99999999999999999999", &interner),
        vec![TokenKind::Error]
    );
}

#[test]
fn test_eof_span() {
    let interner = StringInterner::new();
    let tokens = lex("ab", &interner);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    assert_eq!(tokens[1].span, Span::point(2));
}

#[test]
fn test_render_tokens() {
    let interner = StringInterner::new();
    let source = r#"x = "hi""#;
    let tokens = lex(source, &interner);
    assert_eq!(
        render_tokens(source, &tokens, &interner),
        "0..1 identifier `x`\n2..3 =\n4..8 string \"hi\"\n"
    );
}
