use super::*;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, start: u32, end: u32) -> Token {
    Token::new(kind, Span::new(start, end))
}

#[test]
fn test_significant_strips_eof() {
    let mut list = TokenList::new();
    list.push(tok(TokenKind::Int(1), 0, 1));
    list.push(tok(TokenKind::Plus, 2, 3));
    list.push(tok(TokenKind::Eof, 3, 3));
    assert_eq!(list.len(), 3);
    assert_eq!(list.significant().len(), 2);
    assert_eq!(list[1].kind, TokenKind::Plus);
}

#[test]
fn test_has_errors() {
    let mut list = TokenList::with_capacity(2);
    list.push(tok(TokenKind::Error, 0, 1));
    list.push(tok(TokenKind::Eof, 1, 1));
    assert!(list.has_errors());
}

#[test]
fn test_float_bits_roundtrip() {
    let TokenKind::Float(bits) = TokenKind::float(2.5) else {
        panic!("expected float token");
    };
    assert_eq!(f64::from_bits(bits), 2.5);
}

#[test]
fn test_display_names() {
    assert_eq!(TokenKind::Arrow.display_name(), "->");
    assert_eq!(TokenKind::Sigil(Name::EMPTY).display_name(), "variable");
    assert_eq!(TokenKind::Eof.display_name(), "end of line");
}
