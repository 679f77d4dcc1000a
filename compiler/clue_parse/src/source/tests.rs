use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_lines_are_numbered_and_stripped() {
    let mut buffer = SourceBuffer::new("x = 1 >> set x\n\n>> only a comment\ny = 2");
    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer.next_line(), Some(SourceLine::new(1, 0, "x = 1 ")));
    assert_eq!(buffer.next_line().map(|l| l.is_blank()), Some(true));
    assert_eq!(buffer.next_line().map(|l| l.is_blank()), Some(true));
    assert_eq!(buffer.current().map(|l| l.number), Some(4));
    assert_eq!(buffer.next_line().map(|l| l.text), Some("y = 2".to_string()));
    assert!(buffer.is_at_end());
    assert_eq!(buffer.next_line(), None);
}

#[test]
fn test_cursor_never_moves_past_end() {
    let mut buffer = SourceBuffer::new("a()");
    buffer.advance();
    buffer.advance();
    assert!(buffer.is_at_end());
    assert_eq!(buffer.current(), None);
}

#[test]
fn test_crlf_lines() {
    let mut buffer = SourceBuffer::new("a()\r\nb()\r\n");
    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.next_line().map(|l| l.text), Some("a()".to_string()));
}

#[test]
fn test_suffix_and_prefix_track_columns() {
    let line = SourceLine::new(3, 4, "loop: 2 { go() }");
    let rest = line.suffix(9);
    assert_eq!(rest, SourceLine::new(3, 13, " go() }"));
    assert_eq!(rest.prefix(6), SourceLine::new(3, 13, " go() "));
    assert_eq!(line.suffix(100).text, "");
}

#[test]
fn test_empty_source() {
    let buffer = SourceBuffer::new("");
    assert!(buffer.is_empty());
    assert!(buffer.is_at_end());
    assert_eq!(buffer.current(), None);
}
