#![allow(clippy::unwrap_used, reason = "tests unwrap infallible buffer writes")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_handler_captures_lines_and_fragments() {
    let handler = buffer_handler();
    handler.print("Name: ").unwrap();
    handler.println("clue").unwrap();
    handler.println("").unwrap();
    assert_eq!(handler.get_output(), "Name: clue\n\n");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = buffer_handler();
    handler.println("hello").unwrap();
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello").unwrap();
    handler.flush().unwrap();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn shared_handles_see_the_same_buffer() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    other.println("a").unwrap();
    handler.println("b").unwrap();
    assert_eq!(handler.get_output(), "a\nb\n");
}
