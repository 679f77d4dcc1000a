//! Comment stripping.
//!
//! Two comment forms, both opened by `>>`:
//! - inline `>> text <<`, anywhere in a line and repeatable;
//! - trailing `>> text`, which runs to the end of the line.
//!
//! Markers inside string literals are text. Inside a comment, quotes have no
//! meaning, so the closing `<<` is searched for verbatim.

use std::borrow::Cow;

use memchr::memmem;

/// Remove comments from a single line.
///
/// Borrows when the line has no comment.
pub fn strip_comments(line: &str) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    if memmem::find(bytes, b">>").is_none() {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    // Start of the text not yet copied to `out`.
    let mut copied = 0;
    let mut pos = 0;
    let mut in_string = false;

    while let Some(&b) = bytes.get(pos) {
        if in_string {
            match b {
                b'\\' => pos += 2,
                b'"' => {
                    in_string = false;
                    pos += 1;
                }
                _ => pos += 1,
            }
            continue;
        }
        match b {
            b'"' => {
                in_string = true;
                pos += 1;
            }
            b'>' if bytes.get(pos + 1) == Some(&b'>') => {
                out.push_str(&line[copied..pos]);
                let body = pos + 2;
                match memmem::find(&bytes[body..], b"<<") {
                    Some(rel) => {
                        pos = body + rel + 2;
                        copied = pos;
                    }
                    None => return Cow::Owned(out),
                }
            }
            _ => pos += 1,
        }
    }

    if copied == 0 {
        // Every `>>` was inside a string literal.
        return Cow::Borrowed(line);
    }
    out.push_str(&line[copied..]);
    Cow::Owned(out)
}
