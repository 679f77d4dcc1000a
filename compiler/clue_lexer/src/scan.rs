//! Quote-aware byte scanning.
//!
//! Structural characters (`{`, `}`, `>>`, `->`) inside a double-quoted string
//! literal are text, not syntax. These helpers walk a line and skip over
//! string literals, honoring backslash escapes. A literal never spans lines,
//! so an unterminated one runs to the end of the line.

/// Iterator over `(offset, byte)` pairs of a line outside string literals.
///
/// Quote characters themselves are not yielded.
pub struct Unquoted<'a> {
    bytes: &'a [u8],
    pos: usize,
    in_string: bool,
}

impl<'a> Unquoted<'a> {
    pub fn new(line: &'a str) -> Self {
        Unquoted {
            bytes: line.as_bytes(),
            pos: 0,
            in_string: false,
        }
    }
}

impl Iterator for Unquoted<'_> {
    type Item = (usize, u8);

    fn next(&mut self) -> Option<(usize, u8)> {
        while let Some(&b) = self.bytes.get(self.pos) {
            let at = self.pos;
            self.pos += 1;
            if self.in_string {
                match b {
                    b'\\' => self.pos += 1,
                    b'"' => self.in_string = false,
                    _ => {}
                }
                continue;
            }
            if b == b'"' {
                self.in_string = true;
                continue;
            }
            return Some((at, b));
        }
        None
    }
}

/// Offset of the first `needle` outside string literals.
pub fn find_unquoted(line: &str, needle: u8) -> Option<usize> {
    Unquoted::new(line).find(|&(_, b)| b == needle).map(|(at, _)| at)
}
