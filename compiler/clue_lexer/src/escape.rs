//! Escape sequence processing for string literals.
//!
//! Recognized escapes: `\n`, `\t`, `\\`, `\"`. Anything else is kept
//! literally (`\q` stays `\q`).

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}

/// Process the escapes in the content of a string literal (quotes removed).
pub fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => {
                if let Some(resolved) = resolve_escape(esc) {
                    result.push(resolved);
                } else {
                    result.push('\\');
                    result.push(esc);
                }
            }
            None => result.push('\\'),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_escapes() {
        assert_eq!(unescape_string(r"a\nb\tc"), "a\nb\tc");
        assert_eq!(unescape_string(r#"say \"hi\""#), "say \"hi\"");
        assert_eq!(unescape_string(r"back\\slash"), "back\\slash");
    }

    #[test]
    fn test_unknown_escape_is_literal() {
        assert_eq!(unescape_string(r"\q"), r"\q");
        assert_eq!(unescape_string("trailing\\"), "trailing\\");
    }
}
