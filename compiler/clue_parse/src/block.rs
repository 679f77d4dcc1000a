//! Block extraction.
//!
//! A block header (`loop: n` or `exec name(params)`) is followed by `{`,
//! either on the header line or after blank lines, and the block runs to the
//! matching `}`. Braces are depth-tracked so blocks nest, and braces inside
//! string literals are ignored. Text after `{` on the opening line and before
//! `}` on the closing line belongs to the body, so a block can open and close
//! on a single line.

use clue_ir::{BlockKind, Span, SyntaxError, SyntaxErrorKind};
use clue_lexer::scan::{find_unquoted, Unquoted};
use tracing::debug;

use crate::source::{offset_u32, SourceBuffer, SourceLine};

/// Header and raw body lines of one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Header text before the opening brace, trailing whitespace removed.
    pub header: String,
    /// Body lines (possibly partial lines), blank lines dropped.
    pub body: Vec<SourceLine>,
    /// Line of the header.
    pub line: u32,
}

/// Extract the block opened by `header`, consuming its lines from `buffer`.
///
/// `header` has already been taken from the buffer; the cursor points at the
/// line after it. On success the cursor points past the closing brace.
pub fn extract_block(
    buffer: &mut SourceBuffer,
    header: &SourceLine,
    kind: BlockKind,
) -> Result<Block, SyntaxError> {
    let header_span = Span::from_range(0..header.text.len()).shift(header.column);

    let (header_text, first) = if let Some(open) = find_unquoted(&header.text, b'{') {
        (header.text[..open].trim_end(), header.suffix(open + 1))
    } else {
        // Only blank lines may separate the header from its brace.
        loop {
            let Some(line) = buffer.current() else {
                return Err(missing_open_brace(kind, header.number, header_span));
            };
            if line.is_blank() {
                buffer.advance();
                continue;
            }
            let indent = line.text.len() - line.text.trim_start().len();
            if !line.text[indent..].starts_with('{') {
                return Err(missing_open_brace(kind, header.number, header_span));
            }
            let opening = line.suffix(indent + 1);
            buffer.advance();
            break (header.text.trim_end(), opening);
        }
    };

    let mut body = Vec::new();
    let mut depth = 1usize;
    let mut segment = Some(first);

    loop {
        let line = match segment.take() {
            Some(line) => line,
            None => buffer.next_line().ok_or_else(|| {
                SyntaxError::new(
                    SyntaxErrorKind::UnclosedBlock { block: kind },
                    header.number,
                    header_span,
                )
                .with_note("the block's body was not executed")
            })?,
        };

        let Some(close) = find_closing_brace(&line.text, &mut depth) else {
            if !line.is_blank() {
                body.push(line);
            }
            continue;
        };

        let inside = line.prefix(close);
        if !inside.is_blank() {
            body.push(inside);
        }
        let after = line.suffix(close + 1);
        if !after.is_blank() {
            let trimmed = after.text.trim();
            let lead = after.text.len() - after.text.trim_start().len();
            let span = Span::from_range(0..trimmed.len()).shift(after.column + offset_u32(lead));
            return Err(SyntaxError::bad_expression(
                trimmed,
                format!("unexpected text after the closing `}}` of `{}` block", kind.keyword()),
                after.number,
                span,
            ));
        }

        debug!(
            block = kind.keyword(),
            line = header.number,
            body_lines = body.len(),
            "extracted block"
        );
        return Ok(Block {
            header: header_text.to_string(),
            body,
            line: header.number,
        });
    }
}

/// Offset of the brace that brings `depth` to zero, updating `depth` for
/// every unquoted brace seen before it.
fn find_closing_brace(text: &str, depth: &mut usize) -> Option<usize> {
    for (at, b) in Unquoted::new(text) {
        match b {
            b'{' => *depth += 1,
            b'}' => {
                *depth -= 1;
                if *depth == 0 {
                    return Some(at);
                }
            }
            _ => {}
        }
    }
    None
}

fn missing_open_brace(kind: BlockKind, line: u32, span: Span) -> SyntaxError {
    SyntaxError::new(SyntaxErrorKind::MissingOpenBrace { block: kind }, line, span)
}
