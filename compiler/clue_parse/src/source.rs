//! Source buffer: the script as numbered lines with a forward-only cursor.

use clue_lexer::strip_comments;

/// One line (or the part of a line) handed to the statement parser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the script.
    pub number: u32,
    /// Byte offset of `text` within the original line.
    pub column: u32,
    /// Comment-stripped text.
    pub text: String,
}

impl SourceLine {
    pub fn new(number: u32, column: u32, text: impl Into<String>) -> Self {
        SourceLine {
            number,
            column,
            text: text.into(),
        }
    }

    /// The part of this line starting at byte `from`.
    #[must_use]
    pub fn suffix(&self, from: usize) -> SourceLine {
        let from = from.min(self.text.len());
        SourceLine {
            number: self.number,
            column: self.column + offset_u32(from),
            text: self.text[from..].to_string(),
        }
    }

    /// The part of this line before byte `to`.
    #[must_use]
    pub fn prefix(&self, to: usize) -> SourceLine {
        let to = to.min(self.text.len());
        SourceLine {
            number: self.number,
            column: self.column,
            text: self.text[..to].to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

pub(crate) fn offset_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

/// Ordered script lines with a single read cursor that never rewinds.
///
/// Block extraction and statement parsing share the cursor: when a block is
/// extracted, the lines of its body are consumed here.
#[derive(Clone, Debug, Default)]
pub struct SourceBuffer {
    lines: Vec<SourceLine>,
    cursor: usize,
}

impl SourceBuffer {
    /// Split a script into lines, numbering from 1 and stripping comments.
    pub fn new(source: &str) -> Self {
        let lines = source
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                SourceLine::new(offset_u32(idx + 1), 0, strip_comments(line).into_owned())
            })
            .collect();
        SourceBuffer { lines, cursor: 0 }
    }

    /// Buffer over already-prepared lines (a block body).
    pub fn from_lines(lines: Vec<SourceLine>) -> Self {
        SourceBuffer { lines, cursor: 0 }
    }

    /// The line under the cursor.
    pub fn current(&self) -> Option<&SourceLine> {
        self.lines.get(self.cursor)
    }

    pub fn advance(&mut self) {
        if self.cursor < self.lines.len() {
            self.cursor += 1;
        }
    }

    /// Take the line under the cursor and move past it.
    pub fn next_line(&mut self) -> Option<SourceLine> {
        let line = self.lines.get(self.cursor).cloned();
        self.advance();
        line
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.lines.len()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests;
