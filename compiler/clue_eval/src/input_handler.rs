//! Input handler for the `input` statement.
//!
//! Reads one line at a time from stdin, or from a scripted queue in tests.
//! End of input is reported as `None`.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::sync::Arc;

use parking_lot::Mutex;

/// Input handler implementation using enum dispatch.
pub enum InputHandlerImpl {
    Stdin,
    /// Pre-recorded lines, consumed front to back.
    Scripted(Mutex<VecDeque<String>>),
}

impl InputHandlerImpl {
    /// Read one line without its line terminator, or `None` at end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                Ok(Some(trim_line_ending(line)))
            }
            Self::Scripted(lines) => Ok(lines.lock().pop_front()),
        }
    }
}

fn trim_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

pub type SharedInputHandler = Arc<InputHandlerImpl>;

pub fn stdin_handler() -> SharedInputHandler {
    Arc::new(InputHandlerImpl::Stdin)
}

/// Handler that answers `input` with `lines`, then reports end of input.
pub fn scripted_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(InputHandlerImpl::Scripted(Mutex::new(
        lines.into_iter().map(Into::into).collect(),
    )))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "tests unwrap infallible reads")]

    use super::*;

    #[test]
    fn scripted_lines_then_end_of_input() {
        let handler = scripted_handler(["first", "second"]);
        assert_eq!(handler.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(handler.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(handler.read_line().unwrap(), None);
    }

    #[test]
    fn line_endings_are_removed() {
        assert_eq!(trim_line_ending("abc\r\n".to_string()), "abc");
        assert_eq!(trim_line_ending("abc\n".to_string()), "abc");
        assert_eq!(trim_line_ending("abc".to_string()), "abc");
    }
}
