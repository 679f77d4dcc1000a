//! Print handler for configurable output.
//!
//! Output goes to stdout when running a script and to a buffer in tests.
//! Enum dispatch keeps the hot `output` path free of vtables.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(msg.as_bytes())?;
        out.write_all(b"\n")
    }

    pub fn print(&self, msg: &str) -> io::Result<()> {
        io::stdout().lock().write_all(msg.as_bytes())
    }

    pub fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}

/// Captures output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    /// Discards everything (`clue check`).
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => {
                h.println(msg);
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    /// Print without newline.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => {
                h.print(msg);
                Ok(())
            }
            Self::Silent => Ok(()),
        }
    }

    /// Push pending output to the console, before blocking on input.
    pub fn flush(&self) -> io::Result<()> {
        match self {
            Self::Stdout(h) => h.flush(),
            Self::Buffer(_) | Self::Silent => Ok(()),
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

#[cfg(test)]
mod tests;
