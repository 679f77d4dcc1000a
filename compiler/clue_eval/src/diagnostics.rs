//! Call stack tracking and backtraces.
//!
//! Each call to a user-defined callable pushes a [`CallFrame`]; the depth
//! check is part of [`CallStack::push`]. When a runtime error escapes a
//! callable, the live stack is captured as an [`EvalBacktrace`] and attached
//! to the error.

use std::fmt;

use clue_ir::{Name, StringInterner};

use crate::errors::{call_depth_exceeded, EvalError};

/// One live call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub name: Name,
    /// Line of the call site.
    pub call_line: u32,
}

/// Live call stack with a depth limit.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a frame, failing with `CallDepthExceeded` if the stack is full.
    /// The frame is not pushed on failure.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(call_depth_exceeded(self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Snapshot of the live frames, most recent call first.
    pub fn capture(&self, interner: &StringInterner) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: interner.lookup(f.name).to_string(),
                call_line: f.call_line,
            })
            .collect();
        EvalBacktrace { frames }
    }

    /// Attach a backtrace of the live stack to `err`, unless it already has
    /// one (errors keep the stack of the point where they were raised).
    pub fn attach_backtrace(&self, err: EvalError, interner: &StringInterner) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture(interner))
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(crate::EvalConfig::DEFAULT_MAX_CALL_DEPTH)
    }
}

/// One frame of a captured backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
    pub call_line: u32,
}

/// Captured call stack, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    pub frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// One line per frame, for diagnostic notes.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.frames
            .iter()
            .map(|f| format!("in `{}`, called from line {}", f.name, f.call_line))
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "  {idx}: {line}")?;
        }
        Ok(())
    }
}
