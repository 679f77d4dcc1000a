//! Variable storage.
//!
//! There is one global store, and every assignment writes to it, including
//! assignments made inside loops and callable bodies. On top of the globals
//! sits a stack of frames that only affect reads:
//!
//! - a **call frame** binds a callable's parameters and hides every frame
//!   below it, so a callee never sees its caller's parameters;
//! - a **loop frame** binds the iteration index and is transparent, so the
//!   names bound by enclosing frames stay readable.
//!
//! Lookup walks the frames from the top, stopping after the first call frame,
//! then falls back to the globals.

use rustc_hash::FxHashMap;

use clue_ir::Name;

use crate::Value;

/// What pushed a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Call,
    Loop,
}

/// Read-only bindings for one call or loop iteration.
#[derive(Clone, Debug)]
struct Frame {
    kind: FrameKind,
    bindings: FxHashMap<Name, Value>,
}

/// Global store plus the stack of read overlays.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    globals: FxHashMap<Name, Value>,
    frames: Vec<Frame>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a name: visible frames first, then the globals.
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        for frame in self.frames.iter().rev() {
            if let Some(value) = frame.bindings.get(&name) {
                return Some(value);
            }
            if frame.kind == FrameKind::Call {
                break;
            }
        }
        self.globals.get(&name)
    }

    /// Store `value` under `name` in the global store.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) {
        self.globals.insert(name, value);
    }

    /// The global binding of `name`, ignoring frames.
    pub fn global(&self, name: Name) -> Option<&Value> {
        self.globals.get(&name)
    }

    /// Push a frame with the given bindings.
    pub fn push_frame(&mut self, kind: FrameKind, bindings: impl IntoIterator<Item = (Name, Value)>) {
        self.frames.push(Frame {
            kind,
            bindings: bindings.into_iter().collect(),
        });
    }

    /// Pop the most recent frame.
    pub fn pop_frame(&mut self) {
        debug_assert!(!self.frames.is_empty(), "pop_frame() on empty frame stack");
        self.frames.pop();
    }

    /// Number of live frames.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
