//! Stack growth for recursive descent.
//!
//! The expression parser recurses once per nesting level of parentheses and
//! the evaluator recurses once per nested expression and per script call.
//! Script recursion is bounded by the interpreter's call-depth limit; this
//! crate makes sure that limit, and not the host thread's stack size, is what
//! stops a deep script.
//!
//! On wasm targets the closure is called directly.

/// Grow the stack when less than this much remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, first moving to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
