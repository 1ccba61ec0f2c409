//! Stack growth for recursive descent.
//!
//! The parser recurses once per nested expression and the interpreter once
//! per nested call, so a pathological program (`((((...))))` or unbounded
//! recursion below the call-depth limit) can exhaust the native stack long
//! before any language-level limit trips. [`ensure_sufficient_stack`] grows
//! the stack on demand on native targets and is a passthrough on WASM.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
