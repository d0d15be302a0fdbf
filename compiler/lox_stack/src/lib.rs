//! Stack growth for recursive descent.
//!
//! The parser and tree visitors recurse once per nesting level, so a source
//! like `((((...))))` or `!!!!...1` with enough nesting would overflow the
//! thread's stack. Recursive entry points wrap their body in
//! [`with_stack`], which moves execution onto a freshly allocated segment
//! when the remaining stack drops below [`RED_ZONE`].
//!
//! On wasm32 the closure is called directly.

/// Remaining stack below which a new segment is allocated.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated segment.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
