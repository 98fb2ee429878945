//! Stack growth guard for the recursive descent parser and the tree-walking
//! evaluator.
//!
//! Both recurse once per nesting level of the source program, so a program
//! such as `((((...))))` with a few hundred thousand parentheses would blow
//! the native stack. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
///
/// ```text
/// fn parse_expression(&mut self) -> Result<Node, ParseError> {
///     ensure_sufficient_stack(|| self.parse_expression_inner())
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
