//! Stack growth for recursive tree walks.
//!
//! The tree builder turns a long chain such as `1+1+...+1` into a left-deep
//! tree whose depth equals the number of operators. Evaluation, rendering and
//! layout all recurse along that depth, so each recursive step runs through
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: passthrough.

/// Grow the stack when less than this much remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the red zone.
///
/// ```text
/// fn eval_node(tree: &ExprTree, id: ExprId) -> Result<f64, ParseError> {
///     ensure_sufficient_stack(|| match tree.get(id) {
///         ExprKind::Literal(text) => parse(text),
///         ExprKind::Binary { op, left, right } => {
///             apply(*op, eval_node(tree, *left)?, eval_node(tree, *right)?)
///         }
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
