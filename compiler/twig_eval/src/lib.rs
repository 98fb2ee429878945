//! Tree-walking evaluator for Twig.
//!
//! Values are reference counted: every heap payload sits behind a
//! [`Heap`] handle, adoption is a clone and release is a drop. Environments
//! are chained scopes of [`Table`](twig_ir::Table) bindings shared between
//! call frames and the closures that capture them.
//!
//! Closures borrow their bodies from the syntax tree, so a [`Value<'ast>`]
//! cannot outlive the tree it was evaluated from.

mod environment;
mod errors;
mod interpreter;
pub mod prelude;
mod value;

pub use environment::{Environment, LocalScope};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Completion, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use value::{Arity, FunctionValue, Heap, NativeFn, NativeFunction, Value};
