//! `InterpreterBuilder` for creating configured `Interpreter` instances.

use super::Interpreter;
use crate::{prelude, Arity, Environment, NativeFn, NativeFunction, Value};

/// Closure calls allowed to be in flight at once.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for [`Interpreter`].
///
/// ```text
/// let mut interp = Interpreter::builder()
///     .prelude(true)
///     .max_call_depth(500)
///     .build();
/// ```
pub struct InterpreterBuilder {
    max_call_depth: usize,
    prelude: bool,
    natives: Vec<NativeFunction>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            prelude: false,
            natives: Vec::new(),
        }
    }

    /// Limit the depth of nested closure calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Bind the natives of [`prelude`] in the global scope.
    #[must_use]
    pub fn prelude(mut self, enabled: bool) -> Self {
        self.prelude = enabled;
        self
    }

    /// Bind an extra native. Natives registered later shadow earlier ones,
    /// the prelude included.
    #[must_use]
    pub fn native(mut self, name: &str, arity: Arity, func: NativeFn) -> Self {
        self.natives.push(NativeFunction::new(name, arity, func));
        self
    }

    pub fn build<'ast>(self) -> Interpreter<'ast> {
        let globals = Environment::new();
        if self.prelude {
            for native in prelude::natives() {
                let name = native.name().to_owned();
                drop(globals.define(&name, Value::native(native)));
            }
        }
        for native in self.natives {
            let name = native.name().to_owned();
            drop(globals.define(&name, Value::native(native)));
        }
        Interpreter {
            globals,
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
