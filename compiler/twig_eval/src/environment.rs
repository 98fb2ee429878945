//! Chained lexical environments.
//!
//! An [`Environment`] is a shared handle to one [`Scope`]. Each function call
//! creates a child scope whose parent is the environment the closure was
//! defined in; the global scope has no parent. Closures keep their defining
//! environment alive by holding a handle to it.

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

use twig_ir::Table;

use crate::Value;

/// Single-threaded shared cell for scopes.
///
/// Wraps `Rc<RefCell<T>>`; all scope allocations go through
/// [`LocalScope::new`]. Not `Send`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// One level of bindings.
pub struct Scope<'ast> {
    bindings: Table<Value<'ast>>,
    parent: Option<Environment<'ast>>,
}

impl<'ast> Scope<'ast> {
    fn lookup(&self, name: &str) -> Option<Value<'ast>> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref()?.lookup(name)
    }
}

/// Shared handle to a scope and, through it, the whole parent chain.
#[derive(Clone)]
pub struct Environment<'ast>(LocalScope<Scope<'ast>>);

impl<'ast> Environment<'ast> {
    /// Create a root (global) environment.
    pub fn new() -> Self {
        Environment(LocalScope::new(Scope {
            bindings: Table::new(),
            parent: None,
        }))
    }

    /// Create an empty scope whose parent is `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Environment(LocalScope::new(Scope {
            bindings: Table::new(),
            parent: Some(self.clone()),
        }))
    }

    /// Bind `name` in this scope, adopting `value`.
    ///
    /// Returns the value previously bound to `name` in this same scope; the
    /// caller releases it by dropping it.
    pub fn define(&self, name: &str, value: Value<'ast>) -> Option<Value<'ast>> {
        let mut scope = self.0.borrow_mut();
        let capacity = scope.bindings.capacity();
        let previous = scope.bindings.put(name, value);
        if scope.bindings.capacity() != capacity {
            tracing::trace!(
                from = capacity,
                to = scope.bindings.capacity(),
                "scope table grew"
            );
        }
        previous
    }

    /// Find `name` in this scope or the nearest enclosing one.
    ///
    /// The returned handle is a new owner of the bound value.
    pub fn lookup(&self, name: &str) -> Option<Value<'ast>> {
        self.0.borrow().lookup(name)
    }

    /// Number of scopes from here to the root, this one included.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut parent = self.0.borrow().parent.clone();
        while let Some(env) = parent {
            depth += 1;
            parent = env.0.borrow().parent.clone();
        }
        depth
    }

    /// Release every binding of this scope.
    ///
    /// Closures defined in a scope hold that scope, so a scope holding such a
    /// closure is a cycle; clearing the bindings breaks it.
    pub fn clear(&self) {
        let released = mem::take(&mut self.0.borrow_mut().bindings);
        drop(released);
    }
}

impl Default for Environment<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        let mut names: Vec<_> = scope.bindings.iter().map(|(name, _)| name).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("bindings", &names)
            .field("depth", &self.depth())
            .finish()
    }
}
