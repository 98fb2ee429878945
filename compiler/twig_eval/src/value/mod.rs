//! Runtime values.
//!
//! Scalars (`Int`, `Float`, `Void`) are stored inline. Everything else lives
//! behind a [`Heap`] handle and is shared by reference count:
//!
//! ```text
//! let s = Value::string("hello");   // one owner
//! let t = s.clone();                // two owners, same payload
//! drop(t);                          // back to one
//! ```
//!
//! `Heap::new` is private to this module, so all allocations go through the
//! factory methods below.
//!
//! Arrays and structures may nest arbitrarily deep. Dropping, printing and
//! comparing them must not recurse once per level on the native stack:
//! `Drop` unlinks uniquely owned payloads onto a work list, and the
//! recursive trait impls go through [`ensure_sufficient_stack`].

mod heap;

use std::fmt;
use std::mem;

use twig_ir::{GrowVec, Node, Table};
use twig_stack::ensure_sufficient_stack;

use crate::Environment;

pub use heap::Heap;

/// Signature of a native function.
///
/// Natives receive the evaluated arguments and either produce a value or
/// describe why they could not.
pub type NativeFn = for<'a> fn(&[Value<'a>]) -> Result<Value<'a>, String>;

/// Runtime value.
///
/// `'ast` is the lifetime of the syntax tree that closures borrow their
/// bodies from.
#[derive(Clone)]
pub enum Value<'ast> {
    Int(i64),
    Float(f64),
    Str(Heap<String>),
    /// Symbol name, without the leading `'`.
    Symbol(Heap<String>),
    Array(Heap<GrowVec<Value<'ast>>>),
    Structure(Heap<Table<Value<'ast>>>),
    Function(Heap<FunctionValue<'ast>>),
    Native(Heap<NativeFunction>),
    Void,
}

impl<'ast> Value<'ast> {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Heap::new(name.into()))
    }

    pub fn array(elements: GrowVec<Value<'ast>>) -> Self {
        Value::Array(Heap::new(elements))
    }

    pub fn structure(fields: Table<Value<'ast>>) -> Self {
        Value::Structure(Heap::new(fields))
    }

    pub fn function(function: FunctionValue<'ast>) -> Self {
        Value::Function(Heap::new(function))
    }

    pub fn native(native: NativeFunction) -> Self {
        Value::Native(Heap::new(native))
    }

    /// Name of this value's type, as reported in errors and by `type-of`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Array(_) => "array",
            Value::Structure(_) => "structure",
            Value::Function(_) => "function",
            Value::Native(_) => "native",
            Value::Void => "void",
        }
    }

    /// Number of live owners of the heap payload, this handle included.
    ///
    /// Scalars have no payload and report `None`.
    pub fn ref_count(&self) -> Option<usize> {
        match self {
            Value::Str(s) | Value::Symbol(s) => Some(Heap::owners(s)),
            Value::Array(a) => Some(Heap::owners(a)),
            Value::Structure(s) => Some(Heap::owners(s)),
            Value::Function(f) => Some(Heap::owners(f)),
            Value::Native(n) => Some(Heap::owners(n)),
            Value::Int(_) | Value::Float(_) | Value::Void => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Text of a string or symbol.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Str(s) | Value::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Move the elements of a uniquely owned array or structure into
    /// `pending`, leaving the payload empty.
    fn detach_children(&mut self, pending: &mut Vec<Value<'ast>>) {
        match self {
            Value::Array(elements) => {
                if let Some(elements) = Heap::get_mut(elements) {
                    pending.extend(mem::take(elements));
                }
            }
            Value::Structure(fields) => {
                if let Some(fields) = Heap::get_mut(fields) {
                    pending.extend(fields.drain());
                }
            }
            _ => {}
        }
    }
}

impl Drop for Value<'_> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut value) = pending.pop() {
            value.detach_children(&mut pending);
        }
    }
}

/// Structural equality for data, identity for functions.
impl PartialEq for Value<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) | (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => ensure_sufficient_stack(|| a == b),
            (Value::Structure(a), Value::Structure(b)) => ensure_sufficient_stack(|| a == b),
            (Value::Function(a), Value::Function(b)) => Heap::ptr_eq(a, b),
            (Value::Native(a), Value::Native(b)) => Heap::ptr_eq(a, b),
            (Value::Void, Value::Void) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Symbol(s) => write!(f, "'{s}"),
            Value::Array(elements) => {
                f.write_str("[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    ensure_sufficient_stack(|| write!(f, "{element}"))?;
                }
                f.write_str("]")
            }
            Value::Structure(fields) => {
                let mut sorted: Vec<_> = fields.iter().collect();
                sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
                f.write_str("{")?;
                for (i, (name, value)) in sorted.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    ensure_sufficient_stack(|| write!(f, "{name}={value}"))?;
                }
                f.write_str("}")
            }
            Value::Function(function) => write!(f, "<function/{}>", function.params.len()),
            Value::Native(native) => write!(f, "<native {}>", native.name()),
            Value::Void => f.write_str("void"),
        }
    }
}

// Closures hold their defining environment, which may hold the closure
// again; Debug never descends into environments.
impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(&s.as_str()).finish(),
            Value::Symbol(s) => f.debug_tuple("Symbol").field(&s.as_str()).finish(),
            Value::Array(elements) => {
                ensure_sufficient_stack(|| f.debug_tuple("Array").field(&**elements).finish())
            }
            Value::Structure(fields) => {
                ensure_sufficient_stack(|| f.debug_tuple("Structure").field(&**fields).finish())
            }
            Value::Function(function) => f
                .debug_struct("Function")
                .field("params", &function.params)
                .field("line", &function.body.line())
                .finish_non_exhaustive(),
            Value::Native(native) => f.debug_tuple("Native").field(&native.name()).finish(),
            Value::Void => f.write_str("Void"),
        }
    }
}

/// A closure: parameter names, a body borrowed from the syntax tree, and
/// the environment the definition was evaluated in.
pub struct FunctionValue<'ast> {
    pub params: GrowVec<&'ast str>,
    pub body: &'ast Node,
    pub env: Environment<'ast>,
}

impl<'ast> FunctionValue<'ast> {
    pub fn new(params: GrowVec<&'ast str>, body: &'ast Node, env: Environment<'ast>) -> Self {
        FunctionValue { params, body, env }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Number of arguments a native accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    /// Any number of arguments.
    pub const VARIADIC: Arity = Arity::AtLeast(0);

    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A function implemented in Rust.
pub struct NativeFunction {
    name: String,
    arity: Arity,
    func: NativeFn,
}

impl NativeFunction {
    pub fn new(name: impl Into<String>, arity: Arity, func: NativeFn) -> Self {
        NativeFunction {
            name: name.into(),
            arity,
            func,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Call with already-checked arguments.
    #[inline]
    pub fn call<'a>(&self, args: &[Value<'a>]) -> Result<Value<'a>, String> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
