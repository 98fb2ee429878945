//! Native functions bound by [`InterpreterBuilder::prelude`].
//!
//! | name      | arity      |
//! |-----------|------------|
//! | `+`       | any        |
//! | `-`       | at least 1 |
//! | `len`     | 1          |
//! | `nth`     | 2          |
//! | `field`   | 2          |
//! | `type-of` | 1          |
//!
//! [`InterpreterBuilder::prelude`]: crate::InterpreterBuilder::prelude

use crate::{Arity, NativeFunction, Value};

/// A fresh set of prelude natives.
pub fn natives() -> Vec<NativeFunction> {
    vec![
        NativeFunction::new("+", Arity::VARIADIC, add),
        NativeFunction::new("-", Arity::AtLeast(1), subtract),
        NativeFunction::new("len", Arity::Exact(1), len),
        NativeFunction::new("nth", Arity::Exact(2), nth),
        NativeFunction::new("field", Arity::Exact(2), field),
        NativeFunction::new("type-of", Arity::Exact(1), type_of),
    ]
}

enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn from_value(op: &str, value: &Value<'_>) -> Result<Self, String> {
        match value {
            Value::Int(n) => Ok(Number::Int(*n)),
            Value::Float(x) => Ok(Number::Float(*x)),
            other => Err(format!("`{op}` expects numbers, found {}", other.type_name())),
        }
    }

    #[allow(clippy::cast_precision_loss, reason = "mixed arithmetic promotes to float")]
    fn as_float(&self) -> f64 {
        match *self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    fn into_value<'a>(self) -> Value<'a> {
        match self {
            Number::Int(n) => Value::int(n),
            Number::Float(x) => Value::float(x),
        }
    }
}

/// Integer arithmetic while both sides are integers, float once either is.
fn combine(
    op: &str,
    left: Number,
    right: Number,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
) -> Result<Number, String> {
    match (left, right) {
        (Number::Int(a), Number::Int(b)) => int_op(a, b)
            .map(Number::Int)
            .ok_or_else(|| format!("integer overflow in `{op}`")),
        (a, b) => Ok(Number::Float(float_op(a.as_float(), b.as_float()))),
    }
}

fn add<'a>(args: &[Value<'a>]) -> Result<Value<'a>, String> {
    let mut total = Number::Int(0);
    for arg in args {
        let n = Number::from_value("+", arg)?;
        total = combine("+", total, n, i64::checked_add, |a, b| a + b)?;
    }
    Ok(total.into_value())
}

fn subtract<'a>(args: &[Value<'a>]) -> Result<Value<'a>, String> {
    let Some((first, rest)) = args.split_first() else {
        return Err("expected at least 1 argument(s), got 0".to_owned());
    };
    let first = Number::from_value("-", first)?;
    if rest.is_empty() {
        return combine("-", Number::Int(0), first, i64::checked_sub, |a, b| a - b)
            .map(Number::into_value);
    }
    let mut result = first;
    for arg in rest {
        let n = Number::from_value("-", arg)?;
        result = combine("-", result, n, i64::checked_sub, |a, b| a - b)?;
    }
    Ok(result.into_value())
}

/// The interpreter checks arity before calling a native.
fn exactly<'s, 'a, const N: usize>(args: &'s [Value<'a>]) -> Result<&'s [Value<'a>; N], String> {
    args.try_into().map_err(|_| format!("expected {N} argument(s), got {}", args.len()))
}

fn len<'a>(args: &[Value<'a>]) -> Result<Value<'a>, String> {
    let [value] = exactly::<1>(args)?;
    let count = match value {
        Value::Array(elements) => elements.len(),
        Value::Str(s) | Value::Symbol(s) => s.chars().count(),
        Value::Structure(fields) => fields.len(),
        other => return Err(format!("`len` is undefined for {}", other.type_name())),
    };
    i64::try_from(count)
        .map(Value::int)
        .map_err(|_| "length does not fit in an integer".to_owned())
}

fn nth<'a>(args: &[Value<'a>]) -> Result<Value<'a>, String> {
    let [array, index] = exactly::<2>(args)?;
    let Value::Array(elements) = array else {
        return Err(format!("`nth` expects an array, found {}", array.type_name()));
    };
    let Some(index) = index.as_int() else {
        return Err(format!(
            "`nth` expects an integer index, found {}",
            index.type_name()
        ));
    };
    usize::try_from(index)
        .ok()
        .and_then(|i| elements.get(i))
        .cloned()
        .ok_or_else(|| format!("index {index} out of bounds for length {}", elements.len()))
}

fn field<'a>(args: &[Value<'a>]) -> Result<Value<'a>, String> {
    let [structure, name] = exactly::<2>(args)?;
    let Value::Structure(fields) = structure else {
        return Err(format!(
            "`field` expects a structure, found {}",
            structure.type_name()
        ));
    };
    let Some(name) = name.as_text() else {
        return Err(format!(
            "`field` expects a symbol or string name, found {}",
            name.type_name()
        ));
    };
    fields
        .get(name)
        .cloned()
        .ok_or_else(|| format!("structure has no field `{name}`"))
}

fn type_of<'a>(args: &[Value<'a>]) -> Result<Value<'a>, String> {
    let [value] = exactly::<1>(args)?;
    Ok(Value::symbol(value.type_name()))
}
