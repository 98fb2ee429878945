//! The tree-walking interpreter.
//!
//! Evaluation follows the node kinds one to one. A program runs its
//! statements in order and stops at the first `=>`; values of the other
//! statements are released as soon as they are computed unless a binding,
//! array or structure adopted them.

mod builder;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use tracing::trace;
use twig_ir::{GrowVec, Node, NodeKind, Table};
use twig_stack::ensure_sufficient_stack;

use crate::errors::{
    arity_mismatch, invalid_literal, native_failed, not_callable, stack_overflow,
    unbound_identifier, unsupported_node,
};
use crate::{Arity, Environment, EvalResult, FunctionValue, NativeFn, NativeFunction, Value};

/// How a program finished.
#[derive(Debug, PartialEq)]
pub enum Completion<'ast> {
    /// An `=>` statement produced this value.
    Returned(Value<'ast>),
    /// Every statement ran and none returned.
    Finished,
}

impl<'ast> Completion<'ast> {
    /// The returned value, or `Void` for a program that never returned.
    pub fn into_value(self) -> Value<'ast> {
        match self {
            Completion::Returned(value) => value,
            Completion::Finished => Value::Void,
        }
    }
}

/// Evaluates syntax trees against a persistent global environment.
///
/// Declare the tree before the interpreter: closures stored in the global
/// scope borrow from it until the interpreter is dropped.
pub struct Interpreter<'ast> {
    globals: Environment<'ast>,
    max_call_depth: usize,
    call_depth: usize,
}

impl<'ast> Interpreter<'ast> {
    /// An interpreter with default settings and no natives.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Look up a global binding.
    pub fn global(&self, name: &str) -> Option<Value<'ast>> {
        self.globals.lookup(name)
    }

    /// Bind a native function in the global scope.
    pub fn define_native(&mut self, name: &str, arity: Arity, func: NativeFn) {
        let native = Value::native(NativeFunction::new(name, arity, func));
        drop(self.globals.define(name, native));
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Evaluate `program` and return its value.
    pub fn run(&mut self, program: &'ast Node) -> EvalResult<Value<'ast>> {
        self.run_program(program).map(Completion::into_value)
    }

    /// Evaluate `program` in the global environment.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.children().len()))]
    pub fn run_program(&mut self, program: &'ast Node) -> EvalResult<Completion<'ast>> {
        self.call_depth = 0;
        let globals = self.globals.clone();
        self.eval_program(program, &globals)
    }

    fn eval_program(
        &mut self,
        program: &'ast Node,
        env: &Environment<'ast>,
    ) -> EvalResult<Completion<'ast>> {
        if program.kind() != NodeKind::Program {
            return Err(unsupported_node(program.kind(), program.line()));
        }
        for statement in program.children() {
            if statement.kind() == NodeKind::Return {
                let value = self.eval(statement, env)?;
                return Ok(Completion::Returned(value));
            }
            // Released here unless something adopted it.
            drop(self.eval(statement, env)?);
        }
        Ok(Completion::Finished)
    }

    /// Evaluate a single expression node.
    pub fn eval(&mut self, node: &'ast Node, env: &Environment<'ast>) -> EvalResult<Value<'ast>> {
        ensure_sufficient_stack(|| self.eval_inner(node, env))
    }

    fn eval_inner(&mut self, node: &'ast Node, env: &Environment<'ast>) -> EvalResult<Value<'ast>> {
        let line = node.line();
        match node.kind() {
            NodeKind::Program => self.eval_program(node, env).map(Completion::into_value),
            NodeKind::Return => match node.children() {
                [value] => self.eval(value, env),
                _ => Err(unsupported_node(node.kind(), line)),
            },
            NodeKind::VariableDeclaration => {
                let (name, expr) = node
                    .declaration_parts()
                    .ok_or_else(|| unsupported_node(node.kind(), line))?;
                let value = self.eval(expr, env)?;
                trace!(name, line, "bind");
                drop(env.define(name, value.clone()));
                Ok(value)
            }
            NodeKind::FunctionDefinition => {
                let (params, body) = node
                    .definition_parts()
                    .ok_or_else(|| unsupported_node(node.kind(), line))?;
                let params = params.iter().map(Node::text).collect();
                Ok(Value::function(FunctionValue::new(params, body, env.clone())))
            }
            NodeKind::FunctionInvocation => {
                let (callee, arg_nodes) = node
                    .children()
                    .split_first()
                    .ok_or_else(|| unsupported_node(node.kind(), line))?;
                let callee = self.eval(callee, env)?;
                let mut args = GrowVec::new();
                for arg in arg_nodes {
                    args.push(self.eval(arg, env)?);
                }
                self.call(&callee, args, line)
            }
            NodeKind::Array => {
                let mut elements = GrowVec::new();
                for element in node.children() {
                    let capacity = elements.capacity();
                    elements.push(self.eval(element, env)?);
                    if elements.capacity() != capacity {
                        trace!(from = capacity, to = elements.capacity(), "array grew");
                    }
                }
                Ok(Value::array(elements))
            }
            NodeKind::Structure => {
                let mut fields = Table::new();
                for field in node.children() {
                    let (name, expr) = field
                        .declaration_parts()
                        .ok_or_else(|| unsupported_node(field.kind(), field.line()))?;
                    let value = self.eval(expr, env)?;
                    drop(fields.put(name, value));
                }
                Ok(Value::structure(fields))
            }
            NodeKind::Identifier => env
                .lookup(node.text())
                .ok_or_else(|| unbound_identifier(node.text(), line)),
            NodeKind::Integer => node
                .text()
                .parse()
                .map(Value::int)
                .map_err(|_| invalid_literal(node.text(), "integer", line)),
            NodeKind::Float => node
                .text()
                .parse()
                .map(Value::float)
                .map_err(|_| invalid_literal(node.text(), "float", line)),
            NodeKind::String => Ok(Value::string(node.text())),
            NodeKind::Symbol => Ok(Value::symbol(node.text())),
        }
    }

    /// Apply `callee` to already-evaluated arguments.
    pub fn call(
        &mut self,
        callee: &Value<'ast>,
        args: GrowVec<Value<'ast>>,
        line: u32,
    ) -> EvalResult<Value<'ast>> {
        match callee {
            Value::Function(function) => self.call_function(function, args, line),
            Value::Native(native) => {
                if !native.arity().accepts(args.len()) {
                    return Err(arity_mismatch(native.arity(), args.len(), line));
                }
                native
                    .call(args.as_slice())
                    .map_err(|message| native_failed(native.name(), message, line))
            }
            other => Err(not_callable(other.type_name(), line)),
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(line = line, depth = self.call_depth))]
    fn call_function(
        &mut self,
        function: &FunctionValue<'ast>,
        args: GrowVec<Value<'ast>>,
        line: u32,
    ) -> EvalResult<Value<'ast>> {
        if function.arity() != args.len() {
            return Err(arity_mismatch(
                Arity::Exact(function.arity()),
                args.len(),
                line,
            ));
        }
        if self.call_depth >= self.max_call_depth {
            return Err(stack_overflow(self.max_call_depth, line));
        }

        let frame = function.env.child();
        for (param, arg) in function.params.iter().zip(args) {
            drop(frame.define(param, arg));
        }

        self.call_depth += 1;
        let completion = self.eval_program(function.body, &frame);
        self.call_depth -= 1;
        // `frame` is released on return; closures created in the body keep
        // it alive through their own handles.
        completion.map(Completion::into_value)
    }
}

impl Default for Interpreter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Interpreter<'_> {
    fn drop(&mut self) {
        self.globals.clear();
    }
}

#[cfg(test)]
mod tests;
