//! Evaluation errors and their constructors.
//!
//! Every error carries the line of the node being evaluated. Constructors are
//! `#[cold]` free functions so the evaluator's hot paths stay small.

use thiserror::Error;
use twig_diagnostic::{Diagnostic, ErrorCode};
use twig_ir::NodeKind;

use crate::Arity;

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// A fatal evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} (line {line})")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub line: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("unbound identifier `{name}`")]
    UnboundIdentifier { name: String },

    #[error("value of type `{type_name}` is not callable")]
    NotCallable { type_name: &'static str },

    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityMismatch { expected: Arity, got: usize },

    #[error("cannot evaluate malformed {kind} node")]
    UnsupportedNode { kind: NodeKind },

    #[error("invalid {expected} literal `{text}`")]
    InvalidLiteral { text: String, expected: &'static str },

    #[error("stack overflow: call depth exceeded {limit}")]
    StackOverflow { limit: usize },

    #[error("native `{name}` failed: {message}")]
    NativeFailed { name: String, message: String },
}

impl EvalError {
    #[inline]
    pub fn new(kind: EvalErrorKind, line: u32) -> Self {
        EvalError { kind, line }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UnboundIdentifier { .. } => ErrorCode::E6001,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6003,
            EvalErrorKind::UnsupportedNode { .. } => ErrorCode::E6004,
            EvalErrorKind::InvalidLiteral { .. } => ErrorCode::E6005,
            EvalErrorKind::StackOverflow { .. } => ErrorCode::E6006,
            EvalErrorKind::NativeFailed { .. } => ErrorCode::E6007,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .at_line(self.line);
        match &self.kind {
            EvalErrorKind::UnboundIdentifier { name } => {
                diag.with_note(format!("bind it first with `{name} = ...`"))
            }
            EvalErrorKind::NotCallable { .. } => {
                diag.with_note("the first expression inside `( )` is the function to call")
            }
            EvalErrorKind::StackOverflow { .. } => {
                diag.with_note("recursion has no base case, or the depth limit is too low")
            }
            EvalErrorKind::ArityMismatch { .. }
            | EvalErrorKind::UnsupportedNode { .. }
            | EvalErrorKind::InvalidLiteral { .. }
            | EvalErrorKind::NativeFailed { .. } => diag,
        }
    }
}

#[cold]
pub fn unbound_identifier(name: &str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::UnboundIdentifier {
            name: name.to_owned(),
        },
        line,
    )
}

#[cold]
pub fn not_callable(type_name: &'static str, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { type_name }, line)
}

#[cold]
pub fn arity_mismatch(expected: Arity, got: usize, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::ArityMismatch { expected, got }, line)
}

#[cold]
pub fn unsupported_node(kind: NodeKind, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::UnsupportedNode { kind }, line)
}

#[cold]
pub fn invalid_literal(text: &str, expected: &'static str, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::InvalidLiteral {
            text: text.to_owned(),
            expected,
        },
        line,
    )
}

#[cold]
pub fn stack_overflow(limit: usize, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { limit }, line)
}

#[cold]
pub fn native_failed(name: &str, message: String, line: u32) -> EvalError {
    EvalError::new(
        EvalErrorKind::NativeFailed {
            name: name.to_owned(),
            message,
        },
        line,
    )
}
