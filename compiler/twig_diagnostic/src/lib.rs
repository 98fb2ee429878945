//! Diagnostic system for Twig error reporting.
//!
//! Every phase error (scanner, parser, evaluator) converts into a
//! [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - the source line where it went wrong
//! - optional notes
//!
//! The [`TerminalEmitter`] renders diagnostics for humans, quoting the
//! offending source line when the source text is available.

mod diagnostic;
mod emitter;
mod error_code;

pub use diagnostic::Diagnostic;
pub use emitter::{ColorMode, TerminalEmitter};
pub use error_code::ErrorCode;
