//! Scanner error types.

use thiserror::Error;
use twig_diagnostic::{Diagnostic, ErrorCode};

/// A scanner error and the line it was found on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} (line {line})")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
}

/// What kind of scanner error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that cannot start any token.
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),
    /// End of line or input before the closing `"`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A digit run with more than one `.`, like `1.2.3`.
    #[error("malformed floating-point number `{0}`")]
    MalformedNumber(String),
    /// A `'` not followed by a name.
    #[error("expected symbol name after `'`")]
    EmptySymbol,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32) -> Self {
        LexError { kind, line }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedChar(_) => ErrorCode::E0001,
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::MalformedNumber(_) => ErrorCode::E0003,
            LexErrorKind::EmptySymbol => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .at_line(self.line);
        match self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_note("string literals must close on the line they open")
            }
            LexErrorKind::MalformedNumber(_) => {
                diag.with_note("a number may contain at most one `.`")
            }
            LexErrorKind::UnexpectedChar(_) | LexErrorKind::EmptySymbol => diag,
        }
    }
}
