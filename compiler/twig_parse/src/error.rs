//! Parse errors.

use thiserror::Error;
use twig_diagnostic::{Diagnostic, ErrorCode};
use twig_ir::TokenKind;
use twig_lexer::LexError;

/// The first error encountered while parsing.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError {
    /// The scanner failed while the parser pulled a token.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A specific token kind was required, such as a closing `)`.
    #[error("expected {expected}, found {found} (line {line})")]
    Expected {
        expected: TokenKind,
        found: TokenKind,
        line: u32,
    },

    /// No expression can start with the current token.
    #[error("expected expression, found {found} (line {line})")]
    ExpectedExpression { found: TokenKind, line: u32 },
}

impl ParseError {
    pub fn line(&self) -> u32 {
        match self {
            ParseError::Lex(err) => err.line,
            ParseError::Expected { line, .. } | ParseError::ExpectedExpression { line, .. } => {
                *line
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::Expected { .. } => ErrorCode::E1001,
            ParseError::ExpectedExpression { .. } => ErrorCode::E1002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::Expected {
                expected, found, ..
            } => Diagnostic::error(self.code())
                .with_message(format!("expected {expected}, found {found}"))
                .at_line(self.line()),
            ParseError::ExpectedExpression { found, .. } => Diagnostic::error(self.code())
                .with_message(format!("expected expression, found {found}"))
                .at_line(self.line())
                .with_note(
                    "expressions are literals, identifiers, declarations, \
                     or forms opened by `(`, `[` or `{`",
                ),
        }
    }
}
