//! Driver errors and their terminal rendering.

use thiserror::Error;
use twig_diagnostic::{ColorMode, Diagnostic, TerminalEmitter};
use twig_eval::EvalError;
use twig_lexer::LexError;
use twig_parse::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad command line.
    #[error("{0}")]
    Usage(String),

    #[error("cannot read `{path}`: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// The diagnostic for errors raised while processing a program.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            Error::Usage(_) | Error::Io { .. } => None,
            Error::Lex(err) => Some(err.to_diagnostic()),
            Error::Parse(err) => Some(err.to_diagnostic()),
            Error::Eval(err) => Some(err.to_diagnostic()),
        }
    }

    /// Render for the terminal, quoting the offending line of `source`.
    pub fn render(&self, source: &str, path: &str, mode: ColorMode, is_tty: bool) -> String {
        let Some(diagnostic) = self.to_diagnostic() else {
            return format!("error: {self}\n");
        };
        let mut out = Vec::new();
        let mut emitter = TerminalEmitter::with_color_mode(&mut out, mode, is_tty)
            .with_source(source)
            .with_file_path(path);
        emitter.emit(&diagnostic);
        emitter.flush();
        drop(emitter);
        String::from_utf8_lossy(&out).into_owned()
    }
}
