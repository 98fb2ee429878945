//! Scanner for Twig source text.
//!
//! [`Scanner`] produces [`Token`]s on demand and supports one-token lookahead
//! through [`Scanner::peek`]. The scanner is a `Copy` cursor, so a peek scans
//! a snapshot and leaves the real position and line counter untouched.
//!
//! [`tokenize`] drives a scanner to end of input and collects every token,
//! `Eof` included.

mod lex_error;
mod scanner;

pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;

use twig_ir::Token;

/// Scan all of `source`, ending with the `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
