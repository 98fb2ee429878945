//! On-demand scanner with pure one-token lookahead.

use twig_ir::{Token, TokenKind};

use crate::{LexError, LexErrorKind};

/// Characters that end an identifier or symbol run.
const RESERVED: &[u8] = b"'\"()[]{}=";

#[inline]
fn is_name_byte(b: u8) -> bool {
    (b.is_ascii_alphanumeric() || b.is_ascii_punctuation()) && !RESERVED.contains(&b)
}

/// Cursor over Twig source text.
///
/// `Copy` so that [`Scanner::peek`] can scan a snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'src> {
    source: &'src str,
    pos: usize,
    line: u32,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Scanner {
            source,
            pos: 0,
            line: 1,
        }
    }

    /// Current 1-based line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Return the token `next_token` would return, without advancing.
    ///
    /// The token is owned by the caller; dropping it is the release.
    pub fn peek(&self) -> Result<Token, LexError> {
        let mut snapshot = *self;
        snapshot.next_token()
    }

    /// Scan and consume the next token. At end of input this yields `Eof`
    /// on every call.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia();

        let Some(b) = self.current() else {
            return Ok(Token::bare(TokenKind::Eof, self.line));
        };
        let line = self.line;

        let kind = match b {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'=' => {
                self.pos += 1;
                if self.current() == Some(b'>') {
                    self.pos += 1;
                    return Ok(Token::bare(TokenKind::Arrow, line));
                }
                return Ok(Token::bare(TokenKind::Equals, line));
            }
            b'"' => return self.string(),
            b'\'' => return self.symbol(),
            b if b.is_ascii_digit() => return self.number(),
            b if is_name_byte(b) => {
                let text = self.eat_name();
                return Ok(Token::with_text(TokenKind::Identifier, text, line));
            }
            _ => {
                let found = self.source[self.pos..].chars().next().unwrap_or('\0');
                return Err(LexError::new(LexErrorKind::UnexpectedChar(found), line));
            }
        };
        self.pos += 1;
        Ok(Token::bare(kind, line))
    }

    #[inline]
    fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.pos + offset).copied()
    }

    /// Skip whitespace and `--` comments, counting line breaks.
    fn skip_trivia(&mut self) {
        while let Some(b) = self.current() {
            match b {
                b'\n' => {
                    self.line += 1;
                    self.pos += 1;
                }
                b' ' | b'\t' | b'\r' => self.pos += 1,
                b'-' if self.at(1) == Some(b'-') => {
                    while let Some(c) = self.current() {
                        if c == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => return,
            }
        }
    }

    fn eat_name(&mut self) -> &'src str {
        let start = self.pos;
        while self.current().is_some_and(is_name_byte) {
            self.pos += 1;
        }
        &self.source[start..self.pos]
    }

    fn number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        while self
            .current()
            .is_some_and(|b| b.is_ascii_digit() || b == b'.')
        {
            self.pos += 1;
        }
        let text = &self.source[start..self.pos];
        let kind = match text.bytes().filter(|&b| b == b'.').count() {
            0 => TokenKind::Integer,
            1 => TokenKind::Float,
            _ => {
                return Err(LexError::new(
                    LexErrorKind::MalformedNumber(text.to_owned()),
                    self.line,
                ))
            }
        };
        Ok(Token::with_text(kind, text, self.line))
    }

    fn string(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let unterminated = LexError::new(LexErrorKind::UnterminatedString, line);
        // Opening quote.
        self.pos += 1;

        let mut text = String::new();
        let mut chars = self.source[self.pos..].char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                '"' => {
                    self.pos += offset + 1;
                    return Ok(Token::with_text(TokenKind::String, text, line));
                }
                '\n' => return Err(unterminated),
                '\\' => match chars.next() {
                    None | Some((_, '\n')) => return Err(unterminated),
                    Some((_, 'n')) => text.push('\n'),
                    Some((_, 't')) => text.push('\t'),
                    Some((_, escaped)) => text.push(escaped),
                },
                c => text.push(c),
            }
        }
        Err(unterminated)
    }

    fn symbol(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        // Leading quote.
        self.pos += 1;
        let name = self.eat_name();
        if name.is_empty() {
            return Err(LexError::new(LexErrorKind::EmptySymbol, line));
        }
        Ok(Token::with_text(TokenKind::Symbol, name, line))
    }
}
