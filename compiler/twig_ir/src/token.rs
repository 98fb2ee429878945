//! Lexical tokens.

use std::fmt;

/// The closed set of token kinds produced by the scanner.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Integer literal (`42`).
    Integer,
    /// Floating-point literal (`4.2`).
    Float,
    /// String literal (`"text"`), text excludes the quotes.
    String,
    /// Identifier (`name`, `+`, `type-of`).
    Identifier,
    /// Symbol literal (`'name`), text excludes the quote.
    Symbol,
    /// `=>`
    Arrow,
    /// `=`
    Equals,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns `true` for kinds that carry literal text.
    #[inline]
    pub fn has_text(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::Identifier
                | TokenKind::Symbol
        )
    }

    /// Upper-case name used by the `lex` command and tree dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Arrow => "ARROW",
            TokenKind::Equals => "EQUALS",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Eof => "EOF",
        }
    }
}

/// Human-readable description, used in parse error messages.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Integer => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::Symbol => "symbol",
            TokenKind::Arrow => "`=>`",
            TokenKind::Equals => "`=`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// A token with its owned text and source line.
///
/// The text is owned by the token until the parser moves it into a tree
/// node; a token that is only inspected (e.g. during lookahead) drops its
/// text with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<Box<str>>,
    pub line: u32,
}

impl Token {
    /// Create a token without text (punctuation, `Eof`).
    #[inline]
    pub fn bare(kind: TokenKind, line: u32) -> Self {
        debug_assert!(!kind.has_text(), "{kind:?} tokens carry text");
        Token {
            kind,
            text: None,
            line,
        }
    }

    /// Create a token carrying literal text.
    #[inline]
    pub fn with_text(kind: TokenKind, text: impl Into<Box<str>>, line: u32) -> Self {
        debug_assert!(kind.has_text(), "{kind:?} tokens carry no text");
        Token {
            kind,
            text: Some(text.into()),
            line,
        }
    }

    /// The token text, or `""` for kinds without text.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Check if this token is the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
