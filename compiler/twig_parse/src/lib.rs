//! Recursive descent parser for Twig.
//!
//! Pulls tokens from a [`Scanner`] one at a time and builds the n-ary
//! [`Node`] tree. The only place two tokens of lookahead are needed is an
//! expression starting with an identifier: `x = ...` is a declaration, a
//! bare `x` is a reference. The parser holds the identifier as its current
//! token and asks the scanner to [`peek`](Scanner::peek) at the next one.
//!
//! ```text
//! program     := statement*                (until `)` or end of input)
//! statement   := `=>` expression | expression
//! expression  := `(` function `)` | `[` expression* `]` | `{` declaration* `}`
//!              | integer | float | string | declaration | identifier | symbol
//! declaration := identifier `=` expression
//! function    := `[` identifier* `]` program | expression+
//! ```

mod error;

pub use error::ParseError;

use std::mem;

use tracing::trace;
use twig_ir::{Node, NodeKind, Token, TokenKind};
use twig_lexer::Scanner;
use twig_stack::ensure_sufficient_stack;

/// Parse a whole source text into its root `Program` node.
#[tracing::instrument(level = "debug", skip_all)]
pub fn parse(source: &str) -> Result<Node, ParseError> {
    Parser::new(source)?.parse_root()
}

/// Parser state: the scanner and the token under the cursor.
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    current: Token,
}

impl<'src> Parser<'src> {
    /// Create a parser positioned on the first token of `source`.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token()?;
        Ok(Parser { scanner, current })
    }

    /// Parse a program and require that it consumed all input.
    pub fn parse_root(mut self) -> Result<Node, ParseError> {
        let program = self.program()?;
        self.expect(TokenKind::Eof)?;
        Ok(program)
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consume the current token and return it, pulling the next one in.
    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = self.scanner.next_token()?;
        let token = mem::replace(&mut self.current, next);
        trace!(kind = %token.kind, line = token.line, "consume");
        Ok(token)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.expected(kind))
        }
    }

    #[cold]
    fn expected(&self, kind: TokenKind) -> ParseError {
        ParseError::Expected {
            expected: kind,
            found: self.current.kind,
            line: self.current.line,
        }
    }

    fn at_program_end(&self) -> bool {
        self.check(TokenKind::RParen) || self.check(TokenKind::Eof)
    }

    /// Any closing token or end of input; a sequence stops here and the
    /// caller's `expect` names what was missing.
    fn at_close(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::Eof
        )
    }

    /// `statement*`, stopping before `)` or end of input.
    fn program(&mut self) -> Result<Node, ParseError> {
        let mut program = Node::interior(NodeKind::Program, self.current.line);
        while !self.at_program_end() {
            program.push(self.statement()?);
        }
        Ok(program)
    }

    fn statement(&mut self) -> Result<Node, ParseError> {
        if self.check(TokenKind::Arrow) {
            let arrow = self.advance()?;
            let value = self.expression()?;
            return Ok(Node::interior(NodeKind::Return, arrow.line).with_child(value));
        }
        self.expression()
    }

    fn expression(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.expression_inner())
    }

    fn expression_inner(&mut self) -> Result<Node, ParseError> {
        match self.current.kind {
            TokenKind::LParen => {
                let open = self.advance()?;
                if self.check(TokenKind::LBracket) {
                    self.definition(open.line)
                } else {
                    self.invocation(open.line)
                }
            }
            TokenKind::LBracket => self.array(),
            TokenKind::LBrace => self.structure(),
            TokenKind::Integer => self.leaf(NodeKind::Integer),
            TokenKind::Float => self.leaf(NodeKind::Float),
            TokenKind::String => self.leaf(NodeKind::String),
            TokenKind::Symbol => self.leaf(NodeKind::Symbol),
            TokenKind::Identifier => {
                // The peeked token is dropped here; only its kind matters.
                if self.scanner.peek()?.kind == TokenKind::Equals {
                    self.declaration()
                } else {
                    self.leaf(NodeKind::Identifier)
                }
            }
            found => Err(ParseError::ExpectedExpression {
                found,
                line: self.current.line,
            }),
        }
    }

    /// Turn the current literal or identifier token into a leaf, moving its
    /// text into the node.
    fn leaf(&mut self, kind: NodeKind) -> Result<Node, ParseError> {
        let token = self.advance()?;
        Ok(Node::leaf(kind, token.line, token.text.unwrap_or_default()))
    }

    fn declaration(&mut self) -> Result<Node, ParseError> {
        let name = self.expect(TokenKind::Identifier)?;
        let line = name.line;
        let name = Node::leaf(NodeKind::Identifier, line, name.text.unwrap_or_default());
        self.expect(TokenKind::Equals)?;
        let value = self.expression()?;
        Ok(Node::interior(NodeKind::VariableDeclaration, line)
            .with_child(name)
            .with_child(value))
    }

    /// `[` identifier* `]` program `)`, with the `(` already consumed.
    fn definition(&mut self, line: u32) -> Result<Node, ParseError> {
        let mut definition = Node::interior(NodeKind::FunctionDefinition, line);
        self.expect(TokenKind::LBracket)?;
        while self.check(TokenKind::Identifier) {
            definition.push(self.leaf(NodeKind::Identifier)?);
        }
        self.expect(TokenKind::RBracket)?;
        definition.push(self.program()?);
        self.expect(TokenKind::RParen)?;
        Ok(definition)
    }

    /// expression+ `)`, with the `(` already consumed.
    fn invocation(&mut self, line: u32) -> Result<Node, ParseError> {
        let mut invocation = Node::interior(NodeKind::FunctionInvocation, line);
        invocation.push(self.expression()?);
        while !self.at_close() {
            invocation.push(self.expression()?);
        }
        self.expect(TokenKind::RParen)?;
        Ok(invocation)
    }

    fn array(&mut self) -> Result<Node, ParseError> {
        let open = self.expect(TokenKind::LBracket)?;
        let mut array = Node::interior(NodeKind::Array, open.line);
        while !self.at_close() {
            array.push(self.expression()?);
        }
        self.expect(TokenKind::RBracket)?;
        Ok(array)
    }

    fn structure(&mut self) -> Result<Node, ParseError> {
        let open = self.expect(TokenKind::LBrace)?;
        let mut structure = Node::interior(NodeKind::Structure, open.line);
        while self.check(TokenKind::Identifier) {
            structure.push(self.declaration()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(structure)
    }
}
