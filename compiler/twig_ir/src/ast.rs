//! Syntax tree.
//!
//! The parser produces a single n-ary tree rooted at a [`NodeKind::Program`]
//! node. Children are kept in source order in an owned `Vec`; each node is
//! owned by exactly one parent, and dropping a node drops its whole subtree.
//! Dropping is iterative, so arbitrarily deep trees are freed without
//! recursing once per level.
//!
//! # Shapes
//!
//! | kind                  | children                                  |
//! |-----------------------|-------------------------------------------|
//! | `Program`             | statements                                |
//! | `Return`              | one expression                            |
//! | `VariableDeclaration` | identifier, expression                    |
//! | `FunctionDefinition`  | parameter identifiers, then body program  |
//! | `FunctionInvocation`  | callee, then arguments                    |
//! | `Array`               | element expressions                       |
//! | `Structure`           | declarations                              |
//!
//! Leaf kinds (`Integer`, `Float`, `String`, `Identifier`, `Symbol`) carry
//! literal text and never have children.

use std::fmt;
use std::mem;

/// Kind tag of a syntax tree node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Program,
    Return,
    VariableDeclaration,
    FunctionDefinition,
    FunctionInvocation,
    Array,
    Structure,
    Integer,
    Float,
    String,
    Identifier,
    Symbol,
}

impl NodeKind {
    /// Returns `true` for kinds that carry literal text instead of children.
    #[inline]
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            NodeKind::Integer
                | NodeKind::Float
                | NodeKind::String
                | NodeKind::Identifier
                | NodeKind::Symbol
        )
    }

    /// Upper-case name used by the tree dump.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Program => "PROGRAM",
            NodeKind::Return => "RETURN",
            NodeKind::VariableDeclaration => "VARIABLE_DECLARATION",
            NodeKind::FunctionDefinition => "FUNCTION_DEFINITION",
            NodeKind::FunctionInvocation => "FUNCTION_INVOCATION",
            NodeKind::Array => "ARRAY",
            NodeKind::Structure => "STRUCTURE",
            NodeKind::Integer => "INTEGER",
            NodeKind::Float => "FLOAT",
            NodeKind::String => "STRING",
            NodeKind::Identifier => "IDENTIFIER",
            NodeKind::Symbol => "SYMBOL",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A syntax tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    line: u32,
    text: Option<Box<str>>,
    children: Vec<Node>,
}

impl Node {
    /// Create an interior node with no children yet.
    pub fn interior(kind: NodeKind, line: u32) -> Self {
        debug_assert!(!kind.is_leaf(), "{kind} is a leaf kind");
        Node {
            kind,
            line,
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf node adopting `text`.
    pub fn leaf(kind: NodeKind, line: u32, text: impl Into<Box<str>>) -> Self {
        debug_assert!(kind.is_leaf(), "{kind} is not a leaf kind");
        Node {
            kind,
            line,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Append a child, keeping declaration order.
    #[inline]
    pub fn push(&mut self, child: Node) {
        debug_assert!(!self.kind.is_leaf(), "leaf nodes have no children");
        self.children.push(child);
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.push(child);
        self
    }

    #[inline]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Literal text of a leaf node; `""` for interior nodes.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Split a function definition into its parameter identifiers and body.
    ///
    /// Returns `None` if this is not a well-formed definition.
    pub fn definition_parts(&self) -> Option<(&[Node], &Node)> {
        if self.kind != NodeKind::FunctionDefinition {
            return None;
        }
        let (body, params) = self.children.split_last()?;
        (body.kind == NodeKind::Program).then_some((params, body))
    }

    /// Split a declaration into its name and value expression.
    ///
    /// Returns `None` if this is not a well-formed declaration.
    pub fn declaration_parts(&self) -> Option<(&str, &Node)> {
        match (self.kind, self.children.as_slice()) {
            (NodeKind::VariableDeclaration, [name, value])
                if name.kind == NodeKind::Identifier =>
            {
                Some((name.text(), value))
            }
            _ => None,
        }
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
