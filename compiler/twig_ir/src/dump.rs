//! Debug rendering of the syntax tree.
//!
//! One node per line, four spaces of indentation per depth:
//!
//! ```text
//! PROGRAM: (line 1)
//!     VARIABLE_DECLARATION: (line 1)
//!         IDENTIFIER: `x` (line 1)
//!         INTEGER: `5` (line 1)
//! ```

use std::fmt::Write;

use crate::Node;

/// Render `node` and its subtree.
///
/// The walk keeps its own stack of `(node, depth)` pairs, so depth is only
/// limited by memory.
pub fn dump(node: &Node) -> String {
    let mut out = String::new();
    let mut pending = vec![(node, 0usize)];
    while let Some((node, depth)) = pending.pop() {
        push_indent(&mut out, depth);
        // Writing to a String cannot fail.
        let _ = write!(out, "{}:", node.kind());
        if node.kind().is_leaf() {
            let _ = write!(out, " `{}`", node.text());
        }
        let _ = writeln!(out, " (line {})", node.line());

        pending.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
    }
    out
}

/// Four spaces per level. Format width arguments are capped at `u16::MAX`.
fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("    ");
    }
}
