//! Twig IR - Shared data types for the Twig interpreter.
//!
//! This crate sits at the bottom of the pipeline and owns everything the
//! other phases exchange:
//!
//! - [`Token`] / [`TokenKind`]: lexical units produced by the scanner
//! - [`Node`] / [`NodeKind`]: the n-ary syntax tree built by the parser
//! - [`Table`]: string-keyed chained hash map (environments, structures)
//! - [`GrowVec`]: amortized-doubling sequence (arrays, argument lists)
//! - [`dump`]: read-only tree rendering for debugging
//!
//! Line numbers are 1-based `u32` values throughout.

mod ast;
pub mod dump;
mod grow_vec;
mod table;
mod token;

pub use ast::{Node, NodeKind};
pub use dump::dump;
pub use grow_vec::GrowVec;
pub use table::Table;
pub use token::{Token, TokenKind};
