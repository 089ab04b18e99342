//! Grammar tree for predictive recursive-descent grammars.
//!
//! This module provides the tree form produced by a grammar reader, with
//! support for JSON interchange and `target ::= body` rendering.

mod json;
mod node;
mod render;
mod types;

#[cfg(test)]
mod json_tests;
#[cfg(test)]
mod render_tests;

pub use json::LoadError;
pub use node::{Alternative, Call, List, Node, Rule, Sequence, Target};
pub use types::Grammar;
