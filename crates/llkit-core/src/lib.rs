#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for llkit grammars.
//!
//! Two layers:
//! - **Tree layer** (`grammar`): the closed `Node` sum type, its flattening
//!   constructors, leaf matching, and diagnostic rendering
//! - **Analysis layer** (`first_set`): the `FirstSet` container attached to
//!   each rule once FIRST-set analysis completes

pub mod first_set;
pub mod grammar;

#[cfg(test)]
mod first_set_tests;

pub use first_set::{EPSILON, FirstSet, FirstSetError};
pub use grammar::{
    Alternative, Call, Grammar, List, LoadError, Node, Rule, Sequence, Target,
};
