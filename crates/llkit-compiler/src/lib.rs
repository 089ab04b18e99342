//! llkit compiler: grammar transformation for predictive parsers.
//!
//! This crate provides the pipeline between a grammar reader and a
//! recursive-descent code generator:
//! - `factor` - left-factoring of alternatives sharing a leading symbol
//! - `first` - FIRST-set analysis with left-recursion and ambiguity checks
//! - `decision` - per-decision-point branch FIRST sets for the generator
//! - `pipeline` - high-level `Compiler` facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod decision;
pub mod factor;
pub mod first;
pub mod pipeline;

#[cfg(test)]
pub mod test_utils;

use llkit_core::FirstSetError;

pub use decision::{Branch, Decision, decisions};
pub use factor::{factor, factor_grammar};
pub use first::{FirstSetAnalyzer, FirstSets, resolve_first};
pub use pipeline::{CompileOptions, Compiled, Compiler};

/// Errors that abort grammar analysis.
///
/// Both kinds are fatal to the whole pass; the grammar must be fixed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// A rule's leftmost derivation reaches itself before consuming input.
    #[error("left recursion in rule `{rule}`")]
    LeftRecursion { rule: String },

    /// Two alternatives of one decision claim the same leading terminal.
    #[error("ambiguous grammar: `{terminal}` starts more than one alternative")]
    AmbiguousGrammar { terminal: String },
}

impl From<FirstSetError> for GrammarError {
    fn from(err: FirstSetError) -> Self {
        GrammarError::AmbiguousGrammar { terminal: err.key }
    }
}

/// Result type for grammar analysis.
pub type Result<T> = std::result::Result<T, GrammarError>;
