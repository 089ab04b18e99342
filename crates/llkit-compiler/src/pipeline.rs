//! Compiler facade: factoring, FIRST-set analysis, decision tables.
//!
//! ```
//! use llkit_compiler::{CompileOptions, Compiler};
//! use llkit_core::{Grammar, Node};
//!
//! let body = Node::alt(Node::Name("NORTH".into()), Node::Name("EAST".into()));
//! let grammar = Grammar::new(Node::rule("direction", body)).unwrap();
//!
//! let compiled = Compiler::new(grammar)
//!     .options(CompileOptions::default())
//!     .compile()
//!     .unwrap();
//! assert_eq!(compiled.dump_first(), "first(direction)=[EAST, NORTH]\n");
//! ```

use llkit_core::Grammar;
use log::info;

use crate::Result;
use crate::decision::{Decision, decisions, dump_decisions};
use crate::factor::factor_grammar;
use crate::first::{FirstSets, resolve_first};

/// Pipeline options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    factor: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { factor: true }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left-factor before analysis (default: on).
    pub fn factor(mut self, value: bool) -> Self {
        self.factor = value;
        self
    }

    pub fn is_factoring(&self) -> bool {
        self.factor
    }
}

pub struct Compiler {
    grammar: Grammar,
    options: CompileOptions,
}

impl Compiler {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            options: CompileOptions::default(),
        }
    }

    pub fn options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the pipeline. Each call uses a fresh analyzer.
    pub fn compile(self) -> Result<Compiled> {
        let mut grammar = self.grammar;
        if self.options.factor {
            factor_grammar(&mut grammar);
        }

        let first_sets = resolve_first(&mut grammar)?;
        let decisions = decisions(&grammar, &first_sets)?;
        info!(
            "compiled {} rules, {} decision points",
            grammar.len(),
            decisions.len()
        );

        Ok(Compiled {
            grammar,
            first_sets,
            decisions,
        })
    }
}

/// An analyzed grammar, ready for code generation.
#[derive(Debug, Clone)]
pub struct Compiled {
    grammar: Grammar,
    first_sets: FirstSets,
    decisions: Vec<Decision>,
}

impl Compiled {
    /// The (factored) grammar, with a FIRST set attached to every rule.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn first_sets(&self) -> &FirstSets {
        &self.first_sets
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn into_grammar(self) -> Grammar {
        self.grammar
    }

    pub fn dump_grammar(&self) -> String {
        self.grammar.to_string()
    }

    pub fn dump_first(&self) -> String {
        self.grammar.dump_first()
    }

    pub fn dump_decisions(&self) -> String {
        dump_decisions(&self.decisions)
    }
}
