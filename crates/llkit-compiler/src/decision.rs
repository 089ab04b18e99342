//! Decision tables for the code generator.
//!
//! Every alternation left after factoring is a decision point: the generated
//! parser peeks one token and picks the first branch whose FIRST set (or
//! `LOOKAHEAD`/`RECOVER` pseudo-terminal) it matches. Tables are built in
//! pre-order per rule, so `rule#0` is the outermost decision.
//!
//! Building a table also checks that the branches of each decision are
//! disjoint. This covers alternations nested after the leading symbol,
//! which rule-level FIRST sets never look at.

use std::fmt::{self, Display, Formatter, Write};

use llkit_core::{FirstSet, Grammar, Node};

use crate::Result;
use crate::first::{FirstSetAnalyzer, FirstSets};

/// One decision point.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub rule: String,
    /// Pre-order position within the rule.
    pub index: usize,
    pub branches: Vec<Branch>,
}

/// One branch of a decision, in try order.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Rendered branch expression.
    pub expr: String,
    pub first: FirstSet,
}

impl Decision {
    pub fn label(&self) -> String {
        format!("{}#{}", self.rule, self.index)
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.label())?;
        for branch in &self.branches {
            writeln!(f, "  {} -> [{}]", branch.expr, branch.first.sorted_keys().join(", "))?;
        }
        Ok(())
    }
}

/// Build decision tables for an analyzed grammar.
pub fn decisions(grammar: &Grammar, sets: &FirstSets) -> Result<Vec<Decision>> {
    let mut analyzer = FirstSetAnalyzer::with_sets(grammar.root(), sets);
    let mut out = Vec::new();
    for rule in grammar.rules() {
        let mut index = 0;
        collect(&mut analyzer, rule.name(), rule.body(), &mut index, &mut out)?;
    }
    Ok(out)
}

pub fn dump_decisions(decisions: &[Decision]) -> String {
    let mut out = String::new();
    for decision in decisions {
        write!(out, "{decision}").expect("String write never fails");
    }
    out
}

fn collect<'g>(
    analyzer: &mut FirstSetAnalyzer<'g>,
    rule: &str,
    node: &'g Node,
    index: &mut usize,
    out: &mut Vec<Decision>,
) -> Result<()> {
    match node {
        Node::Alternative(alt) => {
            let label = format!("{rule}#{index}");
            let mut seen = FirstSet::new(label.as_str());
            let mut branches = Vec::with_capacity(alt.items().len());
            for item in alt.items() {
                let first = analyzer.first_of(&label, item)?;
                for (key, node) in first.terminals() {
                    seen.insert_unique(key, node.clone())?;
                }
                branches.push(Branch {
                    expr: item.to_string(),
                    first,
                });
            }
            out.push(Decision {
                rule: rule.to_string(),
                index: *index,
                branches,
            });
            *index += 1;

            for item in alt.items() {
                collect(analyzer, rule, item, index, out)?;
            }
        }
        Node::Sequence(seq) => {
            for item in seq.items() {
                collect(analyzer, rule, item, index, out)?;
            }
        }
        _ => {}
    }
    Ok(())
}
