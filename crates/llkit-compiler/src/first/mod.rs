//! FIRST-set analysis.
//!
//! Computes, for every rule, the terminals that can start one of its
//! derivations, and rejects grammars a single-token predictive parser
//! cannot drive:
//! - **Left recursion**: a rule reached again before its set is complete
//! - **Ambiguity**: one terminal contributed twice to the same set
//!
//! Rules are memoized by name. `LOOKAHEAD(...)` contributes its own rendering
//! as a pseudo-terminal, which lets grammar authors separate alternatives that
//! would otherwise collide.

mod sets;


use std::collections::HashMap;

use indexmap::IndexMap;
use llkit_core::{FirstSet, Grammar, Node, Rule};
use log::debug;

use crate::{GrammarError, Result};

pub use sets::FirstSets;

/// Macro name treated as a distinguishing pseudo-terminal.
pub const LOOKAHEAD: &str = "LOOKAHEAD";

/// Analyze a grammar and attach a FIRST set to each of its rules.
pub fn resolve_first(grammar: &mut Grammar) -> Result<FirstSets> {
    let sets = FirstSetAnalyzer::new(grammar.root()).analyze()?;
    sets.attach(grammar);
    Ok(sets)
}

/// Memo entry for one rule.
#[derive(Debug, Clone, Default)]
enum RuleState {
    #[default]
    Unseen,
    /// Being computed by an enclosing call frame.
    InProgress,
    Done(FirstSet),
}

/// Single-use FIRST-set resolver over one grammar tree.
///
/// After an error the memo holds `InProgress` entries; the analyzer is
/// consumed by `analyze` so it cannot be reused.
pub struct FirstSetAnalyzer<'g> {
    rules: IndexMap<&'g str, &'g Rule>,
    states: HashMap<&'g str, RuleState>,
}

impl<'g> FirstSetAnalyzer<'g> {
    /// Index the rules reachable from `root` (a `List` or a single `Rule`).
    pub fn new(root: &'g Node) -> Self {
        let mut rules = IndexMap::new();
        collect_rules(root, &mut rules);
        Self {
            rules,
            states: HashMap::new(),
        }
    }

    /// Resolver whose memo is pre-filled with completed sets.
    pub fn with_sets(root: &'g Node, sets: &FirstSets) -> Self {
        let mut analyzer = Self::new(root);
        for &name in analyzer.rules.keys() {
            if let Some(set) = sets.get(name) {
                analyzer.states.insert(name, RuleState::Done(set.clone()));
            }
        }
        analyzer
    }

    /// Compute every rule's set, in definition order.
    pub fn analyze(mut self) -> Result<FirstSets> {
        let rules: Vec<&'g Rule> = self.rules.values().copied().collect();
        for rule in rules {
            self.resolve_rule(rule, None)?;
        }

        let mut sets = FirstSets::default();
        for name in self.rules.keys() {
            if let Some(RuleState::Done(set)) = self.states.remove(name) {
                sets.insert(set);
            }
        }
        Ok(sets)
    }

    /// FIRST set of an arbitrary subexpression, epsilon included when it
    /// derives empty.
    pub fn first_of(&mut self, name: &str, node: &'g Node) -> Result<FirstSet> {
        let mut set = FirstSet::new(name);
        if self.resolve(node, Some(&mut set))? {
            set.insert_epsilon();
        }
        Ok(set)
    }

    /// Add the leading terminals of `node` to `acc`; returns whether `node`
    /// derives empty.
    fn resolve(&mut self, node: &'g Node, acc: Option<&mut FirstSet>) -> Result<bool> {
        let mut acc = acc;
        match node {
            Node::Rule(rule) => self.resolve_rule(rule, acc),
            Node::List(list) => {
                for item in list.items() {
                    self.resolve(item, None)?;
                }
                Ok(false)
            }
            Node::Target(_) => Ok(false),
            Node::Alternative(alt) => {
                let mut derives_empty = false;
                for item in alt.items() {
                    derives_empty |= self.resolve(item, acc.as_deref_mut())?;
                }
                Ok(derives_empty)
            }
            Node::Sequence(seq) => {
                for item in seq.items() {
                    if !self.resolve(item, acc.as_deref_mut())? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Node::Name(name) | Node::Nonterminal(name) => {
                match self.rules.get(name.as_str()).copied() {
                    Some(rule) => self.resolve_rule(rule, acc),
                    None => {
                        insert(acc, name, node)?;
                        Ok(false)
                    }
                }
            }
            Node::Reserved(text) | Node::String(text) | Node::Integer(text) | Node::Decimal(text) => {
                insert(acc, text, node)?;
                Ok(false)
            }
            Node::Empty | Node::Action(_) => Ok(true),
            // Parameterized calls have no statically known entry terminals.
            Node::MethodCall(_) => Ok(false),
            Node::MacroCall(call) => {
                if call.name() == LOOKAHEAD {
                    insert(acc, &node.to_string(), node)?;
                }
                Ok(false)
            }
            Node::Lookahead(_) => {
                insert(acc, &node.to_string(), node)?;
                Ok(false)
            }
            Node::Recover(_) => Ok(false),
        }
    }

    fn resolve_rule(&mut self, rule: &'g Rule, acc: Option<&mut FirstSet>) -> Result<bool> {
        let name = rule.name();
        match self.states.get(name) {
            Some(RuleState::Done(set)) => {
                if let Some(acc) = acc {
                    merge_into(acc, set)?;
                }
                return Ok(set.derives_empty());
            }
            Some(RuleState::InProgress) => {
                return Err(GrammarError::LeftRecursion {
                    rule: name.to_string(),
                });
            }
            Some(RuleState::Unseen) | None => {}
        }

        self.states.insert(name, RuleState::InProgress);
        debug!("resolving first({name})");

        let mut set = FirstSet::new(name);
        if self.resolve(rule.body(), Some(&mut set))? {
            set.insert_epsilon();
        }
        debug!("{set}");

        if let Some(acc) = acc {
            merge_into(acc, &set)?;
        }
        let derives_empty = set.derives_empty();
        self.states.insert(name, RuleState::Done(set));
        Ok(derives_empty)
    }
}

fn collect_rules<'g>(node: &'g Node, rules: &mut IndexMap<&'g str, &'g Rule>) {
    match node {
        Node::List(list) => {
            for item in list.items() {
                collect_rules(item, rules);
            }
        }
        Node::Rule(rule) => {
            rules.insert(rule.name(), rule);
        }
        _ => {}
    }
}

fn insert(acc: Option<&mut FirstSet>, key: &str, node: &Node) -> Result<()> {
    if let Some(acc) = acc {
        acc.insert_unique(key, node.clone())?;
    }
    Ok(())
}

/// Copy a completed rule set into an enclosing one. Epsilon is not copied:
/// whether the enclosing expression derives empty is decided by its caller.
fn merge_into(acc: &mut FirstSet, set: &FirstSet) -> Result<()> {
    for (key, node) in set.terminals() {
        acc.insert_unique(key, node.clone())?;
    }
    Ok(())
}
