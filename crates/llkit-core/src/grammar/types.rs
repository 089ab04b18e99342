//! Grammar container.

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter, Write};

use super::json::LoadError;
use super::node::{List, Node, Rule};

/// A validated grammar: a `List` of uniquely named rules, in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grammar {
    root: Node,
}

impl Grammar {
    /// Accepts a `List` of rules or a single top-level rule.
    pub fn new(root: Node) -> Result<Self, LoadError> {
        let items = match root {
            Node::List(list) => list.into_items(),
            rule @ Node::Rule(_) => vec![rule],
            other => return Err(LoadError::NotARule(other.kind_name())),
        };

        let mut seen = HashSet::new();
        for item in &items {
            let Node::Rule(rule) = item else {
                return Err(LoadError::NotARule(item.kind_name()));
            };
            if !seen.insert(rule.name()) {
                return Err(LoadError::DuplicateRule(rule.name().to_string()));
            }
        }

        Ok(Self {
            root: Node::List(List::from_items(items)),
        })
    }

    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self, LoadError> {
        Self::new(Node::List(List::from_items(rules.into_iter().map(Node::Rule))))
    }

    /// Root `List` node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.items().iter().filter_map(Node::as_rule)
    }

    /// Mutable access to the rules. Names are fixed, so uniqueness holds.
    pub fn rules_mut(&mut self) -> impl Iterator<Item = &mut Rule> {
        let items: &mut [Node] = match &mut self.root {
            Node::List(list) => list.items_mut(),
            _ => &mut [],
        };
        items.iter_mut().filter_map(|node| match node {
            Node::Rule(rule) => Some(rule),
            _ => None,
        })
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules().find(|rule| rule.name() == name)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// One `first(name)=[...]` line per analyzed rule, in definition order.
    pub fn dump_first(&self) -> String {
        let mut out = String::new();
        for first in self.rules().filter_map(Rule::first) {
            writeln!(out, "{first}").expect("String write never fails");
        }
        out
    }

    fn items(&self) -> &[Node] {
        match &self.root {
            Node::List(list) => list.items(),
            _ => &[],
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
