use std::fmt::Write;

use indexmap::IndexMap;
use llkit_core::{FirstSet, Grammar};

/// Completed FIRST sets, keyed by rule name in definition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FirstSets {
    sets: IndexMap<String, FirstSet>,
}

impl FirstSets {
    pub(crate) fn insert(&mut self, set: FirstSet) {
        self.sets.insert(set.name().to_string(), set);
    }

    pub fn get(&self, rule: &str) -> Option<&FirstSet> {
        self.sets.get(rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FirstSet> {
        self.sets.values()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Attach each set to the rule of the same name.
    pub fn attach(&self, grammar: &mut Grammar) {
        for rule in grammar.rules_mut() {
            if let Some(set) = self.sets.get(rule.name()) {
                rule.set_first(set.clone());
            }
        }
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        for set in self.iter() {
            writeln!(out, "{set}").expect("String write never fails");
        }
        out
    }
}
