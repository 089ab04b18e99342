//! Test utilities: node shorthands and a finite language enumerator.

use std::collections::BTreeSet;

use llkit_core::{Call, Grammar, Node, Rule, Target};

/// Bare symbol (`Name`).
pub fn sym(name: &str) -> Node {
    Node::Name(name.to_string())
}

/// Reserved word.
pub fn kw(word: &str) -> Node {
    Node::Reserved(word.to_string())
}

pub fn action(code: &str) -> Node {
    Node::Action(code.to_string())
}

pub fn call(name: &str, args: &[&str]) -> Node {
    Node::MethodCall(Call::new(name, args.iter().copied()))
}

pub fn seq<const N: usize>(items: [Node; N]) -> Node {
    Node::seq_of(items)
}

pub fn alt<const N: usize>(items: [Node; N]) -> Node {
    Node::alt_of(items)
}

pub fn rule(name: &str, body: Node) -> Rule {
    Rule::new(Target::new(name), body)
}

pub fn grammar<const N: usize>(rules: [Rule; N]) -> Grammar {
    Grammar::from_rules(rules).expect("test grammar must be valid")
}

/// Every terminal string a rule-free expression derives.
///
/// Names are treated as terminals and macros as single pseudo-tokens, so
/// the language of any expression without recursion is finite.
pub fn language(node: &Node) -> BTreeSet<Vec<String>> {
    match node {
        Node::Sequence(seq) => {
            let mut acc: BTreeSet<Vec<String>> = BTreeSet::from([Vec::new()]);
            for item in seq.items() {
                let suffixes = language(item);
                acc = acc
                    .iter()
                    .flat_map(|prefix| {
                        suffixes.iter().map(move |suffix| {
                            let mut sentence = prefix.clone();
                            sentence.extend(suffix.iter().cloned());
                            sentence
                        })
                    })
                    .collect();
            }
            acc
        }
        Node::Alternative(alt) => alt.items().iter().flat_map(language).collect(),
        Node::Rule(rule) => language(rule.body()),
        Node::Empty | Node::Action(_) => BTreeSet::from([Vec::new()]),
        other => BTreeSet::from([vec![other.to_string()]]),
    }
}
