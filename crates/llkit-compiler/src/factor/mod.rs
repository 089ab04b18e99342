//! Left-factoring pass.
//!
//! Rewrites every alternation so that alternatives sharing a leading symbol
//! collapse into one decision:
//!
//! Before:
//!   ( PACKAGE name SEMI | PACKAGE name error() | . )
//!
//! After:
//!   ( PACKAGE name ( SEMI | error() ) | . )
//!
//! Each alternation runs two phases over its flattened items:
//! 1. **Group**: a positional bubble pass pulling matching alternatives
//!    together and sinking `Empty` below non-macro alternatives
//! 2. **Merge**: folds adjacent runs with matching heads into
//!    `head ( tail1 | tail2 | ... )`, then recurses into the result
//!
//! The pass never fails. Ambiguity and left recursion are reported by the
//! FIRST-set analysis.

mod group;
mod merge;

#[cfg(test)]
mod factor_tests;

use llkit_core::{Alternative, Grammar, List, Node, Rule};
use log::debug;

/// Left-factor a tree. Leaves and macro nodes are returned unchanged.
pub fn factor(node: Node) -> Node {
    match node {
        Node::Alternative(alt) => factor_alternative(alt),
        Node::Sequence(seq) => Node::seq_of(seq.into_items().into_iter().map(factor)),
        Node::Rule(rule) => {
            let (target, body) = rule.into_parts();
            Node::Rule(Rule::new(target, factor(body)))
        }
        Node::List(list) => Node::List(List::from_items(list.into_items().into_iter().map(factor))),
        Node::Target(_)
        | Node::Name(_)
        | Node::Reserved(_)
        | Node::Nonterminal(_)
        | Node::String(_)
        | Node::Integer(_)
        | Node::Decimal(_)
        | Node::Empty
        | Node::MethodCall(_)
        | Node::MacroCall(_)
        | Node::Lookahead(_)
        | Node::Recover(_)
        | Node::Action(_) => node,
    }
}

/// Left-factor every rule body of a grammar in place.
pub fn factor_grammar(grammar: &mut Grammar) {
    for rule in grammar.rules_mut() {
        rule.map_body(factor);
        debug!("factored {rule}");
    }
}

fn factor_alternative(alt: Alternative) -> Node {
    let mut items = alt.into_items();
    group::group(&mut items);

    let mut slots: Vec<Option<Node>> = items.into_iter().map(Some).collect();
    merge::merge(&mut slots, 0, 1)
}
