//! Colored renderings of pipeline output.
//!
//! With colors off, each function produces exactly the corresponding
//! `Compiled::dump_*` text.

use std::fmt::Write;

use llkit_compiler::Decision;
use llkit_core::{FirstSet, Grammar};

use crate::colors::Colors;

pub fn paint_grammar(grammar: &Grammar, c: Colors) -> String {
    let mut out = String::new();
    for rule in grammar.rules() {
        writeln!(
            out,
            "{}{}{} ::= {} ;",
            c.blue,
            rule.target(),
            c.reset,
            rule.body()
        )
        .expect("String write never fails");
    }
    out
}

pub fn paint_first<'a>(sets: impl IntoIterator<Item = &'a FirstSet>, c: Colors) -> String {
    let mut out = String::new();
    for set in sets {
        writeln!(
            out,
            "first({}{}{})=[{}]",
            c.blue,
            set.name(),
            c.reset,
            set.sorted_keys().join(", ")
        )
        .expect("String write never fails");
    }
    out
}

pub fn paint_decisions(decisions: &[Decision], c: Colors) -> String {
    let mut out = String::new();
    for decision in decisions {
        writeln!(out, "{}{}{}:", c.blue, decision.label(), c.reset)
            .expect("String write never fails");
        for branch in &decision.branches {
            writeln!(
                out,
                "  {} {}->{} [{}]",
                branch.expr,
                c.dim,
                c.reset,
                branch.first.sorted_keys().join(", ")
            )
            .expect("String write never fails");
        }
    }
    out
}
