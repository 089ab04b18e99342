use llkit_core::{Node, Rule};

use super::group::group;
use super::{factor, factor_grammar};
use crate::test_utils::{action, alt, call, grammar, kw, language, rule, seq, sym};

fn rendered(items: &[Node]) -> Vec<String> {
    items.iter().map(Node::to_string).collect()
}

#[test]
fn group_pulls_matching_alternative_up() {
    let mut items = vec![sym("A"), sym("B"), sym("A")];

    group(&mut items);

    assert_eq!(rendered(&items), ["A", "A", "B"]);
}

#[test]
fn group_pulls_matching_sequences_together() {
    let mut items = vec![
        seq([sym("A"), sym("x")]),
        sym("B"),
        seq([sym("C"), sym("y")]),
        seq([sym("A"), sym("z")]),
    ];

    group(&mut items);

    assert_eq!(rendered(&items), ["A x", "A z", "B", "C y"]);
}

#[test]
fn group_sinks_empty_below_plain_alternatives() {
    let mut items = vec![Node::Empty, sym("X"), sym("Y")];

    group(&mut items);

    assert_eq!(rendered(&items), ["X", "Y", "."]);
}

#[test]
fn group_keeps_empty_above_recover() {
    let mut items = vec![
        sym("X"),
        Node::Empty,
        seq([Node::recover(sym("SEMI")), Node::Empty]),
    ];

    group(&mut items);

    assert_eq!(rendered(&items), ["X", ".", "RECOVER(SEMI) ."]);
}

#[test]
fn group_keeps_empty_above_lookahead() {
    let mut items = vec![Node::Empty, sym("B"), Node::lookahead(sym("A"))];

    group(&mut items);

    assert_eq!(rendered(&items), ["B", ".", "LOOKAHEAD(A)"]);
}

#[test]
fn group_leaves_distinct_alternatives_in_place() {
    let mut items = vec![sym("C"), sym("A"), sym("B")];

    group(&mut items);

    assert_eq!(rendered(&items), ["C", "A", "B"]);
}

#[test]
fn factor_package_declaration() {
    let body = alt([
        seq([kw("PACKAGE"), sym("qualified_name"), sym("SEMI"), action("")]),
        seq([
            kw("PACKAGE"),
            sym("qualified_name"),
            call("error", &[r#""...""#]),
            Node::Empty,
        ]),
        Node::Empty,
        seq([Node::recover(sym("...")), Node::Empty]),
    ]);

    let factored = factor(Node::rule("package_opt", body));

    assert_eq!(
        factored.to_string(),
        r#"package_opt ::= ( PACKAGE qualified_name ( SEMI {} | error("...") . ) | . | RECOVER(...) . )"#
    );
}

#[test]
fn factor_folds_three_alternatives_into_one_decision() {
    let body = alt([
        seq([sym("A"), sym("x")]),
        seq([sym("A"), sym("y")]),
        seq([sym("A"), sym("z")]),
    ]);

    insta::assert_snapshot!(factor(body).to_string(), @"A ( x | y | z )");
}

#[test]
fn factor_groups_separated_alternatives_first() {
    let body = alt([seq([sym("A"), sym("x")]), sym("B"), seq([sym("A"), sym("y")])]);

    insta::assert_snapshot!(factor(body).to_string(), @"( A ( x | y ) | B )");
}

#[test]
fn factor_recurses_into_shared_tails() {
    let body = alt([
        seq([sym("A"), sym("B"), sym("x")]),
        seq([sym("A"), sym("B"), sym("y")]),
        sym("C"),
    ]);

    insta::assert_snapshot!(factor(body).to_string(), @"( A B ( x | y ) | C )");
}

#[test]
fn factor_reaches_alternations_inside_sequences() {
    let body = seq([
        sym("X"),
        alt([seq([sym("A"), sym("b")]), seq([sym("A"), sym("c")])]),
        sym("Z"),
    ]);

    insta::assert_snapshot!(factor(body).to_string(), @"X A ( b | c ) Z");
}

#[test]
fn factor_bare_symbol_and_sequence_with_same_head() {
    let body = alt([sym("A"), seq([sym("A"), sym("B")])]);

    insta::assert_snapshot!(factor(body).to_string(), @"A ( B | . )");
}

#[test]
fn factor_leaves_macros_and_leaves_untouched() {
    let lookahead = Node::lookahead(alt([seq([sym("A"), sym("b")]), seq([sym("A"), sym("c")])]));

    assert_eq!(factor(lookahead.clone()), lookahead);
    assert_eq!(factor(sym("A")), sym("A"));
    assert_eq!(factor(Node::Empty), Node::Empty);
}

#[test]
fn factor_without_shared_prefix_is_identity() {
    let body = alt([seq([sym("A"), sym("x")]), seq([sym("B"), sym("y")]), sym("C")]);

    assert_eq!(factor(body.clone()), body);
}

#[test]
fn factor_is_idempotent() {
    let body = alt([
        seq([kw("PACKAGE"), sym("name"), sym("SEMI")]),
        seq([kw("PACKAGE"), sym("name"), sym("COMMA")]),
        sym("other"),
        Node::Empty,
    ]);

    let once = factor(body);
    let twice = factor(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn factor_preserves_language() {
    let bodies = [
        alt([
            seq([sym("A"), sym("B"), sym("C")]),
            seq([sym("A"), sym("B")]),
            seq([sym("A"), sym("D")]),
            sym("E"),
            Node::Empty,
        ]),
        alt([
            seq([sym("x"), alt([sym("y"), seq([sym("y"), sym("z")])])]),
            seq([sym("x"), sym("w")]),
            seq([Node::recover(sym("SEMI")), Node::Empty]),
        ]),
        seq([
            alt([seq([kw("IF"), sym("c")]), seq([kw("IF"), sym("c"), kw("ELSE")])]),
            alt([sym("p"), seq([sym("p"), sym("q")]), Node::Empty]),
        ]),
    ];

    for body in bodies {
        let before = language(&body);
        let after = language(&factor(body));
        assert_eq!(before, after);
    }
}

#[test]
fn factor_grammar_rewrites_every_rule() {
    let mut g = grammar([
        rule("a", alt([seq([sym("X"), sym("b")]), seq([sym("X"), sym("c")])])),
        rule("b", alt([sym("Y"), sym("Z")])),
    ]);

    factor_grammar(&mut g);

    let bodies: Vec<_> = g.rules().map(Rule::body).map(Node::to_string).collect();
    assert_eq!(bodies, ["X ( b | c )", "( Y | Z )"]);
}
