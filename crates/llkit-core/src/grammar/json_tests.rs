use indoc::indoc;

use super::*;

#[test]
fn parse_minimal_grammar() {
    let json = r#"{
        "rules": {
            "program": { "type": "SYMBOL", "name": "statement" },
            "statement": { "type": "STRING", "value": "x" }
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.len(), 2);
    assert_eq!(grammar.rule("statement").unwrap().body(), &Node::String("x".into()));
}

#[test]
fn parse_seq_and_choice() {
    let json = indoc! {r#"
        {
          "rules": {
            "modifier_mult": {
              "type": "CHOICE",
              "members": [
                { "type": "SEQ", "members": [
                  { "type": "RESERVED", "value": "PUBLIC" },
                  { "type": "SYMBOL", "name": "modifier_mult" }
                ]},
                { "type": "EMPTY" }
              ]
            }
          }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    insta::assert_snapshot!(grammar.to_string(), @"modifier_mult ::= ( PUBLIC modifier_mult | . ) ;");
}

#[test]
fn parse_macros_calls_and_actions() {
    let json = indoc! {r#"
        {
          "rules": {
            "stmt": {
              "type": "CHOICE",
              "members": [
                { "type": "SEQ", "members": [
                  { "type": "LOOKAHEAD", "content": { "type": "SEQ", "members": [
                    { "type": "SYMBOL", "name": "IDENT" },
                    { "type": "SYMBOL", "name": "COLON" }
                  ]}},
                  { "type": "SYMBOL", "name": "IDENT" },
                  { "type": "ACTION", "code": "label()" }
                ]},
                { "type": "SEQ", "members": [
                  { "type": "CALL", "name": "expr", "args": ["0"] },
                  { "type": "ACTION" }
                ]},
                { "type": "SEQ", "members": [
                  { "type": "RECOVER", "content": { "type": "SYMBOL", "name": "SEMI" } },
                  { "type": "EMPTY" }
                ]}
              ]
            }
          }
        }
    "#};

    let grammar = Grammar::from_json(json).unwrap();
    insta::assert_snapshot!(
        grammar.to_string(),
        @"stmt ::= ( LOOKAHEAD(IDENT COLON) IDENT {label()} | expr(0) {} | RECOVER(SEMI) . ) ;"
    );
}

#[test]
fn result_types_attach_to_targets() {
    let json = r#"{
        "rules": { "expr": { "type": "SYMBOL", "name": "NUM" } },
        "result_types": { "expr": "Expr" }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    assert_eq!(grammar.rule("expr").unwrap().target().result_type(), Some("Expr"));
}

#[test]
fn preserves_rule_order() {
    let json = r#"{
        "rules": {
            "program": { "type": "SYMBOL", "name": "statement" },
            "statement": { "type": "SYMBOL", "name": "expression" },
            "expression": { "type": "STRING", "value": "x" }
        }
    }"#;

    let grammar = Grammar::from_json(json).unwrap();
    let names: Vec<_> = grammar.rules().map(Rule::name).collect();

    // Entry rule should be first (program), not alphabetically sorted
    assert_eq!(names, ["program", "statement", "expression"]);
}

#[test]
fn unknown_node_type_is_an_error() {
    let json = r#"{ "rules": { "a": { "type": "REPEAT", "content": { "type": "EMPTY" } } } }"#;

    let err = Grammar::from_json(json).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn grammar_rejects_duplicate_rules() {
    let root = Node::List(List::from_items([
        Node::rule("a", Node::Empty),
        Node::rule("a", Node::Empty),
    ]));

    let err = Grammar::new(root).unwrap_err();
    assert_eq!(err.to_string(), "rule `a` is defined more than once");
}

#[test]
fn grammar_rejects_non_rule_items() {
    let root = Node::List(List::from_items([Node::rule("a", Node::Empty), Node::Empty]));

    let err = Grammar::new(root).unwrap_err();
    assert_eq!(err.to_string(), "expected a rule at grammar level, found empty");
}

#[test]
fn single_rule_is_wrapped_into_list() {
    let grammar = Grammar::new(Node::rule("goal", Node::Name("EOF".into()))).unwrap();

    assert_eq!(grammar.len(), 1);
    assert!(matches!(grammar.root(), Node::List(_)));
}
