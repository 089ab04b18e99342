use super::*;

fn sym(name: &str) -> Node {
    Node::Name(name.to_string())
}

#[test]
fn render_leaves() {
    assert_eq!(sym("IDENT").to_string(), "IDENT");
    assert_eq!(Node::Reserved("class".into()).to_string(), "class");
    assert_eq!(Node::Nonterminal("expr".into()).to_string(), "<expr>");
    assert_eq!(Node::String("a\"b\\".into()).to_string(), r#""a\"b\\""#);
    assert_eq!(Node::Integer("007".into()).to_string(), "007");
    assert_eq!(Node::Decimal("1.50".into()).to_string(), "1.50");
    assert_eq!(Node::Empty.to_string(), ".");
    assert_eq!(Node::Action(String::new()).to_string(), "{}");
    assert_eq!(Node::Action(" push(); ".into()).to_string(), "{ push(); }");
}

#[test]
fn render_calls_and_macros() {
    let call = Node::MethodCall(Call::new("error", [r#""expected ;""#]));
    let prec = Node::MethodCall(Call::new("expr", ["1", "LEFT"]));
    let lookahead = Node::lookahead(Node::seq(sym("IDENT"), sym("COLON")));
    let recover = Node::recover(sym("SEMI"));

    assert_eq!(call.to_string(), r#"error("expected ;")"#);
    assert_eq!(prec.to_string(), "expr(1, LEFT)");
    assert_eq!(lookahead.to_string(), "LOOKAHEAD(IDENT COLON)");
    assert_eq!(recover.to_string(), "RECOVER(SEMI)");
}

#[test]
fn render_composites() {
    let body = Node::seq(
        sym("LPAREN"),
        Node::seq(Node::alt_of([sym("a"), Node::Empty, sym("b")]), sym("RPAREN")),
    );

    assert_eq!(body.to_string(), "LPAREN ( a | . | b ) RPAREN");
}

#[test]
fn render_rule_with_result_type() {
    let rule = Rule::new(Target::with_type("expr", "Expr"), sym("term"));

    assert_eq!(rule.to_string(), "expr:Expr ::= term");
    assert_eq!(Node::rule("expr", sym("term")).to_string(), "expr ::= term");
}

#[test]
fn render_grammar_listing() {
    let grammar = Grammar::new(Node::List(List::from_items([
        Node::rule("direction", Node::alt(sym("NORTH"), sym("EAST"))),
        Node::rule("move", Node::seq(Node::Reserved("go".into()), sym("direction"))),
    ])))
    .unwrap();

    insta::assert_snapshot!(grammar.to_string(), @r"
    direction ::= ( NORTH | EAST ) ;
    move ::= go direction ;
    ");
}
