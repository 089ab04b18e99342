use crate::{EPSILON, FirstSet, Node};

fn sym(name: &str) -> Node {
    Node::Name(name.to_string())
}

#[test]
fn sorted_keys_are_alphabetical() {
    let mut set = FirstSet::new("direction");
    set.insert_unique("NORTH", sym("NORTH")).unwrap();
    set.insert_unique("EAST", sym("EAST")).unwrap();

    assert_eq!(set.sorted_keys(), ["EAST", "NORTH"]);
    assert_eq!(set.to_string(), "first(direction)=[EAST, NORTH]");
}

#[test]
fn insertion_order_is_kept_for_iteration() {
    let mut set = FirstSet::new("r");
    set.insert_unique("b", sym("b")).unwrap();
    set.insert_unique("a", sym("a")).unwrap();

    let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["b", "a"]);
}

#[test]
fn duplicate_terminal_is_rejected() {
    let mut set = FirstSet::new("stmt");
    set.insert_unique("IDENTIFIER", sym("IDENTIFIER")).unwrap();

    let err = set.insert_unique("IDENTIFIER", sym("IDENTIFIER")).unwrap_err();
    assert_eq!(err.key, "IDENTIFIER");
    assert_eq!(err.to_string(), "terminal `IDENTIFIER` appears twice in first(stmt)");
}

#[test]
fn epsilon_may_be_inserted_repeatedly() {
    let mut set = FirstSet::new("opt");
    set.insert_epsilon();
    set.insert_unique(EPSILON, Node::Empty).unwrap();
    set.insert_unique("PUBLIC", Node::Reserved("PUBLIC".into())).unwrap();

    assert!(set.derives_empty());
    assert_eq!(set.len(), 2);
    assert_eq!(set.to_string(), "first(opt)=[<empty>, PUBLIC]");
}

#[test]
fn terminals_skip_epsilon() {
    let mut set = FirstSet::new("opt");
    set.insert_epsilon();
    set.insert_unique("X", sym("X")).unwrap();

    let keys: Vec<_> = set.terminals().map(|(k, _)| k).collect();
    assert_eq!(keys, ["X"]);
    assert_eq!(set.get("X"), Some(&sym("X")));
}

#[test]
fn sorting_is_byte_ordinal() {
    let mut set = FirstSet::new("r");
    for key in ["b", "B", "_", "a", "LOOKAHEAD(x)"] {
        set.insert_unique(key, sym(key)).unwrap();
    }

    assert_eq!(set.sorted_keys(), ["B", "LOOKAHEAD(x)", "_", "a", "b"]);
}
