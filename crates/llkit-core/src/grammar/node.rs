//! Grammar node definitions.
//!
//! `Sequence`, `Alternative` and `List` are built from binary compositions,
//! but their constructors flatten nested siblings of the same kind into one
//! ordered array. That array is the canonical view every pass works on:
//! `alt(alt(a, b), c)` and `alt(a, alt(b, c))` are the same node `[a, b, c]`.

use crate::first_set::FirstSet;

/// Grammar node variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `name ::= body`.
    Rule(Rule),
    /// Rule name plus optional declared result type.
    Target(Target),
    /// Ordered concatenation.
    Sequence(Sequence),
    /// Ordered choice.
    Alternative(Alternative),
    /// Top-level list of rules.
    List(List),
    /// Reference to a rule, or a bare terminal symbol when no rule has the name.
    Name(String),
    /// Reserved-word terminal.
    Reserved(String),
    /// Explicitly bracketed nonterminal reference.
    Nonterminal(String),
    /// String literal terminal (unescaped value).
    String(String),
    /// Integer literal terminal, kept as written.
    Integer(String),
    /// Decimal literal terminal, kept as written.
    Decimal(String),
    /// Epsilon (matches zero input).
    Empty,
    /// Sub-rule invocation with actual arguments, e.g. a precedence level.
    MethodCall(Call),
    /// Generic macro invocation.
    MacroCall(Call),
    /// `LOOKAHEAD(pattern)`: explicit disambiguation hint.
    Lookahead(Box<Node>),
    /// `RECOVER(pattern)`: error-recovery escape alternative.
    Recover(Box<Node>),
    /// Opaque semantic-action payload.
    Action(String),
}

impl Node {
    /// Binary sequence, flattened.
    pub fn seq(left: Node, right: Node) -> Node {
        Node::Sequence(Sequence::new(left, right))
    }

    /// Sequence of any arity. Zero items yield `Empty`, one item yields itself.
    pub fn seq_of(items: impl IntoIterator<Item = Node>) -> Node {
        let mut flat = Vec::new();
        for item in items {
            push_flat(&mut flat, item, Kind::Sequence);
        }
        match flat.len() {
            0 => Node::Empty,
            1 => flat.pop().unwrap_or(Node::Empty),
            _ => Node::Sequence(Sequence { items: flat }),
        }
    }

    /// Binary alternative, flattened.
    pub fn alt(left: Node, right: Node) -> Node {
        Node::Alternative(Alternative::new(left, right))
    }

    /// Alternative of any arity. Zero items yield `Empty`, one item yields itself.
    pub fn alt_of(items: impl IntoIterator<Item = Node>) -> Node {
        let mut flat = Vec::new();
        for item in items {
            push_flat(&mut flat, item, Kind::Alternative);
        }
        match flat.len() {
            0 => Node::Empty,
            1 => flat.pop().unwrap_or(Node::Empty),
            _ => Node::Alternative(Alternative { items: flat }),
        }
    }

    pub fn rule(name: impl Into<String>, body: Node) -> Node {
        Node::Rule(Rule::new(Target::new(name), body))
    }

    pub fn lookahead(pattern: Node) -> Node {
        Node::Lookahead(Box::new(pattern))
    }

    pub fn recover(pattern: Node) -> Node {
        Node::Recover(Box::new(pattern))
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(
            self,
            Node::Rule(_) | Node::Target(_) | Node::Sequence(_) | Node::Alternative(_) | Node::List(_)
        )
    }

    /// Macro nodes: `LOOKAHEAD`, `RECOVER`, and generic macro calls.
    pub fn is_macro(&self) -> bool {
        matches!(self, Node::Lookahead(_) | Node::Recover(_) | Node::MacroCall(_))
    }

    /// True when the node's leading symbol is a macro.
    pub fn leads_with_macro(&self) -> bool {
        self.head().is_macro()
    }

    /// Leading symbol: the first item of a sequence, the node itself otherwise.
    pub fn head(&self) -> &Node {
        match self {
            Node::Sequence(seq) => seq.head(),
            _ => self,
        }
    }

    /// Split into leading symbol and remainder. The remainder of a
    /// non-sequence is `Empty`.
    pub fn into_head_tail(self) -> (Node, Node) {
        match self {
            Node::Sequence(seq) => {
                let mut items = seq.items.into_iter();
                let head = items.next().unwrap_or(Node::Empty);
                (head, Node::seq_of(items))
            }
            other => (other, Node::Empty),
        }
    }

    /// Whether two alternatives can be merged on their leading symbol.
    ///
    /// Leaves compare by kind and value; sequences compare their leading
    /// symbols only. Every other combination is `false`.
    pub fn matches(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Name(a), Node::Name(b))
            | (Node::Reserved(a), Node::Reserved(b))
            | (Node::Nonterminal(a), Node::Nonterminal(b))
            | (Node::String(a), Node::String(b))
            | (Node::Integer(a), Node::Integer(b))
            | (Node::Decimal(a), Node::Decimal(b)) => a == b,
            (Node::MethodCall(a), Node::MethodCall(b)) => a == b,
            (Node::Sequence(a), Node::Sequence(b)) => a.head().matches(b.head()),
            _ => false,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Rule(_) => "rule",
            Node::Target(_) => "target",
            Node::Sequence(_) => "sequence",
            Node::Alternative(_) => "alternative",
            Node::List(_) => "list",
            Node::Name(_) => "name",
            Node::Reserved(_) => "reserved word",
            Node::Nonterminal(_) => "nonterminal",
            Node::String(_) => "string literal",
            Node::Integer(_) => "integer literal",
            Node::Decimal(_) => "decimal literal",
            Node::Empty => "empty",
            Node::MethodCall(_) => "method call",
            Node::MacroCall(_) => "macro call",
            Node::Lookahead(_) => "lookahead",
            Node::Recover(_) => "recover",
            Node::Action(_) => "action",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Kind {
    Sequence,
    Alternative,
    List,
}

fn push_flat(items: &mut Vec<Node>, node: Node, kind: Kind) {
    match (kind, node) {
        (Kind::Sequence, Node::Sequence(seq)) => items.extend(seq.items),
        (Kind::Alternative, Node::Alternative(alt)) => items.extend(alt.items),
        (Kind::List, Node::List(list)) => items.extend(list.items),
        (_, node) => items.push(node),
    }
}

/// `A B`, flattened. Always holds at least two items.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    items: Vec<Node>,
}

impl Sequence {
    pub fn new(left: Node, right: Node) -> Self {
        let mut items = Vec::new();
        push_flat(&mut items, left, Kind::Sequence);
        push_flat(&mut items, right, Kind::Sequence);
        Self { items }
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Node> {
        self.items
    }

    pub fn head(&self) -> &Node {
        &self.items[0]
    }
}

/// `A | B`, flattened. Always holds at least two items.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    items: Vec<Node>,
}

impl Alternative {
    pub fn new(left: Node, right: Node) -> Self {
        let mut items = Vec::new();
        push_flat(&mut items, left, Kind::Alternative);
        push_flat(&mut items, right, Kind::Alternative);
        Self { items }
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Node> {
        self.items
    }
}

/// Top-level rule list, flattened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct List {
    items: Vec<Node>,
}

impl List {
    pub fn new(left: Node, right: Node) -> Self {
        let mut items = Vec::new();
        push_flat(&mut items, left, Kind::List);
        push_flat(&mut items, right, Kind::List);
        Self { items }
    }

    pub fn from_items(items: impl IntoIterator<Item = Node>) -> Self {
        let mut flat = Vec::new();
        for item in items {
            push_flat(&mut flat, item, Kind::List);
        }
        Self { items: flat }
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Node] {
        &mut self.items
    }

    pub fn into_items(self) -> Vec<Node> {
        self.items
    }
}

/// Rule name plus optional declared result type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
    result_type: Option<String>,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result_type: None,
        }
    }

    pub fn with_type(name: impl Into<String>, result_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result_type: Some(result_type.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn result_type(&self) -> Option<&str> {
        self.result_type.as_deref()
    }
}

/// `name ::= body`, plus the FIRST set once analysis has run.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    target: Target,
    body: Box<Node>,
    first: Option<FirstSet>,
}

impl Rule {
    pub fn new(target: Target, body: Node) -> Self {
        Self {
            target,
            body: Box::new(body),
            first: None,
        }
    }

    /// Rule name; unique within a grammar.
    pub fn name(&self) -> &str {
        self.target.name()
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn body(&self) -> &Node {
        &self.body
    }

    pub fn first(&self) -> Option<&FirstSet> {
        self.first.as_ref()
    }

    pub fn set_first(&mut self, first: FirstSet) {
        self.first = Some(first);
    }

    /// Replace the body in place. Any attached FIRST set is dropped, since
    /// it described the old body.
    pub fn map_body(&mut self, f: impl FnOnce(Node) -> Node) {
        let body = std::mem::replace(&mut *self.body, Node::Empty);
        *self.body = f(body);
        self.first = None;
    }

    /// Rebuild with a new body, dropping any attached FIRST set.
    pub fn with_body(self, body: Node) -> Self {
        Self::new(self.target, body)
    }

    pub fn into_parts(self) -> (Target, Node) {
        (self.target, *self.body)
    }
}

/// Name plus raw actual arguments, shared by method and macro calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    name: String,
    args: Vec<String>,
}

impl Call {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
