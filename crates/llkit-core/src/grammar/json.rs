//! JSON deserialization for grammar trees.
//!
//! The interchange format is a tree, not grammar source text: each node is
//! an object tagged by its `type` field. Rules keep their definition order.
//!
//! ```json
//! {
//!   "rules": {
//!     "direction": { "type": "CHOICE", "members": [
//!       { "type": "SYMBOL", "name": "NORTH" },
//!       { "type": "SYMBOL", "name": "EAST" }
//!     ]}
//!   },
//!   "result_types": { "direction": "Direction" }
//! }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use super::node::{Call, Node, Rule, Target};
use super::types::Grammar;

/// Error while loading a grammar.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(String),

    #[error("expected a rule at grammar level, found {0}")]
    NotARule(&'static str),
}

impl Grammar {
    /// Parse grammar from JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        raw.try_into()
    }
}

#[derive(Debug, Deserialize)]
struct RawGrammar {
    rules: IndexMap<String, RawNode>,
    #[serde(default)]
    result_types: IndexMap<String, String>,
}

impl TryFrom<RawGrammar> for Grammar {
    type Error = LoadError;

    fn try_from(mut raw: RawGrammar) -> Result<Self, Self::Error> {
        let rules = raw.rules.into_iter().map(|(name, body)| {
            let target = match raw.result_types.swap_remove(&name) {
                Some(ty) => Target::with_type(name, ty),
                None => Target::new(name),
            };
            Rule::new(target, body.into())
        });
        Grammar::from_rules(rules.collect::<Vec<_>>())
    }
}

/// Raw node matching the JSON format.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
enum RawNode {
    EMPTY,
    SYMBOL {
        name: String,
    },
    RESERVED {
        value: String,
    },
    NONTERMINAL {
        name: String,
    },
    STRING {
        value: String,
    },
    INTEGER {
        value: String,
    },
    DECIMAL {
        value: String,
    },
    SEQ {
        members: Vec<RawNode>,
    },
    CHOICE {
        members: Vec<RawNode>,
    },
    CALL {
        name: String,
        #[serde(default)]
        args: Vec<String>,
    },
    MACRO {
        name: String,
        #[serde(default)]
        args: Vec<String>,
    },
    LOOKAHEAD {
        content: Box<RawNode>,
    },
    RECOVER {
        content: Box<RawNode>,
    },
    ACTION {
        #[serde(default)]
        code: String,
    },
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        match raw {
            RawNode::EMPTY => Node::Empty,
            RawNode::SYMBOL { name } => Node::Name(name),
            RawNode::RESERVED { value } => Node::Reserved(value),
            RawNode::NONTERMINAL { name } => Node::Nonterminal(name),
            RawNode::STRING { value } => Node::String(value),
            RawNode::INTEGER { value } => Node::Integer(value),
            RawNode::DECIMAL { value } => Node::Decimal(value),
            RawNode::SEQ { members } => Node::seq_of(members.into_iter().map(Into::into)),
            RawNode::CHOICE { members } => Node::alt_of(members.into_iter().map(Into::into)),
            RawNode::CALL { name, args } => Node::MethodCall(Call::new(name, args)),
            RawNode::MACRO { name, args } => Node::MacroCall(Call::new(name, args)),
            RawNode::LOOKAHEAD { content } => Node::lookahead((*content).into()),
            RawNode::RECOVER { content } => Node::recover((*content).into()),
            RawNode::ACTION { code } => Node::Action(code),
        }
    }
}
