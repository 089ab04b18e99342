//! Diagnostic rendering.
//!
//! The rendered form is consumed byte-for-byte by the code generator, so
//! every separator here is fixed.

use std::fmt::{self, Display, Formatter, Write};

use super::node::{Call, Node, Rule, Target};

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Rule(rule) => rule.fmt(f),
            Node::Target(target) => target.fmt(f),
            Node::Sequence(seq) => write_joined(f, seq.items(), " "),
            Node::Alternative(alt) => {
                f.write_str("( ")?;
                write_joined(f, alt.items(), " | ")?;
                f.write_str(" )")
            }
            Node::List(list) => {
                for item in list.items() {
                    writeln!(f, "{item} ;")?;
                }
                Ok(())
            }
            Node::Name(name) | Node::Reserved(name) => f.write_str(name),
            Node::Nonterminal(name) => write!(f, "<{name}>"),
            Node::String(value) => write_quoted(f, value),
            Node::Integer(text) | Node::Decimal(text) => f.write_str(text),
            Node::Empty => f.write_char('.'),
            Node::MethodCall(call) | Node::MacroCall(call) => call.fmt(f),
            Node::Lookahead(pattern) => write!(f, "LOOKAHEAD({pattern})"),
            Node::Recover(pattern) => write!(f, "RECOVER({pattern})"),
            Node::Action(payload) => write!(f, "{{{payload}}}"),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ::= {}", self.target(), self.body())
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.result_type() {
            Some(ty) => write!(f, "{}:{}", self.name(), ty),
            None => f.write_str(self.name()),
        }
    }
}

impl Display for Call {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        for (i, arg) in self.args().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(arg)?;
        }
        f.write_char(')')
    }
}

fn write_joined(f: &mut Formatter<'_>, items: &[Node], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        item.fmt(f)?;
    }
    Ok(())
}

fn write_quoted(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
