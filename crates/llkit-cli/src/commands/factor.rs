use std::path::PathBuf;

use llkit_compiler::factor_grammar;

use super::grammar_loader::load_grammar;
use super::output::paint_grammar;
use crate::colors::{Colors, fail};

pub struct FactorArgs {
    pub grammar_path: PathBuf,
    pub color: bool,
}

/// Factoring never fails, so no analysis runs here; use `check` for that.
pub fn run(args: FactorArgs) {
    let colors = Colors::new(args.color);
    let mut grammar = load_grammar(&args.grammar_path).unwrap_or_else(|e| fail(e, colors));

    factor_grammar(&mut grammar);
    print!("{}", paint_grammar(&grammar, colors));
}
