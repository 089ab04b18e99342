use std::path::PathBuf;

use super::grammar_loader::load_and_compile;
use super::output::paint_decisions;
use crate::colors::{Colors, fail};

pub struct DecisionsArgs {
    pub grammar_path: PathBuf,
    pub factor: bool,
    pub color: bool,
}

pub fn run(args: DecisionsArgs) {
    let colors = Colors::new(args.color);
    let compiled =
        load_and_compile(&args.grammar_path, args.factor).unwrap_or_else(|e| fail(e, colors));

    print!("{}", paint_decisions(compiled.decisions(), colors));
}
