use std::path::PathBuf;

use super::grammar_loader::load_and_compile;
use super::output::paint_first;
use crate::colors::{Colors, fail};

pub struct FirstArgs {
    pub grammar_path: PathBuf,
    pub factor: bool,
    pub color: bool,
}

pub fn run(args: FirstArgs) {
    let colors = Colors::new(args.color);
    let compiled =
        load_and_compile(&args.grammar_path, args.factor).unwrap_or_else(|e| fail(e, colors));

    print!("{}", paint_first(compiled.first_sets().iter(), colors));
}
