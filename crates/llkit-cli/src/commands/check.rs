use std::path::PathBuf;

use log::info;

use super::grammar_loader::load_and_compile;
use crate::colors::{Colors, fail};

pub struct CheckArgs {
    pub grammar_path: PathBuf,
    pub factor: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let colors = Colors::new(args.color);
    if let Err(e) = load_and_compile(&args.grammar_path, args.factor) {
        fail(e, colors);
    }

    // Silent on success (like cargo check)
    info!("{}: ok", args.grammar_path.display());
}
