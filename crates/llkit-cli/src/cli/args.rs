//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! so the same definition is reused with different visibility (`.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Grammar JSON file, or `-` for stdin (positional).
pub fn grammar_path_arg() -> Arg {
    Arg::new("grammar_path")
        .value_name("GRAMMAR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Grammar JSON file (use - for stdin)")
}

/// Skip left-factoring (--no-factor).
pub fn no_factor_arg() -> Arg {
    Arg::new("no_factor")
        .long("no-factor")
        .action(ArgAction::SetTrue)
        .help("Analyze the grammar as written, without left-factoring")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v info, -vv debug, -vvv trace)")
}
