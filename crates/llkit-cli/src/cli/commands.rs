//! Command builders for the CLI.
//!
//! Every command accepts the same flag set; flags a command ignores are
//! hidden from its `--help`.

use clap::Command;

use super::args::*;

fn with_common_args(cmd: Command) -> Command {
    cmd.arg(grammar_path_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("llkit")
        .about("Left-factoring and FIRST-set analysis for LL(1) grammars")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(factor_command())
        .subcommand(first_command())
        .subcommand(decisions_command())
}

/// Validate a grammar: factor, then run FIRST-set analysis.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check that a grammar is LL(1) after factoring")
        .after_help(
            r#"EXAMPLES:
  llkit check grammar.json            # factor, then analyze
  llkit check grammar.json --no-factor
  cat grammar.json | llkit check -"#,
        )
        .arg(no_factor_arg());

    with_common_args(cmd)
}

/// Print the factored grammar.
pub fn factor_command() -> Command {
    let cmd = Command::new("factor")
        .about("Print the left-factored grammar")
        .after_help(
            r#"EXAMPLES:
  llkit factor grammar.json
  llkit factor grammar.json -vvv      # trace every grouping swap"#,
        )
        .arg(no_factor_arg().hide(true));

    with_common_args(cmd)
}

/// Print per-rule FIRST sets.
pub fn first_command() -> Command {
    let cmd = Command::new("first")
        .about("Print the FIRST set of every rule")
        .after_help(
            r#"EXAMPLES:
  llkit first grammar.json
  llkit first grammar.json --no-factor"#,
        )
        .arg(no_factor_arg());

    with_common_args(cmd)
}

/// Print decision tables.
pub fn decisions_command() -> Command {
    let cmd = Command::new("decisions")
        .about("Print the branch FIRST sets of every decision point")
        .after_help(
            r#"EXAMPLES:
  llkit decisions grammar.json"#,
        )
        .arg(no_factor_arg());

    with_common_args(cmd)
}
