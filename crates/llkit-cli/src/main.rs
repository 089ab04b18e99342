#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
mod colors;
mod commands;
mod logger;

use cli::{CheckParams, DecisionsParams, FactorParams, FirstParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    if let Some((_, m)) = matches.subcommand() {
        logger::init(m.get_count("verbose"));
    }

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("factor", m)) => {
            let params = FactorParams::from_matches(m);
            commands::factor::run(params.into());
        }
        Some(("first", m)) => {
            let params = FirstParams::from_matches(m);
            commands::first::run(params.into());
        }
        Some(("decisions", m)) => {
            let params = DecisionsParams::from_matches(m);
            commands::decisions::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
