//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields, ignoring hidden ones
//! - `From<*Params>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::decisions::DecisionsArgs;
use crate::commands::factor::FactorArgs;
use crate::commands::first::FirstArgs;

pub struct CheckParams {
    pub grammar_path: PathBuf,
    pub no_factor: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            no_factor: m.get_flag("no_factor"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            factor: !p.no_factor,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FactorParams {
    pub grammar_path: PathBuf,
    pub color: ColorChoice,
    // Note: no_factor is parsed but not extracted (unified flags)
}

impl FactorParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            color: parse_color(m),
        }
    }
}

impl From<FactorParams> for FactorArgs {
    fn from(p: FactorParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FirstParams {
    pub grammar_path: PathBuf,
    pub no_factor: bool,
    pub color: ColorChoice,
}

impl FirstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            no_factor: m.get_flag("no_factor"),
            color: parse_color(m),
        }
    }
}

impl From<FirstParams> for FirstArgs {
    fn from(p: FirstParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            factor: !p.no_factor,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DecisionsParams {
    pub grammar_path: PathBuf,
    pub no_factor: bool,
    pub color: ColorChoice,
}

impl DecisionsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            grammar_path: grammar_path(m),
            no_factor: m.get_flag("no_factor"),
            color: parse_color(m),
        }
    }
}

impl From<DecisionsParams> for DecisionsArgs {
    fn from(p: DecisionsParams) -> Self {
        Self {
            grammar_path: p.grammar_path,
            factor: !p.no_factor,
            color: p.color.should_colorize(),
        }
    }
}

fn grammar_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("grammar_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
