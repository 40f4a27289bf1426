//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use haystack_typegen::TypeGuardPolicy;

use super::ColorChoice;
use super::args::DEFAULT_OUTPUT;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub defs: Vec<String>,
    pub namespace: PathBuf,
    pub file: PathBuf,
    pub type_guards: TypeGuardPolicy,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            defs: m
                .get_many::<String>("defs")
                .map(|defs| defs.cloned().collect())
                .unwrap_or_default(),
            namespace: m
                .get_one::<PathBuf>("namespace")
                .cloned()
                .unwrap_or_default(),
            file: m
                .get_one::<PathBuf>("file")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            type_guards: parse_type_guards(m),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            defs: p.defs,
            namespace: p.namespace,
            file: p.file,
            type_guards: p.type_guards,
            color: p.color.should_colorize(),
        }
    }
}

pub struct KindsParams;

impl KindsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

fn parse_type_guards(m: &ArgMatches) -> TypeGuardPolicy {
    m.get_one::<String>("type_guards")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
