use clap::{value_parser, Arg, ArgMatches, Command};
use regexlab::EngineParams;

#[derive(Debug)]
pub struct EngineOptions {
    pub nest_limit: Option<u32>,
    pub size_limit: Option<usize>,
}

impl EngineOptions {
    pub fn from_args(args: &mut ArgMatches) -> Self {
        Self {
            nest_limit: args.remove_one("nest_limit"),
            size_limit: args.remove_one("size_limit"),
        }
    }

    pub fn to_params(&self) -> EngineParams {
        let mut params = EngineParams::default();
        if let Some(limit) = self.nest_limit {
            params = params.nest_limit(limit);
        }
        if let Some(limit) = self.size_limit {
            params = params.size_limit(limit);
        }
        params
    }
}

pub fn add_engine_args(command: Command) -> Command {
    command
        .next_help_heading("Engine options")
        .arg(
            Arg::new("nest_limit")
                .long("nest-limit")
                .global(true)
                .value_name("NUMBER")
                .value_parser(value_parser!(u32))
                .help("Maximum nesting depth of a pattern"),
        )
        .arg(
            Arg::new("size_limit")
                .long("size-limit")
                .global(true)
                .value_name("BYTES")
                .value_parser(value_parser!(usize))
                .help("Maximum size of a compiled pattern"),
        )
        .next_help_heading(None)
}
