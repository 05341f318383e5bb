use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use regexlab::{FlagSet, PresetKind};

mod engine;
pub use engine::EngineOptions;
mod flags;
mod input;
pub use input::InputOptions;

#[derive(Debug)]
pub enum ExecutionMode {
    /// Check a whole value against a preset or a custom pattern
    Validate(ValidateExecution),

    /// List every occurrence of a pattern in a text
    Extract(ExtractExecution),

    /// Replace every occurrence of a pattern in a text
    Transform(TransformExecution),

    /// List the validation presets.
    ListPresets,
}

impl ExecutionMode {
    pub fn from_args(name: &str, mut args: ArgMatches) -> Result<Self, String> {
        match name {
            "validate" => Ok(Self::Validate(ValidateExecution::from_args(&mut args))),
            "extract" => Ok(Self::Extract(ExtractExecution::from_args(&mut args))),
            "transform" => Ok(Self::Transform(TransformExecution::from_args(&mut args))),
            "list-presets" => Ok(Self::ListPresets),
            _ => Err(format!("unknown subcommand {name}")),
        }
    }
}

/// Options shared by every subcommand.
#[derive(Debug)]
pub struct GlobalOptions {
    pub json: bool,
    pub log_level: Option<String>,
    pub engine_options: EngineOptions,
}

impl GlobalOptions {
    pub fn from_args(args: &mut ArgMatches) -> Self {
        Self {
            json: args.get_flag("json"),
            log_level: args.remove_one("log_level"),
            engine_options: EngineOptions::from_args(args),
        }
    }
}

pub fn build_command() -> Command {
    let mut command = command!().subcommand_required(true);

    command = command
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Print the results as JSON"),
        )
        .arg(
            Arg::new("log_level")
                .long("log-level")
                .global(true)
                .value_name("DIRECTIVES")
                .value_parser(value_parser!(String))
                .help("Filter of the logs written on stderr")
                .long_help(
                    "Filter of the logs written on stderr, for example 'debug' or \
                    'regexlab=trace'.\n\
                    If not set, the RUST_LOG environment variable is used, and \
                    defaults to 'warn'.",
                ),
        );
    command = engine::add_engine_args(command);

    command = command
        .subcommand(build_validate_subcommand())
        .subcommand(build_extract_subcommand())
        .subcommand(build_transform_subcommand())
        .subcommand(
            Command::new("list-presets").about("Display the validation presets and their pattern"),
        );

    command
}

#[derive(Debug)]
pub struct ValidateExecution {
    pub kind: PresetKind,
    pub custom_pattern: String,
    pub input_options: InputOptions,
}

impl ValidateExecution {
    pub fn from_args(args: &mut ArgMatches) -> Self {
        Self {
            kind: args
                .remove_one::<PresetKind>("kind")
                .unwrap_or(PresetKind::Custom),
            custom_pattern: args.remove_one("pattern").unwrap_or_default(),
            input_options: InputOptions::from_args(args),
        }
    }
}

fn build_validate_subcommand() -> Command {
    let mut command = Command::new("validate")
        .about("Check that a whole value matches a preset or a custom pattern")
        .override_usage("regexlab validate [OPTIONS] --kind <KIND> [VALUE | -f FILE]");

    command = command
        .arg(
            Arg::new("kind")
                .short('k')
                .long("kind")
                .value_name("email|phone|postal|date|custom")
                .value_parser(parse_kind)
                .required(true)
                .help("Kind of validation to apply"),
        )
        .arg(
            Arg::new("pattern")
                .short('e')
                .long("pattern")
                .value_name("PATTERN")
                .value_parser(value_parser!(String))
                .required_if_eq("kind", "custom")
                .allow_hyphen_values(true)
                .help("Pattern the value must match, for the custom kind")
                .long_help(
                    "Pattern the value must match, for the custom kind.\n\
                    The whole value must match the pattern, without having to add \
                    anchors to it.\n\
                    This is ignored for other kinds.",
                ),
        );
    command = input::add_input_args(command, "Value to validate");

    command
}

#[derive(Debug)]
pub struct ExtractExecution {
    pub pattern: String,
    pub flags: FlagSet,
    pub input_options: InputOptions,
}

impl ExtractExecution {
    pub fn from_args(args: &mut ArgMatches) -> Self {
        Self {
            pattern: args.remove_one("pattern").unwrap_or_default(),
            flags: flags::flags_from_args(args),
            input_options: InputOptions::from_args(args),
        }
    }
}

fn build_extract_subcommand() -> Command {
    let mut command = Command::new("extract")
        .about("List every occurrence of a pattern in a text")
        .override_usage("regexlab extract [OPTIONS] -e <PATTERN> [TEXT | -f FILE]");

    command = command.arg(pattern_arg());
    command = flags::add_flags_args(command);
    command = input::add_input_args(command, "Text to search in");

    command
}

#[derive(Debug)]
pub struct TransformExecution {
    pub pattern: String,
    pub template: String,
    pub flags: FlagSet,
    pub input_options: InputOptions,
}

impl TransformExecution {
    pub fn from_args(args: &mut ArgMatches) -> Self {
        Self {
            pattern: args.remove_one("pattern").unwrap_or_default(),
            template: args.remove_one("template").unwrap_or_default(),
            flags: flags::flags_from_args(args),
            input_options: InputOptions::from_args(args),
        }
    }
}

fn build_transform_subcommand() -> Command {
    let mut command = Command::new("transform")
        .about("Replace every occurrence of a pattern in a text")
        .override_usage(
            "regexlab transform [OPTIONS] -e <PATTERN> -r <TEMPLATE> [TEXT | -f FILE]",
        );

    command = command.arg(pattern_arg()).arg(
        Arg::new("template")
            .short('r')
            .long("replace")
            .value_name("TEMPLATE")
            .value_parser(value_parser!(String))
            .required(true)
            .allow_hyphen_values(true)
            .help("Replacement of each occurrence")
            .long_help(
                "Replacement of each occurrence.\n\n\
                Captured groups can be referenced with $1, ${1} or ${name}. \
                Use $$ for a literal dollar sign.",
            ),
    );
    command = flags::add_flags_args(command);
    command = input::add_input_args(command, "Text to transform");

    command
}

fn pattern_arg() -> Arg {
    Arg::new("pattern")
        .short('e')
        .long("pattern")
        .value_name("PATTERN")
        .value_parser(value_parser!(String))
        .required(true)
        .allow_hyphen_values(true)
        .help("Pattern to search for")
}

fn parse_kind(kind: &str) -> Result<PresetKind, String> {
    PresetKind::from_name(kind).ok_or_else(|| "invalid value".to_owned())
}
