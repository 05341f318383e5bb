use clap::{Arg, ArgAction, ArgMatches, Command};
use regexlab::FlagSet;

pub fn flags_from_args(args: &ArgMatches) -> FlagSet {
    FlagSet::compose(
        args.get_flag("case_insensitive"),
        args.get_flag("multiline"),
        args.get_flag("dot_all"),
    )
}

pub fn add_flags_args(command: Command) -> Command {
    command
        .next_help_heading("Pattern flags")
        .arg(
            Arg::new("case_insensitive")
                .short('i')
                .long("ignore-case")
                .action(ArgAction::SetTrue)
                .help("Compare characters case-insensitively"),
        )
        .arg(
            Arg::new("multiline")
                .short('m')
                .long("multiline")
                .action(ArgAction::SetTrue)
                .help("Make ^ and $ match at the start and end of every line"),
        )
        .arg(
            Arg::new("dot_all")
                .short('s')
                .long("dot-all")
                .action(ArgAction::SetTrue)
                .help("Make . also match a newline"),
        )
        .next_help_heading(None)
}
