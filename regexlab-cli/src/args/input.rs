use std::io::Read;
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};

#[derive(Debug)]
pub struct InputOptions {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl InputOptions {
    pub fn from_args(args: &mut ArgMatches) -> Self {
        Self {
            text: args.remove_one("input"),
            file: args.remove_one("input_file"),
        }
    }

    /// Read the input, from the argument, the file or stdin, in that order.
    pub fn read(&self) -> Result<String, String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .map_err(|err| format!("Cannot read {}: {err}", path.display())),
            None => {
                let mut contents = String::new();
                let _r = std::io::stdin()
                    .read_to_string(&mut contents)
                    .map_err(|err| format!("Cannot read stdin: {err}"))?;
                Ok(contents)
            }
        }
    }

    /// Read a single value.
    ///
    /// When read from a file or stdin, the line terminator ending the value is
    /// removed.
    pub fn read_value(&self) -> Result<String, String> {
        let mut value = self.read()?;
        if self.text.is_none() {
            if let Some(line) = value.strip_suffix('\n') {
                let len = line.strip_suffix('\r').unwrap_or(line).len();
                value.truncate(len);
            }
        }
        Ok(value)
    }
}

pub fn add_input_args(command: Command, help: &'static str) -> Command {
    command
        .arg(
            Arg::new("input_file")
                .short('f')
                .long("file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("input")
                .help("Read the input from a file"),
        )
        .arg(
            Arg::new("input")
                .value_parser(value_parser!(String))
                .help(help)
                .long_help(format!(
                    "{help}.\n\
                    If neither this argument nor --file is given, the input is read \
                    from stdin."
                )),
        )
}
