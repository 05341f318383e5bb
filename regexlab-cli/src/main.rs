//! CLI to validate, extract and transform text with regular expressions.
//!
//! Each invocation runs a single operation of the [`regexlab`] engine and renders
//! its result, either for humans or as JSON.
use std::process::ExitCode;

use regexlab::{Engine, ValidationOutcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
use args::{
    ExecutionMode, ExtractExecution, GlobalOptions, TransformExecution, ValidateExecution,
};
mod output;

// Used in integration tests, not in the binary.
#[cfg(test)]
use assert_cmd as _;
#[cfg(test)]
use predicates as _;

/// Exit code of an invalid pattern.
const INVALID_PATTERN: u8 = 2;

fn main() -> ExitCode {
    let mut args = args::build_command().get_matches();
    let Some((name, mut sub_args)) = args.remove_subcommand() else {
        return ExitCode::FAILURE;
    };

    let options = GlobalOptions::from_args(&mut sub_args);
    init_logging(options.log_level.as_deref());

    let mode = match ExecutionMode::from_args(&name, sub_args) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    debug!(?mode, "running");

    let engine = Engine::with_params(options.engine_options.to_params());
    match mode {
        ExecutionMode::Validate(exec) => validate(&engine, &exec, options.json),
        ExecutionMode::Extract(exec) => extract(&engine, &exec, options.json),
        ExecutionMode::Transform(exec) => transform(&engine, &exec, options.json),
        ExecutionMode::ListPresets => {
            output::print_presets(options.json);
            ExitCode::SUCCESS
        }
    }
}

fn init_logging(log_level: Option<&str>) {
    let filter = match log_level {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn validate(engine: &Engine, exec: &ValidateExecution, json: bool) -> ExitCode {
    let value = match exec.input_options.read_value() {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let validation = engine.validate_kind(exec.kind, &exec.custom_pattern, &value);
    output::print_validation(&validation, json);

    match validation.outcome {
        ValidationOutcome::Matched => ExitCode::SUCCESS,
        ValidationOutcome::NotMatched => ExitCode::FAILURE,
        ValidationOutcome::InvalidPattern(_) => ExitCode::from(INVALID_PATTERN),
    }
}

fn extract(engine: &Engine, exec: &ExtractExecution, json: bool) -> ExitCode {
    let text = match exec.input_options.read() {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let res = engine.extract_all(&text, &exec.pattern, exec.flags);
    let exit_code = exit_code(res.is_ok());
    output::print_extraction(res, json);
    exit_code
}

fn transform(engine: &Engine, exec: &TransformExecution, json: bool) -> ExitCode {
    let text = match exec.input_options.read() {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let res = engine.substitute_all(&text, &exec.pattern, &exec.template, exec.flags);
    let exit_code = exit_code(res.is_ok());
    output::print_transformation(res, json);
    exit_code
}

fn exit_code(pattern_is_valid: bool) -> ExitCode {
    if pattern_is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(INVALID_PATTERN)
    }
}
