use std::io::IsTerminal;

use codespan_reporting::{
    files::SimpleFile,
    term::{
        self,
        termcolor::{ColorChoice, StandardStream},
    },
};
use regexlab::regex::Error;
use regexlab::report::{ExtractionReport, TransformationReport, ValidationReport};
use regexlab::{catalog, MatchRecord, TransformResult, Validation, ValidationOutcome};

/// Render an invalid pattern on stderr.
pub fn emit_pattern_error(err: &Error) {
    let color_choice = if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();

    let files = SimpleFile::new("pattern", err.pattern());
    let mut lock = writer.lock();
    if let Err(e) = term::emit(&mut lock, &config, &files, &err.to_diagnostic()) {
        eprintln!("cannot emit diagnostics: {e}");
        eprintln!("{}", err.diagnostic());
    }
}

fn print_json(res: serde_json::Result<String>) {
    match res {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("Cannot serialize the report: {err}"),
    }
}

pub fn print_validation(validation: &Validation, json: bool) {
    if json {
        let report = ValidationReport::from(validation);
        print_json(serde_json::to_string_pretty(&report));
        return;
    }

    if let ValidationOutcome::InvalidPattern(err) = &validation.outcome {
        emit_pattern_error(err);
        return;
    }
    if let Some(feedback) = validation.feedback() {
        println!("{}", feedback.title);
        println!("    {}", feedback.text);
    }
    println!("    pattern: {}", validation.pattern_used);
}

pub fn print_extraction(res: Result<Vec<MatchRecord>, Error>, json: bool) {
    if json {
        let report = ExtractionReport::from(res);
        print_json(serde_json::to_string_pretty(&report));
        return;
    }

    match res {
        Ok(records) => {
            for record in records {
                println!("{}..{}: {}", record.start, record.end, record.text);
                for (index, group) in record.groups.iter().enumerate() {
                    match group {
                        Some(group) => println!("    ${}: {group}", index + 1),
                        None => println!("    ${}: (none)", index + 1),
                    }
                }
            }
        }
        Err(err) => emit_pattern_error(&err),
    }
}

pub fn print_transformation(res: Result<TransformResult, Error>, json: bool) {
    if json {
        let report = TransformationReport::from(res);
        print_json(serde_json::to_string_pretty(&report));
        return;
    }

    match res {
        Ok(TransformResult { output_text, count }) => {
            print!("{output_text}");
            eprintln!("substitutions: {count}");
        }
        Err(err) => emit_pattern_error(&err),
    }
}

pub fn print_presets(json: bool) {
    if json {
        let presets: Vec<_> = catalog::entries()
            .map(|entry| {
                serde_json::json!({
                    "kind": entry.kind.name(),
                    "pattern": entry.pattern,
                    "example": entry.example,
                })
            })
            .collect();
        print_json(serde_json::to_string_pretty(&presets));
        return;
    }

    for entry in catalog::entries() {
        println!("{}", entry.kind);
        println!("    pattern: {}", entry.pattern);
        println!("    example: {}", entry.example);
    }
}
