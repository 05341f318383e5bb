use pretty_assertions::assert_eq;
use regexlab::catalog::{self, PresetKind};
use regexlab::report::Outcome;
use regexlab::EngineParams;

use crate::utils::Checker;

#[test]
fn test_catalog_examples() {
    let checker = Checker::new();

    for entry in catalog::entries() {
        checker.check_valid(entry.kind.name(), "", entry.example, true);
        checker.check_valid(entry.kind.name(), "", "", false);
    }
}

#[test]
fn test_full_match_required() {
    let checker = Checker::new();

    checker.check_valid("postal", "", "75001", true);
    checker.check_valid("postal", "", "75001-Paris", false);
    checker.check_valid("postal", "", " 75001", false);
    checker.check_valid("postal", "", "75001\n", false);

    checker.check_valid("email", "", "josias@gmail.com", true);
    checker.check_valid("email", "", "mail: josias@gmail.com", false);

    checker.check_valid("custom", r"\d+", "123", true);
    checker.check_valid("custom", r"\d+", "123a", false);
    checker.check_valid("custom", r"\d+|\d+a", "123a", true);
}

#[test]
fn test_custom_pattern_flags() {
    let checker = Checker::new();

    // No flags are applied on validation, but inline flags can be used.
    checker.check_valid("custom", "abc", "ABC", false);
    checker.check_valid("custom", "(?i)abc", "ABC", true);
    checker.check_valid("custom", "a.c", "a\nc", false);
    checker.check_valid("custom", "(?s)a.c", "a\nc", true);
}

#[test]
fn test_unicode_values() {
    let checker = Checker::new();

    checker.check_valid("email", "", "élodie@exemple.fr", true);
    checker.check_valid("custom", r"\w+", "été", true);
    checker.check_valid("custom", r"...", "été", true);
}

#[test]
fn test_invalid_custom_patterns() {
    let checker = Checker::new();

    for pattern in ["[", "(", "a)", "*", r"\", r"\p{Unknown}", "a{3,2}", r"(?<=a)b"] {
        let report = checker.validation_report("custom", pattern, "anything");
        assert_eq!(report.outcome, Outcome::InvalidPattern, "pattern {pattern}");
        assert_eq!(report.pattern_used, pattern);
        let diagnostic = report.diagnostic.unwrap();
        assert!(diagnostic.starts_with("Pattern error: "), "{diagnostic}");
        assert!(diagnostic.len() > "Pattern error: ".len());
        assert_eq!(report.feedback_title, None);
        assert_eq!(report.feedback_text, None);
    }
}

#[test]
fn test_report_feedback() {
    let checker = Checker::new();

    for entry in catalog::entries() {
        let report = checker.validation_report(entry.kind.name(), "", entry.example);
        assert_eq!(report.outcome, Outcome::Matched);
        assert_eq!(report.pattern_used, entry.pattern);
        assert_eq!(report.feedback_title, Some(entry.success.title));
        assert_eq!(report.feedback_text, Some(entry.success.text));

        let report = checker.validation_report(entry.kind.name(), "", "?");
        assert_eq!(report.outcome, Outcome::NotMatched);
        assert_eq!(report.feedback_title, Some(entry.failure.title));
        assert_eq!(report.feedback_text, Some(entry.failure.text));
    }

    let report = checker.validation_report("custom", "a+", "aa");
    assert_eq!(report.outcome, Outcome::Matched);
    assert_eq!(report.feedback_title, Some(catalog::CUSTOM_SUCCESS.title));

    let report = checker.validation_report("custom", "a+", "b");
    assert_eq!(report.outcome, Outcome::NotMatched);
    assert_eq!(report.feedback_text, Some(catalog::CUSTOM_FAILURE.text));
}

#[test]
fn test_unknown_kind() {
    let engine = regexlab::Engine::new();

    assert!(engine.validate("", "", "").is_none());
    assert!(engine.validate("postal_code", "", "75001").is_none());
    assert!(engine.validate("CUSTOM", "a", "a").is_none());
    assert!(PresetKind::from_name("iban").is_none());
}

#[test]
fn test_limits() {
    let checker = Checker::with_params(EngineParams::default().nest_limit(3));
    checker.check_valid("custom", "((a))", "a", true);
    let report = checker.validation_report("custom", "((((a))))", "a");
    assert_eq!(report.outcome, Outcome::InvalidPattern);

    let checker = Checker::with_params(EngineParams::default().size_limit(1000));
    let report = checker.validation_report("custom", r"\w{100}", "a");
    assert_eq!(report.outcome, Outcome::InvalidPattern);
    assert_eq!(
        report.diagnostic.as_deref(),
        Some("Pattern error: compiled pattern exceeds size limit of 1000 bytes")
    );
}

#[test]
fn test_limits_do_not_apply_to_catalog() {
    for params in [
        EngineParams::default().nest_limit(1),
        EngineParams::default().size_limit(1000),
    ] {
        let checker = Checker::with_params(params);
        for entry in catalog::entries() {
            checker.check_valid(entry.kind.name(), "", entry.example, true);
            checker.check_valid(entry.kind.name(), "", "?", false);
        }
    }
}
