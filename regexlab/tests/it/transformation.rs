use pretty_assertions::assert_eq;
use regexlab::FlagSet;

use crate::utils::Checker;

#[test]
fn test_substitute_simple() {
    let checker = Checker::new();

    checker.check_substitute("aaa", "a", "b", "bbb", 3);
    checker.check_substitute("xyz", "a", "b", "xyz", 0);
    checker.check_substitute("", "a", "b", "", 0);
    checker.check_substitute("a.b.c", r"\.", "", "abc", 2);
    checker.check_substitute("  trim  me  ", r"^\s+|\s+$", "", "trim  me", 2);
}

#[test]
fn test_substitute_groups() {
    let checker = Checker::new();

    checker.check_substitute(
        "Doe, John; Smith, Jane",
        r"(\w+), (\w+)",
        "$2 $1",
        "John Doe; Jane Smith",
        2,
    );
    checker.check_substitute(
        "31/12/2025",
        r"(?P<d>\d{2})/(?P<m>\d{2})/(?P<y>\d{4})",
        "${y}-${m}-${d}",
        "2025-12-31",
        1,
    );
    checker.check_substitute("cost 5", r"(\d)", "$$${1}0", "cost $50", 1);
}

#[test]
fn test_substitute_flags() {
    Checker::new().check_substitute("Hello hello", "hello", "bye", "Hello bye", 1);
    Checker::new()
        .flags(FlagSet::CASE_INSENSITIVE)
        .check_substitute("Hello hello", "hello", "bye", "bye bye", 2);

    Checker::new()
        .flags(FlagSet::MULTILINE)
        .check_substitute("a;\nb;\n", ";$", "", "a\nb\n", 2);
    Checker::new().check_substitute("a;\nb;\n", ";$", "", "a;\nb;\n", 0);

    Checker::new()
        .flags(FlagSet::DOT_ALL)
        .check_substitute("/*\ncomment\n*/code", r"/\*.*?\*/", "", "code", 1);
}

#[test]
fn test_substitute_invalid_pattern() {
    let checker = Checker::new();

    let report = checker.transformation_report("aaa", "a{2", "b");
    assert_eq!(report.output_text, None);
    assert_eq!(report.count, 0);
    assert!(report.error.unwrap().starts_with("Pattern error: "));

    let report = checker.transformation_report("aaa", "a", "b");
    assert_eq!(report.output_text.as_deref(), Some("bbb"));
    assert_eq!(report.count, 3);
    assert_eq!(report.error, None);
}
