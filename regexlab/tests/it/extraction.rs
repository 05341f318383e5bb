use pretty_assertions::assert_eq;
use regexlab::report::MatchReport;
use regexlab::FlagSet;

use crate::utils::Checker;

#[test]
fn test_extract_simple() {
    let checker = Checker::new();

    checker.check_extract("a1 b2 c3", r"\d", &[("1", 1, 2), ("2", 4, 5), ("3", 7, 8)]);
    checker.check_extract("no digits", r"\d", &[]);
    checker.check_extract("", r"\d", &[]);
    checker.check_extract(
        "mail a@b.fr or c@d.com",
        r"\w+@\w+\.\w+",
        &[("a@b.fr", 5, 11), ("c@d.com", 15, 22)],
    );
}

#[test]
fn test_extract_groups() {
    let checker = Checker::new();

    let report =
        checker.extraction_report("2024-05-01 and 1999-12", r"(\d{4})-(\d{2})(?:-(\d{2}))?");
    assert_eq!(report.error, None);
    assert_eq!(
        report.matches,
        vec![
            MatchReport {
                text: "2024-05-01".to_owned(),
                groups: vec![
                    Some("2024".to_owned()),
                    Some("05".to_owned()),
                    Some("01".to_owned())
                ],
                start: 0,
                end: 10,
            },
            MatchReport {
                text: "1999-12".to_owned(),
                groups: vec![Some("1999".to_owned()), Some("12".to_owned()), None],
                start: 15,
                end: 22,
            },
        ]
    );

    // Named groups are reported by position.
    let report = checker.extraction_report("k=v", r"(?P<key>\w)=(?P<value>\w)");
    assert_eq!(
        report.matches[0].groups,
        vec![Some("k".to_owned()), Some("v".to_owned())]
    );
}

#[test]
fn test_extract_flags() {
    let text = "First line\nsecond Line\nthird LINE";

    Checker::new().check_extract(text, "line", &[("line", 6, 10)]);
    Checker::new()
        .flags(FlagSet::CASE_INSENSITIVE)
        .check_extract(text, "line", &[("line", 6, 10), ("Line", 18, 22), ("LINE", 29, 33)]);

    Checker::new().check_extract(text, r"^\w+", &[("First", 0, 5)]);
    Checker::new().flags(FlagSet::MULTILINE).check_extract(
        text,
        r"^\w+",
        &[("First", 0, 5), ("second", 11, 17), ("third", 23, 28)],
    );

    Checker::new().check_extract(text, "line.second", &[]);
    Checker::new()
        .flags(FlagSet::DOT_ALL)
        .check_extract(text, "line.second", &[("line\nsecond", 6, 17)]);

    Checker::new()
        .flags(FlagSet::compose(true, true, true))
        .check_extract(text, "^second.*$", &[("second Line\nthird LINE", 11, 33)]);
}

#[test]
fn test_extract_offsets_in_chars() {
    let checker = Checker::new();

    checker.check_extract("Ça coûte 5€", r"\d€", &[("5€", 9, 11)]);
    checker.check_extract("日本語", "本", &[("本", 1, 2)]);
}

#[test]
fn test_extract_invalid_pattern() {
    let checker = Checker::new();

    let report = checker.extraction_report("abc", "a(b");
    assert!(report.matches.is_empty());
    let error = report.error.unwrap();
    assert!(error.starts_with("Pattern error: "));
    assert!(error.contains("unclosed group"));
}
