use regexlab::report::{ExtractionReport, TransformationReport, ValidationReport};
use regexlab::{Engine, EngineParams, FlagSet, ValidationOutcome};

/// Runs operations on an engine and checks their results.
pub struct Checker {
    engine: Engine,
    flags: FlagSet,
}

impl Checker {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            flags: FlagSet::empty(),
        }
    }

    pub fn with_params(params: EngineParams) -> Self {
        Self {
            engine: Engine::with_params(params),
            flags: FlagSet::empty(),
        }
    }

    pub fn flags(mut self, flags: FlagSet) -> Self {
        self.flags = flags;
        self
    }

    #[track_caller]
    pub fn check_valid(&self, kind: &str, custom_pattern: &str, value: &str, expected: bool) {
        let validation = self
            .engine
            .validate(kind, custom_pattern, value)
            .unwrap_or_else(|| panic!("kind {kind} not recognized"));

        match &validation.outcome {
            ValidationOutcome::Matched => {
                assert!(expected, "{value:?} should not be valid for {kind}");
            }
            ValidationOutcome::NotMatched => {
                assert!(!expected, "{value:?} should be valid for {kind}");
            }
            ValidationOutcome::InvalidPattern(err) => {
                panic!("pattern {custom_pattern:?} should be valid: {err}")
            }
        }
    }

    #[track_caller]
    pub fn validation_report(
        &self,
        kind: &str,
        custom_pattern: &str,
        value: &str,
    ) -> ValidationReport {
        let validation = self.engine.validate(kind, custom_pattern, value).unwrap();
        ValidationReport::from(&validation)
    }

    /// Check the extraction of the pattern returns the expected matches, as
    /// `(match, start, end)`.
    #[track_caller]
    pub fn check_extract(&self, text: &str, pattern: &str, expected: &[(&str, usize, usize)]) {
        let records = self.engine.extract_all(text, pattern, self.flags).unwrap();
        let records: Vec<_> = records
            .iter()
            .map(|r| (r.text.as_str(), r.start, r.end))
            .collect();
        assert_eq!(records, expected);
    }

    #[track_caller]
    pub fn extraction_report(&self, text: &str, pattern: &str) -> ExtractionReport {
        ExtractionReport::from(self.engine.extract_all(text, pattern, self.flags))
    }

    #[track_caller]
    pub fn check_substitute(
        &self,
        text: &str,
        pattern: &str,
        template: &str,
        expected: &str,
        expected_count: usize,
    ) {
        let res = self
            .engine
            .substitute_all(text, pattern, template, self.flags)
            .unwrap();
        assert_eq!(res.output_text, expected);
        assert_eq!(res.count, expected_count);
    }

    #[track_caller]
    pub fn transformation_report(
        &self,
        text: &str,
        pattern: &str,
        template: &str,
    ) -> TransformationReport {
        TransformationReport::from(
            self.engine
                .substitute_all(text, pattern, template, self.flags),
        )
    }
}
