//! Flat reports of the operations, meant to be handed to a presentation layer.
//!
//! The results of the [`crate::Engine`] operations are typed values. Presentation
//! layers (the CLI, a web page, ...) usually want a flat structure instead, where
//! every field is either set or absent. Those reports are that structure, and can be
//! serialized when the `serde` feature is enabled.
//!
//! An error in a report is always exclusive with a result: a report for an invalid
//! pattern never contains matches nor an output text.
use crate::extractor::MatchRecord;
use crate::regex::Error;
use crate::transformer::TransformResult;
use crate::validator::{Validation, ValidationOutcome};

/// Verdict of a validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Outcome {
    /// The whole value matches the pattern.
    Matched,
    /// The value does not match the pattern.
    NotMatched,
    /// The pattern could not be compiled.
    InvalidPattern,
}

/// Report of a validation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    /// Name of the kind of validation.
    pub kind: &'static str,
    /// Verdict.
    pub outcome: Outcome,
    /// Pattern the value was checked against.
    pub pattern_used: String,
    /// Diagnostic of the pattern, only set if the pattern is invalid.
    pub diagnostic: Option<String>,
    /// Title of the feedback, unset if the pattern is invalid.
    pub feedback_title: Option<&'static str>,
    /// Text of the feedback, unset if the pattern is invalid.
    pub feedback_text: Option<&'static str>,
}

impl From<&Validation> for ValidationReport {
    fn from(validation: &Validation) -> Self {
        let outcome = match validation.outcome {
            ValidationOutcome::Matched => Outcome::Matched,
            ValidationOutcome::NotMatched => Outcome::NotMatched,
            ValidationOutcome::InvalidPattern(_) => Outcome::InvalidPattern,
        };
        let feedback = validation.feedback();

        Self {
            kind: validation.kind.name(),
            outcome,
            pattern_used: validation.pattern_used.clone(),
            diagnostic: validation.outcome.diagnostic(),
            feedback_title: feedback.map(|v| v.title),
            feedback_text: feedback.map(|v| v.text),
        }
    }
}

/// Report of a single occurrence found in an extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchReport {
    /// Matched text.
    #[cfg_attr(feature = "serde", serde(rename = "match"))]
    pub text: String,
    /// Captured groups, `None` for groups that did not participate.
    pub groups: Vec<Option<String>>,
    /// Offset of the start of the match, in characters.
    pub start: usize,
    /// Offset of the end of the match, in characters.
    pub end: usize,
}

impl From<MatchRecord> for MatchReport {
    fn from(record: MatchRecord) -> Self {
        let MatchRecord {
            text,
            groups,
            start,
            end,
            span: _,
        } = record;

        Self {
            text,
            groups,
            start,
            end,
        }
    }
}

/// Report of an extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExtractionReport {
    /// Occurrences found, in the order of the text.
    pub matches: Vec<MatchReport>,
    /// Diagnostic of the pattern, only set if the pattern is invalid.
    pub error: Option<String>,
}

impl From<Result<Vec<MatchRecord>, Error>> for ExtractionReport {
    fn from(res: Result<Vec<MatchRecord>, Error>) -> Self {
        match res {
            Ok(records) => Self {
                matches: records.into_iter().map(MatchReport::from).collect(),
                error: None,
            },
            Err(err) => Self {
                matches: Vec::new(),
                error: Some(err.diagnostic()),
            },
        }
    }
}

/// Report of a transformation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TransformationReport {
    /// Text after substitution, unset if the pattern is invalid.
    pub output_text: Option<String>,
    /// Number of substitutions performed.
    pub count: usize,
    /// Diagnostic of the pattern, only set if the pattern is invalid.
    pub error: Option<String>,
}

impl From<Result<TransformResult, Error>> for TransformationReport {
    fn from(res: Result<TransformResult, Error>) -> Self {
        match res {
            Ok(TransformResult { output_text, count }) => Self {
                output_text: Some(output_text),
                count,
                error: None,
            },
            Err(err) => Self {
                output_text: None,
                count: 0,
                error: Some(err.diagnostic()),
            },
        }
    }
}
