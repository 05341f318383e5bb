use tracing::debug;

use crate::catalog::{self, Feedback, PresetKind, CUSTOM_FAILURE, CUSTOM_SUCCESS};
use crate::flags::FlagSet;
use crate::params::EngineParams;
use crate::regex::{Error, Regex};

/// Verdict of a validation.
#[derive(Clone, Debug)]
pub enum ValidationOutcome {
    /// The whole value matches the pattern.
    Matched,

    /// The value does not match the pattern, or only partially.
    NotMatched,

    /// The custom pattern could not be compiled.
    InvalidPattern(Error),
}

impl ValidationOutcome {
    /// Diagnostic of the invalid pattern, if the pattern was invalid.
    ///
    /// See [`Error::diagnostic`].
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Self::InvalidPattern(err) => Some(err.diagnostic()),
            Self::Matched | Self::NotMatched => None,
        }
    }
}

/// Result of the validation of a value.
#[derive(Clone, Debug)]
pub struct Validation {
    /// Kind of validation that was applied.
    pub kind: PresetKind,

    /// Pattern the value was checked against.
    ///
    /// This is the catalog pattern for catalog kinds, and the caller pattern for
    /// [`PresetKind::Custom`].
    pub pattern_used: String,

    /// Verdict of the validation.
    pub outcome: ValidationOutcome,
}

impl Validation {
    /// Did the value match.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self.outcome, ValidationOutcome::Matched)
    }

    /// Explanation to give to the user.
    ///
    /// This is `None` when the pattern was invalid: the diagnostic of the pattern must
    /// be given instead.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        let matched = match self.outcome {
            ValidationOutcome::Matched => true,
            ValidationOutcome::NotMatched => false,
            ValidationOutcome::InvalidPattern(_) => return None,
        };

        Some(match (catalog::lookup(self.kind), matched) {
            (Some(entry), true) => entry.success,
            (Some(entry), false) => entry.failure,
            (None, true) => CUSTOM_SUCCESS,
            (None, false) => CUSTOM_FAILURE,
        })
    }
}

pub(crate) fn validate(
    kind: PresetKind,
    custom_pattern: &str,
    value: &str,
    params: &EngineParams,
) -> Validation {
    let (pattern_used, outcome) = match catalog::lookup_compiled(kind) {
        Some((entry, compiled)) => (entry.pattern, full_match(compiled.as_ref(), value)),
        None => {
            let compiled = Regex::new_full_match(custom_pattern, FlagSet::empty(), params);
            if let Err(err) = &compiled {
                debug!(%kind, pattern = custom_pattern, error = %err, "pattern rejected");
            }
            (custom_pattern, full_match(compiled.as_ref(), value))
        }
    };

    Validation {
        kind,
        pattern_used: pattern_used.to_owned(),
        outcome,
    }
}

fn full_match(compiled: Result<&Regex, &Error>, value: &str) -> ValidationOutcome {
    match compiled {
        Ok(regex) if regex.is_match(value) => ValidationOutcome::Matched,
        Ok(_) => ValidationOutcome::NotMatched,
        Err(err) => ValidationOutcome::InvalidPattern(err.clone()),
    }
}
