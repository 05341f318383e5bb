//! Entry point of the library.
use tracing::debug;

use crate::catalog::PresetKind;
use crate::extractor::{self, MatchRecord};
use crate::flags::FlagSet;
use crate::params::EngineParams;
use crate::regex::{Error, Regex};
use crate::transformer::{self, TransformResult};
use crate::validator::{self, Validation};

/// Engine running the validation, extraction and transformation operations.
///
/// The engine holds no mutable state: every operation compiles its pattern, runs it and
/// returns a value. It can be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    params: EngineParams,
}

impl Engine {
    /// Create an engine with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given parameters.
    #[must_use]
    pub fn with_params(params: EngineParams) -> Self {
        Self { params }
    }

    /// Parameters of the engine.
    #[must_use]
    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Validate a value, the kind being given by its name.
    ///
    /// This is the entry point for callers receiving the kind as raw text: if `kind`
    /// is not the name of a [`PresetKind`], no validation is done and `None` is
    /// returned. Otherwise, see [`Engine::validate_kind`].
    #[must_use]
    pub fn validate(&self, kind: &str, custom_pattern: &str, value: &str) -> Option<Validation> {
        match PresetKind::from_name(kind) {
            Some(kind) => Some(self.validate_kind(kind, custom_pattern, value)),
            None => {
                debug!(kind, "unknown validation kind, nothing done");
                None
            }
        }
    }

    /// Validate that a whole value matches the pattern of a kind.
    ///
    /// For a catalog kind, the catalog pattern is used and `custom_pattern` is ignored.
    /// For [`PresetKind::Custom`], `custom_pattern` is used. An invalid custom pattern
    /// is reported in the outcome of the validation.
    #[must_use]
    pub fn validate_kind(
        &self,
        kind: PresetKind,
        custom_pattern: &str,
        value: &str,
    ) -> Validation {
        let validation = validator::validate(kind, custom_pattern, value, &self.params);
        debug!(
            %kind,
            pattern = %validation.pattern_used,
            outcome = ?validation.outcome,
            "validation done"
        );
        validation
    }

    /// Find every non-overlapping occurrence of a pattern in a text.
    ///
    /// Occurrences are returned in the order of the text.
    ///
    /// # Errors
    ///
    /// Will return `err` if the pattern cannot be compiled. No occurrences are
    /// returned in that case.
    pub fn extract_all(
        &self,
        text: &str,
        pattern: &str,
        flags: FlagSet,
    ) -> Result<Vec<MatchRecord>, Error> {
        let regex = self.compile(pattern, flags)?;
        let records = extractor::extract_all(text, &regex);
        debug!(pattern, %flags, nb_matches = records.len(), "extraction done");
        Ok(records)
    }

    /// Replace every non-overlapping occurrence of a pattern in a text.
    ///
    /// The template can reference captured groups with `$1`, `${1}` or `${name}`,
    /// and `$$` is a literal `$`.
    ///
    /// # Errors
    ///
    /// Will return `err` if the pattern cannot be compiled. No substitution is
    /// done in that case.
    pub fn substitute_all(
        &self,
        text: &str,
        pattern: &str,
        template: &str,
        flags: FlagSet,
    ) -> Result<TransformResult, Error> {
        let regex = self.compile(pattern, flags)?;
        let res = transformer::substitute_all(text, &regex, template);
        debug!(pattern, %flags, count = res.count, "substitution done");
        Ok(res)
    }

    fn compile(&self, pattern: &str, flags: FlagSet) -> Result<Regex, Error> {
        Regex::new(pattern, flags, &self.params).map_err(|err| {
            debug!(pattern, %flags, error = %err, "pattern rejected");
            err
        })
    }
}
