//! Compilation of patterns into the host regex engine.
use std::ops::Range;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use regex_automata::meta;
use regex_syntax::hir::{Hir, Look};
use regex_syntax::ParserBuilder;

use crate::flags::FlagSet;
use crate::params::EngineParams;

/// Label prefixed to the engine message in [`Error::diagnostic`].
pub const DIAGNOSTIC_LABEL: &str = "Pattern error";

/// A compiled pattern.
#[derive(Clone, Debug)]
pub struct Regex {
    meta: meta::Regex,
}

impl Regex {
    /// Compile a pattern, to search for it anywhere in a text.
    ///
    /// # Errors
    ///
    /// Will return `err` if the pattern is malformed, or too big to compile under
    /// the given parameters.
    pub fn new(expr: &str, flags: FlagSet, params: &EngineParams) -> Result<Self, Error> {
        let hir = parse(expr, flags, params)?;
        Self::from_hir(expr, &hir, params)
    }

    /// Compile a pattern that must describe the entire text.
    ///
    /// The parsed pattern is anchored at both ends of the text, whatever the
    /// flags: `^` and `$` in the pattern keep their own meaning, but the match
    /// must start at the start of the text and end at its end.
    ///
    /// # Errors
    ///
    /// Will return `err` if the pattern is malformed, or too big to compile under
    /// the given parameters.
    pub fn new_full_match(
        expr: &str,
        flags: FlagSet,
        params: &EngineParams,
    ) -> Result<Self, Error> {
        let hir = parse(expr, flags, params)?;
        let hir = Hir::concat(vec![Hir::look(Look::Start), hir, Hir::look(Look::End)]);
        Self::from_hir(expr, &hir, params)
    }

    fn from_hir(expr: &str, hir: &Hir, params: &EngineParams) -> Result<Self, Error> {
        let meta = meta::Builder::new()
            .configure(meta::Config::new().nfa_size_limit(Some(params.size_limit)))
            .build_from_hir(hir)
            .map_err(|err| Error::new(expr, ErrorKind::Build(err)))?;

        Ok(Self { meta })
    }

    /// Does the regex match somewhere in the haystack.
    ///
    /// For a regex built with [`Regex::new_full_match`], this checks the whole
    /// haystack matches.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.meta.is_match(haystack)
    }

    pub(crate) fn as_meta(&self) -> &meta::Regex {
        &self.meta
    }
}

fn parse(expr: &str, flags: FlagSet, params: &EngineParams) -> Result<Hir, Error> {
    ParserBuilder::new()
        .case_insensitive(flags.case_insensitive())
        .multi_line(flags.multiline())
        .dot_matches_new_line(flags.dot_all())
        .nest_limit(params.nest_limit)
        .build()
        .parse(expr)
        .map_err(|err| Error::new(expr, ErrorKind::Syntax(err)))
}

/// Error returned when a pattern cannot be compiled.
#[derive(Clone, Debug)]
pub struct Error {
    /// The pattern that failed to compile.
    expr: String,

    kind: Box<ErrorKind>,
}

#[derive(Clone, Debug)]
enum ErrorKind {
    /// The pattern is not valid in the syntax of the engine.
    Syntax(regex_syntax::Error),

    /// The pattern is valid, but its compiled form cannot be built.
    Build(meta::BuildError),
}

impl Error {
    fn new(expr: &str, kind: ErrorKind) -> Self {
        Self {
            expr: expr.to_owned(),
            kind: Box::new(kind),
        }
    }

    /// Return the pattern that failed to compile.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.expr
    }

    /// Human readable diagnostic, meant to be displayed to the user.
    ///
    /// This is the message of the engine, prefixed with [`DIAGNOSTIC_LABEL`].
    #[must_use]
    pub fn diagnostic(&self) -> String {
        format!("{DIAGNOSTIC_LABEL}: {self}")
    }

    /// Span of the error in the pattern, as offsets in bytes.
    #[must_use]
    pub fn span(&self) -> Option<Range<usize>> {
        match &*self.kind {
            ErrorKind::Syntax(regex_syntax::Error::Parse(err)) => Some(to_range(err.span())),
            ErrorKind::Syntax(regex_syntax::Error::Translate(err)) => Some(to_range(err.span())),
            _ => None,
        }
    }

    /// Convert to a [`Diagnostic`].
    ///
    /// The file associated with the diagnostic is the pattern itself.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic<()> {
        match &*self.kind {
            ErrorKind::Syntax(regex_syntax::Error::Parse(err)) => {
                let mut labels = vec![Label::primary((), to_range(err.span()))];
                if let Some(span) = err.auxiliary_span() {
                    labels.push(
                        Label::secondary((), to_range(span)).with_message("first defined here"),
                    );
                }
                Diagnostic::error()
                    .with_message(format!("invalid pattern: {}", err.kind()))
                    .with_labels(labels)
            }
            ErrorKind::Syntax(regex_syntax::Error::Translate(err)) => Diagnostic::error()
                .with_message(format!("invalid pattern: {}", err.kind()))
                .with_labels(vec![Label::primary((), to_range(err.span()))]),
            ErrorKind::Syntax(err) => {
                Diagnostic::error().with_message(format!("invalid pattern: {err}"))
            }
            ErrorKind::Build(_) => Diagnostic::error()
                .with_message(format!("invalid pattern: {self}"))
                .with_labels(vec![Label::primary((), 0..self.expr.len())]),
        }
    }
}

fn to_range(span: &regex_syntax::ast::Span) -> Range<usize> {
    span.start.offset..span.end.offset
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &*self.kind {
            ErrorKind::Syntax(err) => std::fmt::Display::fmt(err, f),
            ErrorKind::Build(err) => match err.size_limit() {
                Some(limit) => write!(f, "compiled pattern exceeds size limit of {limit} bytes"),
                None => std::fmt::Display::fmt(err, f),
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.kind {
            ErrorKind::Syntax(err) => Some(err),
            ErrorKind::Build(err) => Some(err),
        }
    }
}
