//! **regexlab** validates, extracts and transforms text with regular expressions.
//!
//! It is a thin semantic layer over a host regex engine: named validation presets,
//! composition of flags, structured match reporting and safe reporting of invalid
//! patterns. Every operation is a pure function of its inputs, and invalid patterns
//! are always returned as data, never as a panic.
//!
//! Here is an example on how to use the library.
//!
//! ```
//! use regexlab::{Engine, FlagSet};
//!
//! let engine = Engine::new();
//!
//! // Validate a value against a named preset.
//! let validation = engine.validate("postal", "", "75001").unwrap();
//! assert!(validation.is_match());
//!
//! // Extract every occurrence of a pattern.
//! let matches = engine.extract_all("a1 b2 c3", r"[a-z](\d)", FlagSet::default())?;
//! assert_eq!(matches.len(), 3);
//! assert_eq!(matches[1].groups, vec![Some("2".to_owned())]);
//!
//! // Substitute every occurrence, referencing captured groups.
//! let res = engine.substitute_all(
//!     "2024-05-01",
//!     r"(\d+)-(\d+)-(\d+)",
//!     "$3/$2/$1",
//!     FlagSet::default(),
//! )?;
//! assert_eq!(res.output_text, "01/05/2024");
//! assert_eq!(res.count, 1);
//!
//! # Ok::<(), regexlab::regex::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Used in tests, not in the library.
#[cfg(test)]
use pretty_assertions as _;

pub mod catalog;
pub use catalog::{CatalogEntry, Feedback, PresetKind};
pub mod engine;
pub use engine::Engine;
mod extractor;
pub use extractor::MatchRecord;
pub mod flags;
pub use flags::FlagSet;
pub mod params;
pub use params::EngineParams;
pub mod regex;
pub mod report;
mod transformer;
pub use transformer::TransformResult;
mod validator;
pub use validator::{Validation, ValidationOutcome};

#[cfg(test)]
mod test_helpers;
