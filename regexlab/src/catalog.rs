//! Named validation presets.
//!
//! The catalog is a fixed, read-only table. Each entry pairs a pattern describing the
//! whole value with the explanations given to the user on success and failure.
//!
//! Catalog patterns are compiled once, on first use, with the default
//! [`EngineParams`]. The limits given by a caller only apply to custom patterns.
use once_cell::sync::Lazy;

use crate::flags::FlagSet;
use crate::params::EngineParams;
use crate::regex::{Error, Regex};

/// Kind of validation requested by a caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresetKind {
    /// An e-mail address.
    Email,
    /// A togolese phone number, with or without the international prefix.
    Phone,
    /// A five digits postal code.
    PostalCode,
    /// A date in the `DD/MM/YYYY` format.
    Date,
    /// A pattern given by the caller.
    Custom,
}

impl PresetKind {
    /// All the kinds, catalog kinds first.
    pub const ALL: [Self; 5] = [
        Self::Email,
        Self::Phone,
        Self::PostalCode,
        Self::Date,
        Self::Custom,
    ];

    /// Name of the kind, as used by callers to select it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
            Self::PostalCode => "postal",
            Self::Date => "date",
            Self::Custom => "custom",
        }
    }

    /// Retrieve a kind from its name.
    ///
    /// Returns `None` if the name is not one of the known kinds.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for PresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Explanation given to the user after a validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    /// Short summary of the verdict.
    pub title: &'static str,
    /// Longer explanation of what was expected.
    pub text: &'static str,
}

/// Entry of the catalog.
#[derive(Debug)]
pub struct CatalogEntry {
    /// Kind described by this entry.
    pub kind: PresetKind,
    /// Pattern the whole value must match.
    pub pattern: &'static str,
    /// A value accepted by the pattern, quoted in the failure explanation.
    pub example: &'static str,
    /// Feedback when the value matches.
    pub success: Feedback,
    /// Feedback when the value does not match.
    pub failure: Feedback,
}

static CATALOG: [CatalogEntry; 4] = [
    CatalogEntry {
        kind: PresetKind::Email,
        pattern: r"^[\w\.-]+@[\w\.-]+\.\w{2,}$",
        example: "firstname.lastname@domain.com",
        success: Feedback {
            title: "Valid e-mail address",
            text: "The e-mail address has the expected shape: a local part, an '@', \
                then a domain name and an extension.",
        },
        failure: Feedback {
            title: "Invalid e-mail address",
            text: "An e-mail address looks like 'firstname.lastname@domain.com', with \
                an '@' and a valid domain name.",
        },
    },
    CatalogEntry {
        kind: PresetKind::Phone,
        // The ',' in the second class is a literal comma, kept as is.
        pattern: r"^(?:\+228\s?)?(?:7[0-3]|9[0-3,6-9])\d{6}$",
        example: "+228 90123456",
        success: Feedback {
            title: "Plausible phone number",
            text: "The number has the togolese format: an optional '+228' prefix, then \
                eight digits starting with 70 to 73, 90 to 93 or 96 to 99.",
        },
        failure: Feedback {
            title: "Invalid phone number",
            text: "A togolese phone number looks like '+228 90123456' or '90123456': \
                eight digits starting with 70 to 73, 90 to 93 or 96 to 99.",
        },
    },
    CatalogEntry {
        kind: PresetKind::PostalCode,
        pattern: r"^\d{5}$",
        example: "75001",
        success: Feedback {
            title: "Valid postal code",
            text: "The postal code contains exactly 5 digits.",
        },
        failure: Feedback {
            title: "Invalid postal code",
            text: "A standard postal code contains exactly 5 digits, for example 75001.",
        },
    },
    CatalogEntry {
        kind: PresetKind::Date,
        // Only the format is checked, not the validity in the calendar.
        pattern: r"^([0-2]\d|3[01])/(0\d|1[0-2])/\d{4}$",
        example: "31/12/2025",
        success: Feedback {
            title: "Date in the DD/MM/YYYY format",
            text: "The date has the DD/MM/YYYY format (day on 2 digits, month on 2 \
                digits, year on 4 digits).",
        },
        failure: Feedback {
            title: "Invalid date",
            text: "A date in the DD/MM/YYYY format looks like 31/12/2025: two digits, \
                '/', two digits, '/', four digits.",
        },
    },
];

static COMPILED: Lazy<Vec<Result<Regex, Error>>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|entry| {
            Regex::new_full_match(entry.pattern, FlagSet::empty(), &EngineParams::default())
        })
        .collect()
});

/// Feedback for a custom pattern matching the value.
pub const CUSTOM_SUCCESS: Feedback = Feedback {
    title: "Custom pattern satisfied",
    text: "The value matches the pattern you defined. You can adjust it to be stricter \
        or looser if needed.",
};

/// Feedback for a custom pattern not matching the value.
pub const CUSTOM_FAILURE: Feedback = Feedback {
    title: "Custom pattern not satisfied",
    text: "The value does not match the pattern you defined. Check that the pattern \
        describes the expected format (for example a specific number).",
};

/// Retrieve the catalog entry of a kind.
///
/// Returns `None` for [`PresetKind::Custom`], which has no entry.
#[must_use]
pub fn lookup(kind: PresetKind) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.kind == kind)
}

/// Retrieve the catalog entry of a kind, with its compiled pattern.
pub(crate) fn lookup_compiled(
    kind: PresetKind,
) -> Option<(&'static CatalogEntry, &'static Result<Regex, Error>)> {
    CATALOG
        .iter()
        .zip(COMPILED.iter())
        .find(|(entry, _)| entry.kind == kind)
}

/// Iterate over all the entries of the catalog.
pub fn entries() -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter()
}
