//! Flags modifying the interpretation of a pattern.
use bitflags::bitflags;

bitflags! {
    /// Set of flags applied when compiling a pattern.
    ///
    /// The empty set is the engine default: case-sensitive comparisons, `^` and `$`
    /// only match at the boundaries of the text, and `.` does not match `\n`.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FlagSet: u8 {
        /// Compare characters case-insensitively (`i` flag).
        const CASE_INSENSITIVE = 0b0000_0001;
        /// `^` and `$` match at the start and end of every line (`m` flag).
        const MULTILINE = 0b0000_0010;
        /// `.` also matches `\n` (`s` flag).
        const DOT_ALL = 0b0000_0100;
    }
}

impl FlagSet {
    /// Compose a flag set from the three independent toggles.
    #[must_use]
    pub fn compose(case_insensitive: bool, multiline: bool, dot_all: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::CASE_INSENSITIVE, case_insensitive);
        flags.set(Self::MULTILINE, multiline);
        flags.set(Self::DOT_ALL, dot_all);
        flags
    }

    /// Is the `i` flag set.
    #[must_use]
    pub fn case_insensitive(self) -> bool {
        self.contains(Self::CASE_INSENSITIVE)
    }

    /// Is the `m` flag set.
    #[must_use]
    pub fn multiline(self) -> bool {
        self.contains(Self::MULTILINE)
    }

    /// Is the `s` flag set.
    #[must_use]
    pub fn dot_all(self) -> bool {
        self.contains(Self::DOT_ALL)
    }
}

impl std::fmt::Display for FlagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Same letters as the inline flags of the pattern syntax.
        for (flag, letter) in [
            (Self::CASE_INSENSITIVE, 'i'),
            (Self::MULTILINE, 'm'),
            (Self::DOT_ALL, 's'),
        ] {
            if self.contains(flag) {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
