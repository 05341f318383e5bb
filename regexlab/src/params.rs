//! Engine parameters

/// Parameters used when compiling patterns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineParams {
    /// Maximum nesting depth of a pattern.
    pub(crate) nest_limit: u32,

    /// Maximum heap size of a compiled pattern, in bytes.
    pub(crate) size_limit: usize,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            nest_limit: 250,
            size_limit: 10 * (1 << 20),
        }
    }
}

impl EngineParams {
    /// Maximum nesting depth of a pattern.
    ///
    /// Nesting covers groups, repetitions and alternations. This prevents the parsing
    /// of a pattern from overflowing the stack. A pattern exceeding this depth is
    /// reported as an invalid pattern.
    ///
    /// Default value is `250`.
    #[must_use]
    pub fn nest_limit(mut self, nest_limit: u32) -> Self {
        self.nest_limit = nest_limit;
        self
    }

    /// Maximum heap size of a compiled pattern, in bytes.
    ///
    /// Patterns such as `\w{1000}` can generate very large automatons, especially with
    /// unicode classes. A pattern whose compiled form exceeds this size is reported as
    /// an invalid pattern.
    ///
    /// Default value is 10MB.
    #[must_use]
    pub fn size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Return the value set by [`Self::nest_limit`].
    #[must_use]
    pub fn get_nest_limit(&self) -> u32 {
        self.nest_limit
    }

    /// Return the value set by [`Self::size_limit`].
    #[must_use]
    pub fn get_size_limit(&self) -> usize {
        self.size_limit
    }
}
