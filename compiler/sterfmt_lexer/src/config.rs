//! Lexer configuration.

/// Longest directive name accepted by default.
pub const DEFAULT_MAX_IDENT_LEN: u32 = 31;

/// What to do with an alphabetic run longer than
/// [`LexerConfig::max_ident_len`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdentOverflow {
    /// Produce one `Illegal` token covering the whole run.
    #[default]
    Reject,
    /// Resolve the first `max_ident_len` letters; the token still covers the
    /// whole run.
    Truncate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LexerConfig {
    pub max_ident_len: u32,
    pub ident_overflow: IdentOverflow,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_ident_len: DEFAULT_MAX_IDENT_LEN,
            ident_overflow: IdentOverflow::default(),
        }
    }
}

impl LexerConfig {
    #[must_use]
    pub fn with_max_ident_len(mut self, max: u32) -> Self {
        self.max_ident_len = max;
        self
    }

    #[must_use]
    pub fn with_ident_overflow(mut self, policy: IdentOverflow) -> Self {
        self.ident_overflow = policy;
        self
    }
}
