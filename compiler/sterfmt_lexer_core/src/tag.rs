//! Raw token tags produced by the [`RawScanner`](crate::RawScanner).

/// Byte-class tag of a raw token, with semantic range layout:
///
/// | Range   | Category   |
/// |---------|------------|
/// | 0-15    | Words      |
/// | 16-31   | Delimiters |
/// | 32-47   | Punctuation|
/// | 112-127 | Trivia     |
/// | 240-254 | Errors     |
/// | 255     | Control    |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Words (0-15) ===
    /// Maximal run of ASCII letters. Keyword resolution happens later.
    Word = 0,

    // === Delimiters (16-31) ===
    /// `<`
    Less = 16,
    /// `>`
    Greater = 17,
    /// `{`
    LeftBrace = 18,
    /// `}`
    RightBrace = 19,

    // === Punctuation (32-47) ===
    /// `:`
    Colon = 32,
    /// `,`
    Comma = 33,
    /// `/`
    Slash = 34,

    // === Trivia (112-127) ===
    /// Run of ASCII whitespace, newlines included.
    Whitespace = 112,

    // === Errors (240-254) ===
    /// One code point that starts no token.
    InvalidChar = 240,
    /// U+0000 inside the source content.
    InteriorNull = 245,

    // === Control (255) ===
    Eof = 255,
}

/// A raw token: tag plus byte length. The start offset is implicit in the
/// scan order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
