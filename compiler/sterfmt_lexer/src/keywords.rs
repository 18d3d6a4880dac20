//! Directive keyword table.
//!
//! A fixed, ordered list mapping bare-word spellings to token kinds. Lookup
//! is exact and case-sensitive; the first entry in table order wins when a
//! spelling appears more than once.
//!
//! # Shadowed Entries
//!
//! `default` is both a color and an alignment. Colors come first, so the bare
//! word `default` resolves to [`TokenKind::ColorDefault`] and the alignment
//! entry is never reached by [`lookup`].

use sterfmt_ir::TokenKind;

/// One entry of the keyword table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keyword {
    /// Canonical spelling. Tokens resolved through this entry carry it as
    /// their text.
    pub spelling: &'static str,
    pub kind: TokenKind,
}

const fn kw(spelling: &'static str, kind: TokenKind) -> Keyword {
    Keyword { spelling, kind }
}

/// The keyword table, in lookup order.
pub static KEYWORDS: &[Keyword] = &[
    // direction
    kw("up", TokenKind::Up),
    kw("down", TokenKind::Down),
    kw("left", TokenKind::Left),
    kw("right", TokenKind::Right),
    // decoration
    kw("none", TokenKind::DecorNone),
    kw("bold", TokenKind::Bold),
    kw("underline", TokenKind::Underline),
    kw("italic", TokenKind::Italic),
    kw("blink", TokenKind::Blink),
    kw("invert", TokenKind::Invert),
    kw("strike", TokenKind::Strike),
    // color
    kw("default", TokenKind::ColorDefault),
    kw("red", TokenKind::Red),
    kw("green", TokenKind::Green),
    kw("blue", TokenKind::Blue),
    kw("black", TokenKind::Black),
    kw("white", TokenKind::White),
    kw("magenta", TokenKind::Magenta),
    kw("cyan", TokenKind::Cyan),
    kw("yellow", TokenKind::Yellow),
    // alignment
    kw("default", TokenKind::AlignDefault),
    kw("justify", TokenKind::Justify),
    kw("center", TokenKind::Center),
];

/// Look up a directive by exact spelling.
///
/// Returns the first matching entry, or `None` for any other string.
#[inline]
pub fn lookup(spelling: &str) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|kw| kw.spelling == spelling)
}

/// Look up a directive ignoring ASCII case.
///
/// Only used to suggest a fix for an unknown word like `Bold`; resolution
/// itself stays case-sensitive.
pub fn lookup_ignore_ascii_case(spelling: &str) -> Option<&'static Keyword> {
    KEYWORDS
        .iter()
        .find(|kw| kw.spelling.eq_ignore_ascii_case(spelling))
}
