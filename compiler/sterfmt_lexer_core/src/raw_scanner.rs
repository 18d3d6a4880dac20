//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and allocates
//! nothing. It does not resolve keywords or track delimiter nesting; those
//! are deferred to `sterfmt_lexer`.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Every arm except EOF consumes
//! at least one byte, so a scan loop over `next_token()` always terminates.

use crate::cursor::{is_whitespace, Cursor};
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner. Produces one token at a time.
///
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.null_or_eof(start),
            b if is_whitespace(b) => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' => self.word(start),
            b'<' => self.single(start, RawTag::Less),
            b'>' => self.single(start, RawTag::Greater),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b':' => self.single(start, RawTag::Colon),
            b',' => self.single(start, RawTag::Comma),
            b'/' => self.single(start, RawTag::Slash),
            // Digits, other ASCII punctuation, control bytes, DEL, non-ASCII.
            _ => self.invalid_char(start),
        }
    }

    /// Current byte offset of the scanner.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Source text for a range produced by this scanner.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.cursor.slice(start, end)
    }

    fn null_or_eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            self.cursor.advance();
            RawToken {
                tag: RawTag::InteriorNull,
                len: self.cursor.pos() - start,
            }
        }
    }

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    #[inline]
    fn word(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_alphabetic());
        RawToken {
            tag: RawTag::Word,
            len: self.cursor.pos() - start,
        }
    }

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// One full code point, so the next token starts on a char boundary.
    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag: RawTag::InvalidChar,
            len: self.cursor.pos() - start,
        }
    }
}
