//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor holds the lexer's read position. The current byte is always
//! readable: at end of input it is the sentinel (`0x00`). Advancing at end of
//! input is a no-op, so the cursor never moves into the padding region.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an interior null (scanned as an error
//! token); a null at `pos >= source_len` is the sentinel (EOF).

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so snapshots are free.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and `pos <= source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    ///
    /// Interior null bytes also return `0x00`; use [`is_eof()`](Self::is_eof)
    /// to distinguish.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Decodes the code point at the current position.
    ///
    /// Returns `None` at EOF (the sentinel is not a character).
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.slice(self.pos, self.next_pos()).chars().next()
    }

    /// Advance past one code point.
    ///
    /// Idempotent at EOF: the position saturates at the source length.
    #[inline]
    pub fn advance(&mut self) {
        self.pos = self.next_pos().min(self.source_len);
    }

    /// Offset just past the current code point.
    ///
    /// Always greater than [`pos()`](Self::pos); at EOF it is `pos + 1` (the
    /// sentinel counts as one byte).
    #[inline]
    pub fn next_pos(&self) -> u32 {
        let width = Self::utf8_char_width(self.current());
        self.pos.saturating_add(width)
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Extract a source substring as `&str`.
    ///
    /// `start..end` must fall on UTF-8 boundaries within the source. The
    /// scanner only produces such ranges; anything else yields `""`.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.buf
            .get(start as usize..end as usize)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or("")
    }

    /// Advance byte-by-byte while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past a full run of ASCII whitespace.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }
}

/// The C `isspace` set: space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

#[cfg(test)]
mod tests;
