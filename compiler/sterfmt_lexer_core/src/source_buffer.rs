//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content, so
//! the cursor can read the "current" byte at end of input without a bounds
//! check. The total size is rounded up to the next 64-byte boundary.
//!
//! # Encoding Detection
//!
//! During construction the buffer scans for:
//! - UTF-8 BOM (sterfmt input must not start with one)
//! - Interior null bytes (a NUL inside the input would be confused with the
//!   sentinel)
//!
//! Issues are recorded as [`EncodingIssue`] values. `sterfmt_lexer` turns
//! them into diagnostics.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    encoding_issues: Vec<EncodingIssue>,
}

/// Encoding issue detected during source buffer construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodingIssue {
    pub kind: EncodingIssueKind,
    /// Byte position in the source where the issue was found.
    pub pos: u32,
    /// Byte length of the problematic sequence.
    pub len: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingIssueKind {
    /// UTF-8 BOM (`0xEF 0xBB 0xBF`) at start.
    Utf8Bom,
    /// Null byte (U+0000) in source content.
    InteriorNull,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Inputs larger than `u32::MAX` bytes are truncated to `u32::MAX` bytes
    /// of scannable content; spans are `u32` offsets.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len_u32 = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let source_len = source_len_u32 as usize;

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Sentinel and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(&source_bytes[..source_len]);

        let mut encoding_issues = Vec::new();
        detect_encoding_issues(&source_bytes[..source_len], &mut encoding_issues);

        Self {
            buf,
            source_len: source_len_u32,
            encoding_issues,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Encoding issues detected during construction, sorted by position.
    pub fn encoding_issues(&self) -> &[EncodingIssue] {
        &self.encoding_issues
    }

    /// The encoding issue starting exactly at `pos`, if any.
    pub fn encoding_issue_at(&self, pos: u32) -> Option<EncodingIssue> {
        self.encoding_issues
            .binary_search_by_key(&pos, |issue| issue.pos)
            .ok()
            .map(|idx| self.encoding_issues[idx])
    }
}

fn detect_encoding_issues(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    detect_bom(source, issues);
    detect_interior_nulls(source, issues);
}

/// Detect a byte order mark at the start of the source.
///
/// UTF-16 marks cannot occur: `0xFE` and `0xFF` never appear in a `&str`.
fn detect_bom(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    if source.starts_with(&[0xEF, 0xBB, 0xBF]) {
        issues.push(EncodingIssue {
            kind: EncodingIssueKind::Utf8Bom,
            pos: 0,
            len: 3,
        });
    }
}

/// Detect null bytes (U+0000) within the source content.
fn detect_interior_nulls(source: &[u8], issues: &mut Vec<EncodingIssue>) {
    for absolute in memchr::memchr_iter(0, source) {
        // `source` is capped at u32::MAX bytes by the constructor.
        if let Ok(pos) = u32::try_from(absolute) {
            issues.push(EncodingIssue {
                kind: EncodingIssueKind::InteriorNull,
                pos,
                len: 1,
            });
        }
    }
}
