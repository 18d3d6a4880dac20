//! Low-level scanner for sterfmt markup.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → (RawTag, len)
//! ```
//!
//! The raw layer knows only byte classes. Keyword resolution, nesting
//! balance, and diagnostics live in `sterfmt_lexer`.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use tag::{RawTag, RawToken};
