//! `keywords`: list the directive table.

use std::io;

use sterfmt_lexer::{keywords, KEYWORDS};

/// Print each table entry in lookup order.
///
/// Entries that an earlier entry with the same spelling hides are marked.
pub fn list_keywords<W: io::Write>(out: &mut W) -> io::Result<()> {
    for kw in KEYWORDS {
        let shadowed = keywords::lookup(kw.spelling).is_some_and(|first| first.kind != kw.kind);
        let note = if shadowed { "  (shadowed)" } else { "" };
        writeln!(
            out,
            "{:<10} {:<11} {:?}{note}",
            kw.spelling,
            kw.kind.family().name(),
            kw.kind
        )?;
    }
    Ok(())
}
