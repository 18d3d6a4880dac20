//! `check`: report diagnostics with source snippets.

use std::io;

use sterfmt_lexer::{lex, LexerConfig};

use crate::diagnostic::{render_errors, RenderOptions};

/// Render every diagnostic of `source` to `out`.
///
/// Returns `true` when the input is clean.
pub fn check_source<W: io::Write>(
    out: &mut W,
    name: &str,
    source: &str,
    config: &LexerConfig,
    render: RenderOptions,
) -> io::Result<bool> {
    let output = lex(source, config);
    if !output.has_errors() {
        writeln!(out, "{name}: no problems found")?;
        return Ok(true);
    }

    render_errors(out, name, source, &output.errors, render)?;
    let count = output.errors.len();
    let s = if count == 1 { "" } else { "s" };
    writeln!(out, "{name}: {count} problem{s} found")?;
    Ok(false)
}
