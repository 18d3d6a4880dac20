//! `lex`: print the token stream of an input.

use std::io;

use sterfmt_lexer::{lex, LexerConfig};

/// Print every token of `source`, then its diagnostics in short form.
///
/// Diagnostics do not fail the command; use `check` for that.
pub fn lex_source<W: io::Write>(
    out: &mut W,
    name: &str,
    source: &str,
    config: &LexerConfig,
) -> io::Result<()> {
    let output = lex(source, config);

    writeln!(out, "Tokens for '{}' ({} tokens):", name, output.tokens.len())?;
    for token in &output.tokens {
        writeln!(out, "  {:<12} {:<24} @ {}", token.text, token.kind.to_string(), token.span)?;
    }

    if output.has_errors() {
        writeln!(out)?;
        writeln!(out, "Diagnostics:")?;
        for error in &output.errors {
            writeln!(out, "  {}: {}", error.span, error.kind)?;
        }
    }
    Ok(())
}
