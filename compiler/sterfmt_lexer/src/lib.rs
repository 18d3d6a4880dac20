//! Tokenizer for sterfmt formatting markup.
//!
//! Markup looks like `<bold, red>text</>`: tags of comma-separated directive
//! words between `<` and `>`, plus `{`, `}`, `:` and `/` punctuation.
//!
//! ```text
//! &str → SourceBuffer → RawScanner → Lexer → Token + Option<LexError>
//! ```
//!
//! [`Lexer`] produces tokens one at a time and tracks the nesting balance.
//! [`lex`] runs a whole pass and collects tokens and diagnostics.

mod config;
pub mod keywords;
mod lex_error;
mod lexer;

use sterfmt_ir::TokenList;
use sterfmt_lexer_core::SourceBuffer;

pub use config::{IdentOverflow, LexerConfig, DEFAULT_MAX_IDENT_LEN};
pub use keywords::{Keyword, KEYWORDS};
pub use lex_error::{LexError, LexErrorContext, LexErrorKind, LexReplacement, LexSuggestion};
pub use lexer::{Lexed, Lexer};

/// Result of lexing a whole input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    /// Every token through the first `Eof`.
    pub tokens: TokenList,
    /// Diagnostics in source order.
    pub errors: Vec<LexError>,
    /// Nesting balance at end of input.
    pub balance: u32,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex `source` from start to the first `Eof`.
///
/// Never fails: problems are reported in [`LexOutput::errors`] next to an
/// `Illegal` (or otherwise best-effort) token.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str, config: &LexerConfig) -> LexOutput {
    let buffer = SourceBuffer::new(source);
    let mut lexer = Lexer::new(&buffer, *config);
    let mut tokens = TokenList::with_capacity(source.len() / 2 + 1);
    let mut errors = Vec::new();

    for Lexed { token, error } in lexer.by_ref() {
        tokens.push(token);
        errors.extend(error);
    }

    let balance = lexer.balance();
    tracing::debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        balance,
        "lexed input"
    );
    LexOutput {
        tokens,
        errors,
        balance,
    }
}
