//! Formatting session: lex markup, write token renderings, dispatch handlers.

use std::fmt::{self, Write as _};
use std::io;

use rustc_hash::FxHashMap;
use sterfmt_ir::{Token, TokenList};
use sterfmt_lexer::{lex, LexError, LexOutput, LexerConfig};

use crate::FormatError;

/// Callback for a named directive. Receives the token and the output the
/// session is writing to.
pub type Handler = Box<dyn Fn(&Token, &mut dyn io::Write) -> io::Result<()>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub lexer: LexerConfig,
    /// Refuse input with any lexer diagnostic.
    pub strict: bool,
}

/// What [`Session::feed`] found in its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedReport {
    /// Tokens produced, including the final `Eof`.
    pub tokens: usize,
    pub errors: Vec<LexError>,
}

/// Input accepted by [`Session::feed`] and not yet taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending {
    pub text: String,
    pub tokens: TokenList,
}

#[derive(Default)]
pub struct Session {
    config: SessionConfig,
    handlers: FxHashMap<String, Handler>,
    pending: Option<Pending>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            handlers: FxHashMap::default(),
            pending: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Render `args`, lex the result and keep it as pending input.
    ///
    /// Replaces any earlier pending input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn feed(&mut self, args: fmt::Arguments<'_>) -> Result<FeedReport, FormatError> {
        let text = render(args)?;
        let output = self.lex_checked(&text)?;
        let report = FeedReport {
            tokens: output.tokens.len(),
            errors: output.errors,
        };
        self.pending = Some(Pending {
            text,
            tokens: output.tokens,
        });
        Ok(report)
    }

    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    pub fn take_pending(&mut self) -> Option<Pending> {
        self.pending.take()
    }

    /// Lex `args` and write the input line, a blank line, then one line per
    /// token literal. Directive tokens with a registered handler go to the
    /// handler instead; service and `Illegal` tokens are always printed.
    ///
    /// Returns the number of tokens written or handled; `Eof` is not counted.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn emit<W: io::Write>(
        &self,
        out: &mut W,
        args: fmt::Arguments<'_>,
    ) -> Result<usize, FormatError> {
        let text = render(args)?;
        let output = self.lex_checked(&text)?;

        writeln!(out, "{text}")?;
        writeln!(out)?;

        let mut written = 0;
        for token in output.tokens.iter().filter(|t| !t.is_eof()) {
            let handler = token
                .kind
                .is_directive()
                .then(|| self.handlers.get(token.text))
                .flatten();
            match handler {
                Some(handler) => {
                    tracing::trace!(handler = token.text, "dispatching token");
                    handler(token, out)?;
                }
                None => writeln!(out, "{}", token.text)?,
            }
            written += 1;
        }
        Ok(written)
    }

    /// Register `handler` for tokens whose text is `name`.
    ///
    /// Names must be non-empty ASCII letters no longer than the lexer's
    /// identifier limit. Registration does not extend the keyword table: a
    /// name that is not a directive spelling never sees a token, and that
    /// includes `ILLEGAL` and `EOF`.
    pub fn register<F>(&mut self, name: &str, handler: F) -> Result<(), FormatError>
    where
        F: Fn(&Token, &mut dyn io::Write) -> io::Result<()> + 'static,
    {
        self.validate_handler_name(name)?;
        if self.handlers.contains_key(name) {
            return Err(FormatError::DuplicateHandler {
                name: name.to_owned(),
            });
        }
        if sterfmt_lexer::keywords::lookup(name).is_none() {
            tracing::debug!(name, "handler name is not a directive spelling");
        }
        self.handlers.insert(name.to_owned(), Box::new(handler));
        Ok(())
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    fn validate_handler_name(&self, name: &str) -> Result<(), FormatError> {
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if !name.bytes().all(|b| b.is_ascii_alphabetic()) {
            Some("names are ASCII letters only")
        } else if name.len() > self.config.lexer.max_ident_len as usize {
            Some("name is longer than the directive length limit")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(FormatError::InvalidHandlerName {
                name: name.to_owned(),
                reason,
            }),
            None => Ok(()),
        }
    }

    fn lex_checked(&self, text: &str) -> Result<LexOutput, FormatError> {
        let output = lex(text, &self.config.lexer);
        if self.config.strict && output.has_errors() {
            return Err(FormatError::Lex {
                errors: output.errors,
            });
        }
        Ok(output)
    }
}

fn render(args: fmt::Arguments<'_>) -> Result<String, FormatError> {
    if let Some(s) = args.as_str() {
        return Ok(s.to_owned());
    }
    let mut text = String::new();
    text.write_fmt(args)?;
    Ok(text)
}
